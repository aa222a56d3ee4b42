//! Dashboard configuration.
//!
//! # Responsibility
//! - Hold tunables for deadline windows, animation durations, modal policy
//!   and log level.
//! - Decode from JSON with per-field defaults.
//!
//! # Invariants
//! - A config returned by `from_json_str` has passed `validate()`.

use crate::logging::{default_log_level, normalize_level};
use crate::view::controller::ModalPolicy;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MAX_UPCOMING_WINDOW_DAYS: u32 = 366;
const MAX_ANIMATION_DURATION_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Days ahead covered by "upcoming deadlines".
    pub upcoming_window_days: u32,
    /// Stat-card counter ramp duration.
    pub counter_duration_ms: u64,
    /// Progress bar and chart reveal duration.
    pub progress_duration_ms: u64,
    pub modal_policy: ModalPolicy,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            upcoming_window_days: 7,
            counter_duration_ms: 2_000,
            progress_duration_ms: 1_500,
            modal_policy: ModalPolicy::Independent,
            log_level: default_log_level().to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parses and validates a JSON config; missing fields take defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upcoming_window_days == 0 || self.upcoming_window_days > MAX_UPCOMING_WINDOW_DAYS
        {
            return Err(ConfigError::InvalidField {
                field: "upcoming_window_days",
                reason: format!("must be within 1..={MAX_UPCOMING_WINDOW_DAYS}"),
            });
        }
        for (field, value) in [
            ("counter_duration_ms", self.counter_duration_ms),
            ("progress_duration_ms", self.progress_duration_ms),
        ] {
            if value > MAX_ANIMATION_DURATION_MS {
                return Err(ConfigError::InvalidField {
                    field,
                    reason: format!("must be <= {MAX_ANIMATION_DURATION_MS}"),
                });
            }
        }
        normalize_level(&self.log_level).map_err(|reason| ConfigError::InvalidField {
            field: "log_level",
            reason,
        })?;
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    InvalidField { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::InvalidField { field, reason } => write!(f, "invalid config `{field}`: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::InvalidField { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DashboardConfig};
    use crate::view::controller::ModalPolicy;

    #[test]
    fn missing_fields_take_defaults() {
        let config = DashboardConfig::from_json_str(r#"{"modal_policy":"exclusive_forms"}"#)
            .expect("partial config should parse");
        assert_eq!(config.modal_policy, ModalPolicy::ExclusiveForms);
        assert_eq!(config.upcoming_window_days, 7);
        assert_eq!(config.counter_duration_ms, 2_000);
    }

    #[test]
    fn rejects_zero_window_and_unknown_level() {
        let err = DashboardConfig::from_json_str(r#"{"upcoming_window_days":0}"#)
            .expect_err("zero window must fail");
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "upcoming_window_days",
                ..
            }
        ));

        let err = DashboardConfig::from_json_str(r#"{"log_level":"loud"}"#)
            .expect_err("unknown level must fail");
        assert!(err.to_string().contains("log_level"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = DashboardConfig::from_json_str("{").expect_err("malformed json must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
