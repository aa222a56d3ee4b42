//! Closed category sets shared by entities and derivations.
//!
//! # Responsibility
//! - Give every enumerated field a stable wire string.
//! - Let partitions enumerate all keys without a value present.
//!
//! # Invariants
//! - `ALL` lists every variant exactly once, in declaration order.
//! - `parse(as_str(x)) == x` for every variant.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Finite, ordered category used as a partition key.
pub trait Category: Copy + Ord + 'static {
    /// Every variant, in display order.
    const ALL: &'static [Self];

    /// Stable wire string.
    fn as_str(self) -> &'static str;

    /// Human label for dropdowns and chart legends.
    fn label(self) -> &'static str;
}

/// Parses one category value from its wire string.
pub fn parse_category<C: Category>(
    kind: &'static str,
    value: &str,
) -> Result<C, CategoryParseError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(CategoryParseError::Empty { kind });
    }
    C::ALL
        .iter()
        .copied()
        .find(|candidate| candidate.as_str() == normalized)
        .ok_or_else(|| CategoryParseError::Unsupported {
            kind,
            value: normalized.to_string(),
        })
}

/// Category parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Empty { kind: &'static str },
    Unsupported { kind: &'static str, value: String },
}

impl Display for CategoryParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { kind } => write!(f, "{kind} value must not be empty"),
            Self::Unsupported { kind, value } => write!(f, "{kind} is unsupported: {value}"),
        }
    }
}

impl Error for CategoryParseError {}

/// Urgency level shared by projects and tasks.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Category for Priority {
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High, Self::Urgent];

    fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }
}

impl Priority {
    pub fn parse(value: &str) -> Result<Self, CategoryParseError> {
        parse_category("priority", value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, CategoryParseError, Priority};

    #[test]
    fn priority_wire_strings_round_trip() {
        for priority in Priority::ALL {
            assert_eq!(Priority::parse(priority.as_str()), Ok(*priority));
        }
    }

    #[test]
    fn parse_rejects_blank_and_unknown_values() {
        assert_eq!(
            Priority::parse("  "),
            Err(CategoryParseError::Empty { kind: "priority" })
        );
        assert_eq!(
            Priority::parse("Critical"),
            Err(CategoryParseError::Unsupported {
                kind: "priority",
                value: "Critical".to_string(),
            })
        );
    }

    #[test]
    fn all_is_in_ascending_order() {
        let mut sorted = Priority::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, Priority::ALL);
    }
}
