//! Screen and modal identifiers.

use crate::model::category::{parse_category, Category, CategoryParseError};
use serde::{Deserialize, Serialize};

/// Top-level screen; exactly one is active at a time.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Dashboard,
    Projects,
    Tasks,
    Team,
    Calendar,
    Reports,
    Notifications,
    Settings,
}

impl Category for Screen {
    const ALL: &'static [Self] = &[
        Self::Dashboard,
        Self::Projects,
        Self::Tasks,
        Self::Team,
        Self::Calendar,
        Self::Reports,
        Self::Notifications,
        Self::Settings,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Projects => "projects",
            Self::Tasks => "tasks",
            Self::Team => "team",
            Self::Calendar => "calendar",
            Self::Reports => "reports",
            Self::Notifications => "notifications",
            Self::Settings => "settings",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Projects => "Projects",
            Self::Tasks => "Tasks",
            Self::Team => "Team",
            Self::Calendar => "Calendar",
            Self::Reports => "Reports",
            Self::Notifications => "Notifications",
            Self::Settings => "Settings",
        }
    }
}

impl Screen {
    pub fn parse(value: &str) -> Result<Self, CategoryParseError> {
        parse_category("screen", value)
    }
}

/// Dialog that can be open on top of the active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modal {
    CreateTask,
    CreateProject,
    EditProfile,
    TaskDetail,
    ProjectDetail,
}

impl Modal {
    /// Modals that hold a draft and commit on submit.
    pub fn is_form(self) -> bool {
        matches!(self, Self::CreateTask | Self::CreateProject | Self::EditProfile)
    }

    /// Whether a click on the backdrop closes this modal.
    ///
    /// Form modals close only through cancel or submit.
    pub fn dismissible_by_backdrop(self) -> bool {
        !self.is_form()
    }
}

#[cfg(test)]
mod tests {
    use super::{Modal, Screen};
    use crate::model::category::Category;

    #[test]
    fn every_screen_parses_from_its_wire_string() {
        for screen in Screen::ALL {
            assert_eq!(Screen::parse(screen.as_str()), Ok(*screen));
        }
        assert!(Screen::parse("admin").is_err());
    }

    #[test]
    fn only_detail_modals_close_on_backdrop() {
        assert!(!Modal::CreateTask.dismissible_by_backdrop());
        assert!(!Modal::EditProfile.dismissible_by_backdrop());
        assert!(Modal::TaskDetail.dismissible_by_backdrop());
    }
}
