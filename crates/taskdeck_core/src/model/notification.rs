//! Notification record.
//!
//! `read` is the only field that changes after seeding.

use crate::model::category::{parse_category, Category, CategoryParseError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type NotificationId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    TaskAssigned,
    TaskCompleted,
    ProjectUpdated,
    DeadlineApproaching,
}

impl Category for NotificationKind {
    const ALL: &'static [Self] = &[
        Self::TaskAssigned,
        Self::TaskCompleted,
        Self::ProjectUpdated,
        Self::DeadlineApproaching,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::TaskAssigned => "task_assigned",
            Self::TaskCompleted => "task_completed",
            Self::ProjectUpdated => "project_updated",
            Self::DeadlineApproaching => "deadline_approaching",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::TaskAssigned => "Task assigned",
            Self::TaskCompleted => "Task completed",
            Self::ProjectUpdated => "Project updated",
            Self::DeadlineApproaching => "Deadline approaching",
        }
    }
}

impl NotificationKind {
    pub fn parse(value: &str) -> Result<Self, CategoryParseError> {
        parse_category("notification kind", value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    /// Serialized as `type` to match the stored list shape.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    /// Optional in-app route opened when the notification is clicked.
    #[serde(default)]
    pub action_url: Option<String>,
}
