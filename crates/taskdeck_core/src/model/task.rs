//! Task domain model with its child records.
//!
//! # Responsibility
//! - Define the task record, its status lifecycle, comments and attachments.
//! - Normalize tag sets.
//!
//! # Invariants
//! - A task references exactly one assignee and one project by id.
//! - Tags are lowercase, trimmed and deduplicated.
//! - Tasks are never hard-deleted.

use crate::model::category::{parse_category, Category, CategoryParseError, Priority};
use crate::model::project::ProjectId;
use crate::model::user::UserId;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

pub type TaskId = Uuid;
pub type CommentId = Uuid;
pub type AttachmentId = Uuid;

/// Task lifecycle state.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Review,
    Completed,
}

impl Category for TaskStatus {
    const ALL: &'static [Self] = &[Self::Todo, Self::InProgress, Self::Review, Self::Completed];

    fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Completed => "completed",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Completed => "Completed",
        }
    }
}

impl TaskStatus {
    pub fn parse(value: &str) -> Result<Self, CategoryParseError> {
        parse_category("task status", value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// File metadata attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: AttachmentId,
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub assignee: UserId,
    pub project: ProjectId,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub tags: BTreeSet<String>,
    pub attachments: Vec<Attachment>,
    pub comments: Vec<Comment>,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Calendar day of the due instant as seen from `tz`.
    pub fn due_day<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.due_date.with_timezone(tz).date_naive()
    }
}

/// Normalizes one tag value to lowercase.
///
/// Returns `None` when the trimmed value is empty.
pub fn normalize_tag(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Normalizes, drops blanks and deduplicates a tag list.
pub fn normalize_tags<S: AsRef<str>>(tags: &[S]) -> BTreeSet<String> {
    tags.iter()
        .filter_map(|tag| normalize_tag(tag.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{normalize_tags, TaskStatus};
    use crate::model::category::Category;

    #[test]
    fn status_wire_strings_use_kebab_case() {
        assert_eq!(TaskStatus::InProgress.as_str(), "in-progress");
        assert_eq!(
            serde_json::to_value(TaskStatus::InProgress).expect("serialize"),
            "in-progress"
        );
        assert_eq!(TaskStatus::parse("review"), Ok(TaskStatus::Review));
    }

    #[test]
    fn normalize_tags_lowercases_and_dedupes() {
        let tags = normalize_tags(&["Design", " UX ", "design", "  "]);
        assert_eq!(
            tags.into_iter().collect::<Vec<_>>(),
            vec!["design".to_string(), "ux".to_string()]
        );
    }
}
