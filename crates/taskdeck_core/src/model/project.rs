//! Project domain model.
//!
//! # Responsibility
//! - Define the project record and its status lifecycle.
//! - Reject structurally inconsistent projects at construction and decode.
//!
//! # Invariants
//! - `completed_tasks <= tasks_count`.
//! - `progress` is a percentage in `0..=100`.
//! - `end_date` is not earlier than `start_date`.
//! - `progress` is stored independently of the task counters and is never
//!   recomputed here; see `derive::derived_progress`.

use crate::model::category::{parse_category, Category, CategoryParseError, Priority};
use crate::model::user::UserId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type ProjectId = Uuid;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
    OnHold,
    Archived,
}

impl Category for ProjectStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Completed, Self::OnHold, Self::Archived];

    fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::OnHold => "on-hold",
            Self::Archived => "archived",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
            Self::Archived => "Archived",
        }
    }
}

impl ProjectStatus {
    pub fn parse(value: &str) -> Result<Self, CategoryParseError> {
        parse_category("project status", value)
    }
}

/// Project record as held by the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProjectRecord")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    /// Stored percentage; may disagree with the task counters.
    pub progress: u8,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Ordered member list. Treated as a set by membership checks.
    pub team: Vec<UserId>,
    /// Display color as `#RRGGBB`.
    pub color: String,
    pub tasks_count: u32,
    pub completed_tasks: u32,
}

impl Project {
    /// Returns whether `user` appears in the team list.
    pub fn has_member(&self, user: UserId) -> bool {
        self.team.contains(&user)
    }

    /// Validates counter, progress and date-range invariants.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.completed_tasks > self.tasks_count {
            return Err(ProjectValidationError::CompletedExceedsTotal {
                completed: self.completed_tasks,
                total: self.tasks_count,
            });
        }
        if self.progress > 100 {
            return Err(ProjectValidationError::ProgressOutOfRange(self.progress));
        }
        if self.end_date < self.start_date {
            return Err(ProjectValidationError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }
}

/// Project invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    CompletedExceedsTotal { completed: u32, total: u32 },
    ProgressOutOfRange(u8),
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CompletedExceedsTotal { completed, total } => write!(
                f,
                "completed_tasks ({completed}) must be <= tasks_count ({total})"
            ),
            Self::ProgressOutOfRange(value) => {
                write!(f, "progress ({value}) must be within 0..=100")
            }
            Self::InvalidDateRange { start, end } => {
                write!(f, "end_date ({end}) must be >= start_date ({start})")
            }
        }
    }
}

impl Error for ProjectValidationError {}

#[derive(Deserialize)]
struct ProjectRecord {
    id: ProjectId,
    name: String,
    description: String,
    status: ProjectStatus,
    priority: Priority,
    progress: u8,
    start_date: NaiveDate,
    end_date: NaiveDate,
    team: Vec<UserId>,
    color: String,
    tasks_count: u32,
    completed_tasks: u32,
}

impl TryFrom<ProjectRecord> for Project {
    type Error = ProjectValidationError;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        let project = Project {
            id: record.id,
            name: record.name,
            description: record.description,
            status: record.status,
            priority: record.priority,
            progress: record.progress,
            start_date: record.start_date,
            end_date: record.end_date,
            team: record.team,
            color: record.color,
            tasks_count: record.tasks_count,
            completed_tasks: record.completed_tasks,
        };
        project.validate()?;
        Ok(project)
    }
}
