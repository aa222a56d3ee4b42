//! Form drafts and their validation.
//!
//! # Responsibility
//! - Hold in-progress field values for the task, project and profile forms.
//! - Validate a draft into a commit input, or report field-keyed errors.
//!
//! # Invariants
//! - Validation is pure: it never touches the workspace.
//! - `Default` is the value a draft returns to after a successful submit.

use crate::model::category::Priority;
use crate::model::project::{ProjectId, ProjectStatus};
use crate::model::task::TaskStatus;
use crate::model::user::{User, UserId};
use crate::service::workspace::{NewProject, NewTask, ProfileUpdate};
use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

const TITLE_MAX_CHARS: usize = 120;
const DESCRIPTION_MAX_CHARS: usize = 2_000;
pub const DEFAULT_PROJECT_COLOR: &str = "#3B82F6";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid color regex"));

/// Why one field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    TooLong { max_chars: usize },
    InvalidFormat,
    /// Value conflicts with another field, e.g. end before start.
    InvalidRange,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "is required"),
            Self::TooLong { max_chars } => write!(f, "must be at most {max_chars} characters"),
            Self::InvalidFormat => write!(f, "has an invalid format"),
            Self::InvalidRange => write!(f, "is out of range"),
        }
    }
}

/// Field-keyed validation failures for one form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the first error for `field`; later errors for it are ignored.
    pub fn add(&mut self, field: &'static str, error: FieldError) {
        self.fields.entry(field).or_insert(error);
    }

    pub fn get(&self, field: &str) -> Option<FieldError> {
        self.fields.get(field).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, FieldError)> + '_ {
        self.fields.iter().map(|(field, error)| (*field, *error))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, error) in &self.fields {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field} {error}")?;
            first = false;
        }
        Ok(())
    }
}

impl Error for ValidationErrors {}

fn check_text(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    required: bool,
    max_chars: usize,
) {
    let trimmed = value.trim();
    if required && trimmed.is_empty() {
        errors.add(field, FieldError::Required);
    } else if trimmed.chars().count() > max_chars {
        errors.add(field, FieldError::TooLong { max_chars });
    }
}

fn require<T: Copy>(errors: &mut ValidationErrors, field: &'static str, value: Option<T>) {
    if value.is_none() {
        errors.add(field, FieldError::Required);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub assignee: Option<UserId>,
    pub project: Option<ProjectId>,
    pub due_date: Option<DateTime<Utc>>,
    /// Raw tag entries; normalized on commit.
    pub tags: Vec<String>,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            assignee: None,
            project: None,
            due_date: None,
            tags: Vec::new(),
        }
    }
}

impl TaskDraft {
    pub fn validate(&self) -> Result<NewTask, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_text(&mut errors, "title", &self.title, true, TITLE_MAX_CHARS);
        check_text(
            &mut errors,
            "description",
            &self.description,
            false,
            DESCRIPTION_MAX_CHARS,
        );
        require(&mut errors, "assignee", self.assignee);
        require(&mut errors, "project", self.project);
        require(&mut errors, "due_date", self.due_date);

        match (self.assignee, self.project, self.due_date) {
            (Some(assignee), Some(project), Some(due_date)) => errors.into_result(|| NewTask {
                title: self.title.trim().to_string(),
                description: self.description.trim().to_string(),
                status: self.status,
                priority: self.priority,
                assignee,
                project,
                due_date,
                tags: self.tags.clone(),
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub team: Vec<UserId>,
    pub color: String,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            status: ProjectStatus::Active,
            priority: Priority::Medium,
            start_date: None,
            end_date: None,
            team: Vec::new(),
            color: DEFAULT_PROJECT_COLOR.to_string(),
        }
    }
}

impl ProjectDraft {
    pub fn validate(&self) -> Result<NewProject, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_text(&mut errors, "name", &self.name, true, TITLE_MAX_CHARS);
        check_text(
            &mut errors,
            "description",
            &self.description,
            false,
            DESCRIPTION_MAX_CHARS,
        );
        require(&mut errors, "start_date", self.start_date);
        require(&mut errors, "end_date", self.end_date);
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                errors.add("end_date", FieldError::InvalidRange);
            }
        }
        if !HEX_COLOR_RE.is_match(self.color.trim()) {
            errors.add("color", FieldError::InvalidFormat);
        }

        match (self.start_date, self.end_date) {
            (Some(start_date), Some(end_date)) => errors.into_result(|| NewProject {
                name: self.name.trim().to_string(),
                description: self.description.trim().to_string(),
                status: self.status,
                priority: self.priority,
                start_date,
                end_date,
                team: self.team.clone(),
                color: self.color.trim().to_uppercase(),
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

impl ProfileDraft {
    /// Prefills the draft from the stored profile.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
        }
    }

    pub fn validate(&self) -> Result<ProfileUpdate, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_text(&mut errors, "name", &self.name, true, TITLE_MAX_CHARS);
        let email = self.email.trim();
        if email.is_empty() {
            errors.add("email", FieldError::Required);
        } else if !EMAIL_RE.is_match(email) {
            errors.add("email", FieldError::InvalidFormat);
        }

        errors.into_result(|| ProfileUpdate {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            avatar: self
                .avatar
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
        })
    }
}
