//! Entity workspace with copy-on-write snapshots.
//!
//! # Responsibility
//! - Hold users, projects, tasks and team stats loaded once at startup.
//! - Apply validated commits (task, project, comment, profile, presence).
//!
//! # Invariants
//! - Collections are shared as `Arc<Vec<_>>` snapshots; a mutation swaps in a
//!   new vector, so a snapshot taken earlier never changes.
//! - Commits referencing a missing user, project or task fail closed and
//!   leave every collection untouched.
//! - Project task counters follow task creation and completion.

use crate::model::category::Priority;
use crate::model::project::{Project, ProjectId, ProjectStatus, ProjectValidationError};
use crate::model::task::{normalize_tags, Comment, CommentId, Task, TaskId, TaskStatus};
use crate::model::user::{Presence, TeamMember, User, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use uuid::Uuid;

pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

/// Commit failures. None of them mutate the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
    UserNotFound(UserId),
    ProjectNotFound(ProjectId),
    TaskNotFound(TaskId),
    InvalidProject(ProjectValidationError),
}

impl Display for WorkspaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserNotFound(id) => write!(f, "user not found: {id}"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::InvalidProject(err) => write!(f, "{err}"),
        }
    }
}

impl Error for WorkspaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidProject(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ProjectValidationError> for WorkspaceError {
    fn from(value: ProjectValidationError) -> Self {
        Self::InvalidProject(value)
    }
}

/// Validated input for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub assignee: UserId,
    pub project: ProjectId,
    pub due_date: DateTime<Utc>,
    pub tags: Vec<String>,
}

/// Validated input for a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub team: Vec<UserId>,
    pub color: String,
}

/// Validated profile edit for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

/// In-memory entity store shared by the view layer.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    users: Arc<Vec<User>>,
    projects: Arc<Vec<Project>>,
    tasks: Arc<Vec<Task>>,
    members: Arc<Vec<TeamMember>>,
}

impl Workspace {
    pub fn new(
        users: Vec<User>,
        projects: Vec<Project>,
        tasks: Vec<Task>,
        members: Vec<TeamMember>,
    ) -> Self {
        Self {
            users: Arc::new(users),
            projects: Arc::new(projects),
            tasks: Arc::new(tasks),
            members: Arc::new(members),
        }
    }

    pub fn users(&self) -> Arc<Vec<User>> {
        Arc::clone(&self.users)
    }

    pub fn projects(&self) -> Arc<Vec<Project>> {
        Arc::clone(&self.projects)
    }

    pub fn tasks(&self) -> Arc<Vec<Task>> {
        Arc::clone(&self.tasks)
    }

    pub fn members(&self) -> Arc<Vec<TeamMember>> {
        Arc::clone(&self.members)
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Creates a task with a generated id.
    ///
    /// # Errors
    /// - `UserNotFound` when the assignee is unknown.
    /// - `ProjectNotFound` when the owning project is unknown.
    pub fn create_task(&mut self, input: NewTask, now: DateTime<Utc>) -> WorkspaceResult<TaskId> {
        self.require_user(input.assignee, "task_create")?;
        let project_index = self.require_project(input.project, "task_create")?;

        let task = Task {
            id: Uuid::new_v4(),
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            status: input.status,
            priority: input.priority,
            assignee: input.assignee,
            project: input.project,
            due_date: input.due_date,
            created_at: now,
            tags: normalize_tags(&input.tags),
            attachments: Vec::new(),
            comments: Vec::new(),
        };
        let task_id = task.id;
        let completed = task.is_completed();

        Arc::make_mut(&mut self.tasks).push(task);
        let project = &mut Arc::make_mut(&mut self.projects)[project_index];
        project.tasks_count += 1;
        if completed {
            project.completed_tasks += 1;
        }

        info!(
            "event=task_create module=workspace status=ok task_id={} project_id={}",
            task_id, input.project
        );
        Ok(task_id)
    }

    /// Moves one task to `status`, keeping project counters in step.
    pub fn update_task_status(&mut self, id: TaskId, status: TaskStatus) -> WorkspaceResult<()> {
        let task_index = self.require_task(id, "task_status")?;
        let previous = self.tasks[task_index].status;
        if previous == status {
            return Ok(());
        }
        let project_id = self.tasks[task_index].project;

        Arc::make_mut(&mut self.tasks)[task_index].status = status;
        if let Some(project_index) = self.projects.iter().position(|p| p.id == project_id) {
            let project = &mut Arc::make_mut(&mut self.projects)[project_index];
            match (previous == TaskStatus::Completed, status == TaskStatus::Completed) {
                (false, true) => {
                    project.completed_tasks = (project.completed_tasks + 1).min(project.tasks_count)
                }
                (true, false) => project.completed_tasks = project.completed_tasks.saturating_sub(1),
                _ => {}
            }
        }

        info!(
            "event=task_status module=workspace status=ok task_id={} from={:?} to={:?}",
            id, previous, status
        );
        Ok(())
    }

    /// Appends a comment by `author` to task `task`.
    pub fn add_comment(
        &mut self,
        task: TaskId,
        author: UserId,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) -> WorkspaceResult<CommentId> {
        let task_index = self.require_task(task, "comment_add")?;
        self.require_user(author, "comment_add")?;

        let comment = Comment {
            id: Uuid::new_v4(),
            author,
            content: content.into(),
            created_at: now,
        };
        let comment_id = comment.id;
        Arc::make_mut(&mut self.tasks)[task_index]
            .comments
            .push(comment);
        Ok(comment_id)
    }

    /// Creates a project with a generated id and empty counters.
    ///
    /// Every team member must exist. Duplicate members are dropped, keeping
    /// first occurrence order.
    pub fn create_project(&mut self, input: NewProject) -> WorkspaceResult<ProjectId> {
        let mut team: Vec<UserId> = Vec::with_capacity(input.team.len());
        for member in input.team {
            self.require_user(member, "project_create")?;
            if !team.contains(&member) {
                team.push(member);
            }
        }

        let project = Project {
            id: Uuid::new_v4(),
            name: input.name.trim().to_string(),
            description: input.description.trim().to_string(),
            status: input.status,
            priority: input.priority,
            progress: 0,
            start_date: input.start_date,
            end_date: input.end_date,
            team,
            color: input.color,
            tasks_count: 0,
            completed_tasks: 0,
        };
        project.validate()?;
        let project_id = project.id;
        Arc::make_mut(&mut self.projects).push(project);

        info!(
            "event=project_create module=workspace status=ok project_id={}",
            project_id
        );
        Ok(project_id)
    }

    pub fn update_profile(&mut self, user: UserId, update: ProfileUpdate) -> WorkspaceResult<()> {
        let index = self.require_user(user, "profile_update")?;
        let target = &mut Arc::make_mut(&mut self.users)[index];
        target.name = update.name.trim().to_string();
        target.email = update.email.trim().to_string();
        target.avatar = update.avatar;
        Ok(())
    }

    pub fn set_presence(&mut self, user: UserId, presence: Presence) -> WorkspaceResult<()> {
        let index = self.require_user(user, "presence_update")?;
        Arc::make_mut(&mut self.users)[index].status = presence;
        Ok(())
    }

    fn require_user(&self, id: UserId, event: &str) -> WorkspaceResult<usize> {
        self.users
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(|| {
                warn!("event={event} module=workspace status=error error_code=user_not_found user_id={id}");
                WorkspaceError::UserNotFound(id)
            })
    }

    fn require_project(&self, id: ProjectId, event: &str) -> WorkspaceResult<usize> {
        self.projects
            .iter()
            .position(|project| project.id == id)
            .ok_or_else(|| {
                warn!("event={event} module=workspace status=error error_code=project_not_found project_id={id}");
                WorkspaceError::ProjectNotFound(id)
            })
    }

    fn require_task(&self, id: TaskId, event: &str) -> WorkspaceResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| {
                warn!("event={event} module=workspace status=error error_code=task_not_found task_id={id}");
                WorkspaceError::TaskNotFound(id)
            })
    }
}
