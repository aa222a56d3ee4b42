//! View state controller.
//!
//! # Responsibility
//! - Track the active screen, open modals and form drafts.
//! - Run the validate-then-commit flow for form submits.
//!
//! # Invariants
//! - Exactly one screen is active.
//! - A submit that fails validation or commit keeps its modal open, keeps
//!   its draft and leaves the workspace unchanged.
//! - A successful submit closes its modal and resets its draft.
//! - Closing a modal never opens another one.

use crate::config::DashboardConfig;
use crate::model::category::Priority;
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::model::task::{Task, TaskId, TaskStatus};
use crate::model::user::UserId;
use crate::service::workspace::{Workspace, WorkspaceError};
use crate::view::draft::{ProfileDraft, ProjectDraft, TaskDraft, ValidationErrors};
use crate::view::screen::{Modal, Screen};
use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// How form modals may overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalPolicy {
    /// Every modal is an independent flag; several forms may be open.
    #[default]
    Independent,
    /// At most one form modal (create task, create project, edit profile)
    /// may be open at a time.
    ExclusiveForms,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    FormAlreadyOpen { requested: Modal, open: Modal },
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FormAlreadyOpen { requested, open } => write!(
                f,
                "cannot open {requested:?} while {open:?} is open"
            ),
        }
    }
}

impl Error for ViewError {}

/// Submit failures. The modal stays open in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    ModalNotOpen(Modal),
    Invalid(ValidationErrors),
    Rejected(WorkspaceError),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ModalNotOpen(modal) => write!(f, "modal is not open: {modal:?}"),
            Self::Invalid(errors) => write!(f, "validation failed: {errors}"),
            Self::Rejected(err) => write!(f, "commit rejected: {err}"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ModalNotOpen(_) => None,
            Self::Invalid(errors) => Some(errors),
            Self::Rejected(err) => Some(err),
        }
    }
}

impl From<ValidationErrors> for SubmitError {
    fn from(value: ValidationErrors) -> Self {
        Self::Invalid(value)
    }
}

impl From<WorkspaceError> for SubmitError {
    fn from(value: WorkspaceError) -> Self {
        Self::Rejected(value)
    }
}

/// Task list filter for the tasks screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    /// Case-insensitive title substring; blank matches everything.
    pub query: String,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        let query = self.query.trim().to_lowercase();
        self.status.map_or(true, |status| task.status == status)
            && self.priority.map_or(true, |priority| task.priority == priority)
            && (query.is_empty() || task.title.to_lowercase().contains(&query))
    }

    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|task| self.matches(task)).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
}

impl ProjectFilter {
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects
            .iter()
            .filter(|project| self.status.map_or(true, |status| project.status == status))
            .collect()
    }
}

/// UI state for one session.
#[derive(Debug, Clone)]
pub struct ViewState {
    screen: Screen,
    modals: BTreeSet<Modal>,
    policy: ModalPolicy,
    current_user: UserId,
    task_draft: TaskDraft,
    project_draft: ProjectDraft,
    profile_draft: ProfileDraft,
    task_filter: TaskFilter,
    project_filter: ProjectFilter,
    selected_date: Option<NaiveDate>,
    focused_task: Option<TaskId>,
    focused_project: Option<ProjectId>,
}

impl ViewState {
    pub fn new(current_user: UserId, policy: ModalPolicy) -> Self {
        Self {
            screen: Screen::Dashboard,
            modals: BTreeSet::new(),
            policy,
            current_user,
            task_draft: TaskDraft::default(),
            project_draft: ProjectDraft::default(),
            profile_draft: ProfileDraft::default(),
            task_filter: TaskFilter::default(),
            project_filter: ProjectFilter::default(),
            selected_date: None,
            focused_task: None,
            focused_project: None,
        }
    }

    /// Session state using the modal policy from `config`.
    pub fn from_config(current_user: UserId, config: &DashboardConfig) -> Self {
        Self::new(current_user, config.modal_policy)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn navigate(&mut self, screen: Screen) {
        if self.screen != screen {
            debug!(
                "event=navigate module=view status=ok from={:?} to={:?}",
                self.screen, screen
            );
            self.screen = screen;
        }
    }

    /// User whose tasks and profile the session acts on.
    pub fn current_user(&self) -> UserId {
        self.current_user
    }

    pub fn policy(&self) -> ModalPolicy {
        self.policy
    }

    pub fn is_open(&self, modal: Modal) -> bool {
        self.modals.contains(&modal)
    }

    pub fn open_modals(&self) -> impl Iterator<Item = Modal> + '_ {
        self.modals.iter().copied()
    }

    /// Opens `modal`. Re-opening an open modal is a no-op.
    ///
    /// # Errors
    /// - `FormAlreadyOpen` under `ModalPolicy::ExclusiveForms` when another
    ///   form modal is open.
    pub fn open_modal(&mut self, modal: Modal) -> Result<(), ViewError> {
        if self.policy == ModalPolicy::ExclusiveForms && modal.is_form() {
            if let Some(open) = self
                .modals
                .iter()
                .copied()
                .find(|open| open.is_form() && *open != modal)
            {
                return Err(ViewError::FormAlreadyOpen {
                    requested: modal,
                    open,
                });
            }
        }
        self.modals.insert(modal);
        Ok(())
    }

    /// Opens the profile editor prefilled from the current user's record.
    ///
    /// An already open editor, or a draft left by cancel, is kept; only an
    /// empty draft is prefilled.
    pub fn open_profile_editor(&mut self, workspace: &Workspace) -> Result<(), ViewError> {
        if self.is_open(Modal::EditProfile) {
            return Ok(());
        }
        self.open_modal(Modal::EditProfile)?;
        if self.profile_draft == ProfileDraft::default() {
            if let Some(user) = workspace.user(self.current_user) {
                self.profile_draft = ProfileDraft::from_user(user);
            }
        }
        Ok(())
    }

    pub fn open_task_detail(&mut self, task: TaskId) -> Result<(), ViewError> {
        self.open_modal(Modal::TaskDetail)?;
        self.focused_task = Some(task);
        Ok(())
    }

    pub fn open_project_detail(&mut self, project: ProjectId) -> Result<(), ViewError> {
        self.open_modal(Modal::ProjectDetail)?;
        self.focused_project = Some(project);
        Ok(())
    }

    /// Closes `modal` on explicit cancel. The draft is kept.
    ///
    /// Returns whether the modal was open.
    pub fn cancel(&mut self, modal: Modal) -> bool {
        let was_open = self.modals.remove(&modal);
        match modal {
            Modal::TaskDetail => self.focused_task = None,
            Modal::ProjectDetail => self.focused_project = None,
            _ => {}
        }
        was_open
    }

    /// Closes `modal` on a backdrop click when the modal allows it.
    pub fn dismiss_backdrop(&mut self, modal: Modal) -> bool {
        if !modal.dismissible_by_backdrop() {
            return false;
        }
        self.cancel(modal)
    }

    pub fn focused_task(&self) -> Option<TaskId> {
        self.focused_task
    }

    pub fn focused_project(&self) -> Option<ProjectId> {
        self.focused_project
    }

    pub fn task_draft(&self) -> &TaskDraft {
        &self.task_draft
    }

    pub fn task_draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.task_draft
    }

    pub fn project_draft(&self) -> &ProjectDraft {
        &self.project_draft
    }

    pub fn project_draft_mut(&mut self) -> &mut ProjectDraft {
        &mut self.project_draft
    }

    pub fn profile_draft(&self) -> &ProfileDraft {
        &self.profile_draft
    }

    pub fn profile_draft_mut(&mut self) -> &mut ProfileDraft {
        &mut self.profile_draft
    }

    pub fn task_filter(&self) -> &TaskFilter {
        &self.task_filter
    }

    pub fn task_filter_mut(&mut self) -> &mut TaskFilter {
        &mut self.task_filter
    }

    pub fn project_filter(&self) -> &ProjectFilter {
        &self.project_filter
    }

    pub fn project_filter_mut(&mut self) -> &mut ProjectFilter {
        &mut self.project_filter
    }

    /// Calendar day picked on the calendar screen.
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
    }

    /// Validates and commits the task draft.
    pub fn submit_task(
        &mut self,
        workspace: &mut Workspace,
        now: DateTime<Utc>,
    ) -> Result<TaskId, SubmitError> {
        self.require_open(Modal::CreateTask)?;
        let input = self
            .task_draft
            .validate()
            .map_err(|errors| log_invalid(Modal::CreateTask, errors))?;
        let task_id = workspace.create_task(input, now)?;
        self.finish_submit(Modal::CreateTask);
        self.task_draft = TaskDraft::default();
        Ok(task_id)
    }

    /// Validates and commits the project draft.
    pub fn submit_project(&mut self, workspace: &mut Workspace) -> Result<ProjectId, SubmitError> {
        self.require_open(Modal::CreateProject)?;
        let input = self
            .project_draft
            .validate()
            .map_err(|errors| log_invalid(Modal::CreateProject, errors))?;
        let project_id = workspace.create_project(input)?;
        self.finish_submit(Modal::CreateProject);
        self.project_draft = ProjectDraft::default();
        Ok(project_id)
    }

    /// Validates the profile draft and applies it to the current user.
    pub fn submit_profile(&mut self, workspace: &mut Workspace) -> Result<(), SubmitError> {
        self.require_open(Modal::EditProfile)?;
        let update = self
            .profile_draft
            .validate()
            .map_err(|errors| log_invalid(Modal::EditProfile, errors))?;
        workspace.update_profile(self.current_user, update)?;
        self.finish_submit(Modal::EditProfile);
        self.profile_draft = ProfileDraft::default();
        Ok(())
    }

    fn require_open(&self, modal: Modal) -> Result<(), SubmitError> {
        if self.is_open(modal) {
            Ok(())
        } else {
            Err(SubmitError::ModalNotOpen(modal))
        }
    }

    fn finish_submit(&mut self, modal: Modal) {
        self.modals.remove(&modal);
        info!("event=form_submit module=view status=ok modal={modal:?}");
    }
}

fn log_invalid(modal: Modal, errors: ValidationErrors) -> ValidationErrors {
    warn!(
        "event=form_submit module=view status=error error_code=validation_failed modal={:?} fields={}",
        modal,
        errors.len()
    );
    errors
}
