//! View state: active screen, modals, drafts and list filters.
//!
//! # Responsibility
//! - Mediate user actions into workspace commits.
//! - Keep the current user explicit instead of a hard-coded id.
//!
//! # Invariants
//! - Validation runs before any commit; a failed submit mutates nothing.

pub mod controller;
pub mod draft;
pub mod options;
pub mod screen;

pub use controller::{ModalPolicy, ProjectFilter, SubmitError, TaskFilter, ViewError, ViewState};
pub use draft::{FieldError, ProfileDraft, ProjectDraft, TaskDraft, ValidationErrors};
pub use options::{category_options, find_option, project_options, user_options, SelectOption};
pub use screen::{Modal, Screen};
