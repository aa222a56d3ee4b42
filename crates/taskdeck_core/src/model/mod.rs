//! Entity model for the dashboard core.
//!
//! # Responsibility
//! - Define users, projects, tasks, notifications and their child records.
//! - Give every enumerated field a stable wire string.
//!
//! # Invariants
//! - Entities reference each other by id only; nothing owns a `User`.
//! - Tasks belong to exactly one project via `Task::project`.

pub mod category;
pub mod notification;
pub mod project;
pub mod task;
pub mod user;
