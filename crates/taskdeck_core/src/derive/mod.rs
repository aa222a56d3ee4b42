//! Pure derivations from entity collections to display-ready views.
//!
//! # Responsibility
//! - Filter tasks by calendar day, window and overdue state.
//! - Partition tasks and projects by category.
//! - Aggregate rates, averages and chart geometry.
//!
//! # Invariants
//! - Every function is total and side-effect free.
//! - Results keep the relative order of the input; nothing is sorted here.
//! - Empty aggregates yield `0.0`, never NaN.
//! - Day comparisons use the calendar date in the timezone of the reference
//!   instant passed by the caller.

pub mod aggregate;
pub mod chart;
pub mod partition;
pub mod schedule;

pub use aggregate::{
    completion_rate, department_average, derived_progress, mean, progress_drift, task_stats,
    unread_count, MemberMetric, TaskStats,
};
pub use chart::{pie_slices, PieSlice};
pub use partition::{
    partition_by_priority, partition_by_status, projects_by_status, Partition,
};
pub use schedule::{
    overdue_tasks, tasks_for_assignee, tasks_for_project, tasks_in_window, tasks_on_date,
    tasks_on_day, upcoming_deadlines,
};
