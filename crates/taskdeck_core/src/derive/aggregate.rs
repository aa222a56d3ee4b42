//! Rates, averages and summary counters.

use crate::model::notification::Notification;
use crate::model::project::Project;
use crate::model::task::{Task, TaskStatus};
use crate::model::user::TeamMember;
use chrono::{DateTime, TimeZone};

/// Fraction of completed tasks in `[0, 1]`; `0.0` for an empty slice.
pub fn completion_rate(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    let completed = tasks.iter().filter(|task| task.is_completed()).count();
    completed as f64 / tasks.len() as f64
}

/// Arithmetic mean; `0.0` when `values` is empty.
pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_u32), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

/// Numeric team-member field used by report averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberMetric {
    TasksCompleted,
    Productivity,
    HoursLogged,
}

impl MemberMetric {
    pub fn read(self, member: &TeamMember) -> f64 {
        match self {
            Self::TasksCompleted => f64::from(member.tasks_completed),
            Self::Productivity => f64::from(member.productivity),
            Self::HoursLogged => f64::from(member.hours_logged),
        }
    }
}

/// Mean of `metric` over members of `department`; `0.0` for none.
///
/// Department names compare case-insensitively after trimming.
pub fn department_average(members: &[TeamMember], department: &str, metric: MemberMetric) -> f64 {
    let wanted = department.trim();
    mean(
        members
            .iter()
            .filter(|member| member.department.trim().eq_ignore_ascii_case(wanted))
            .map(|member| metric.read(member)),
    )
}

/// Completion percentage from the project's task counters, rounded half up.
///
/// Returns 0 when the project has no tasks.
pub fn derived_progress(project: &Project) -> u8 {
    if project.tasks_count == 0 {
        return 0;
    }
    let total = u64::from(project.tasks_count);
    let completed = u64::from(project.completed_tasks.min(project.tasks_count));
    ((completed * 100 + total / 2) / total) as u8
}

/// Stored progress minus derived progress; non-zero means the two disagree.
pub fn progress_drift(project: &Project) -> i16 {
    i16::from(project.progress) - i16::from(derived_progress(project))
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|item| !item.read).count()
}

/// Dashboard stat-card numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub overdue: usize,
    pub completion_rate: f64,
}

pub fn task_stats<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> TaskStats {
    TaskStats {
        total: tasks.len(),
        completed: tasks.iter().filter(|task| task.is_completed()).count(),
        in_progress: tasks
            .iter()
            .filter(|task| task.status == TaskStatus::InProgress)
            .count(),
        overdue: super::overdue_tasks(tasks, now).len(),
        completion_rate: completion_rate(tasks),
    }
}

#[cfg(test)]
mod tests {
    use super::{department_average, mean, MemberMetric};
    use crate::model::user::TeamMember;
    use uuid::Uuid;

    fn member(department: &str, productivity: u8) -> TeamMember {
        TeamMember {
            user: Uuid::new_v4(),
            department: department.to_string(),
            tasks_completed: 10,
            productivity,
            hours_logged: 40,
        }
    }

    #[test]
    fn mean_of_nothing_is_zero() {
        assert_eq!(mean(std::iter::empty()), 0.0);
        assert_eq!(mean([1.0, 2.0, 6.0]), 3.0);
    }

    #[test]
    fn department_average_filters_and_guards_empty() {
        let members = vec![
            member("Engineering", 90),
            member("engineering ", 80),
            member("Design", 70),
        ];
        assert_eq!(
            department_average(&members, "Engineering", MemberMetric::Productivity),
            85.0
        );
        let missing = department_average(&members, "Sales", MemberMetric::HoursLogged);
        assert_eq!(missing, 0.0);
        assert!(!missing.is_nan());
    }
}
