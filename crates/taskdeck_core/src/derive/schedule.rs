//! Calendar-day filters over tasks.

use crate::model::project::ProjectId;
use crate::model::task::Task;
use crate::model::user::UserId;
use chrono::{DateTime, Duration, NaiveDate, TimeZone};

/// Tasks due on `day`, where due instants are read in `tz`.
pub fn tasks_on_day<'a, Tz: TimeZone>(tasks: &'a [Task], day: NaiveDate, tz: &Tz) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| task.due_day(tz) == day)
        .collect()
}

/// Tasks due on the calendar day of `date`, ignoring time of day.
pub fn tasks_on_date<'a, Tz: TimeZone>(tasks: &'a [Task], date: &DateTime<Tz>) -> Vec<&'a Task> {
    tasks_on_day(tasks, date.date_naive(), &date.timezone())
}

/// Open tasks due between the days of `start` and `end`, both inclusive.
///
/// `end` is read in the timezone of `start`. A reversed window is empty.
pub fn tasks_in_window<'a, Tz: TimeZone>(
    tasks: &'a [Task],
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
) -> Vec<&'a Task> {
    let tz = start.timezone();
    let first = start.date_naive();
    let last = end.with_timezone(&tz).date_naive();
    tasks
        .iter()
        .filter(|task| !task.is_completed())
        .filter(|task| {
            let due = task.due_day(&tz);
            first <= due && due <= last
        })
        .collect()
}

/// Open tasks due from today through `days` days ahead.
///
/// A window reaching past the representable calendar is open-ended.
pub fn upcoming_deadlines<'a, Tz: TimeZone>(
    tasks: &'a [Task],
    now: &DateTime<Tz>,
    days: u32,
) -> Vec<&'a Task> {
    match now.clone().checked_add_signed(Duration::days(i64::from(days))) {
        Some(end) => tasks_in_window(tasks, now, &end),
        None => {
            let tz = now.timezone();
            let today = now.date_naive();
            tasks
                .iter()
                .filter(|task| !task.is_completed() && task.due_day(&tz) >= today)
                .collect()
        }
    }
}

/// Open tasks whose due day is strictly before the day of `now`.
///
/// A task due today is never overdue, so this never overlaps with
/// `tasks_on_date(tasks, now)` restricted to open tasks.
pub fn overdue_tasks<'a, Tz: TimeZone>(tasks: &'a [Task], now: &DateTime<Tz>) -> Vec<&'a Task> {
    let tz = now.timezone();
    let today = now.date_naive();
    tasks
        .iter()
        .filter(|task| !task.is_completed() && task.due_day(&tz) < today)
        .collect()
}

/// Tasks assigned to `user`, typically the current user.
pub fn tasks_for_assignee(tasks: &[Task], user: UserId) -> Vec<&Task> {
    tasks.iter().filter(|task| task.assignee == user).collect()
}

pub fn tasks_for_project(tasks: &[Task], project: ProjectId) -> Vec<&Task> {
    tasks.iter().filter(|task| task.project == project).collect()
}

#[cfg(test)]
mod tests {
    use super::{overdue_tasks, tasks_in_window, tasks_on_date, tasks_on_day, upcoming_deadlines};
    use crate::model::category::Priority;
    use crate::model::task::{Task, TaskStatus};
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
    use std::collections::BTreeSet;
    use uuid::Uuid;

    fn task_due(rfc3339: &str, status: TaskStatus) -> Task {
        let due = chrono::DateTime::parse_from_rfc3339(rfc3339)
            .expect("valid timestamp")
            .with_timezone(&Utc);
        Task {
            id: Uuid::new_v4(),
            title: rfc3339.to_string(),
            description: String::new(),
            status,
            priority: Priority::Medium,
            assignee: Uuid::nil(),
            project: Uuid::nil(),
            due_date: due,
            created_at: due,
            tags: BTreeSet::new(),
            attachments: Vec::new(),
            comments: Vec::new(),
        }
    }

    #[test]
    fn same_day_match_ignores_time_of_day() {
        let tasks = vec![
            task_due("2024-03-01T00:00:00Z", TaskStatus::Todo),
            task_due("2024-03-01T23:59:59Z", TaskStatus::Todo),
            task_due("2024-03-02T00:00:00Z", TaskStatus::Todo),
        ];
        let noon = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let matched = tasks_on_date(&tasks, &noon);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].id, tasks[0].id);
        assert_eq!(matched[1].id, tasks[1].id);
    }

    #[test]
    fn day_boundary_follows_reference_timezone() {
        // 23:30 UTC on Mar 1 is already Mar 2 at UTC+02:00.
        let tasks = vec![task_due("2024-03-01T23:30:00Z", TaskStatus::Todo)];
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let mar_2 = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        assert_eq!(tasks_on_day(&tasks, mar_2, &plus_two).len(), 1);
        assert!(tasks_on_day(&tasks, mar_2, &Utc).is_empty());
    }

    #[test]
    fn window_is_inclusive_and_skips_completed() {
        let tasks = vec![
            task_due("2024-03-01T08:00:00Z", TaskStatus::Todo),
            task_due("2024-03-03T22:00:00Z", TaskStatus::Review),
            task_due("2024-03-02T10:00:00Z", TaskStatus::Completed),
            task_due("2024-03-04T00:00:00Z", TaskStatus::Todo),
        ];
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 3, 1, 0, 0).unwrap();
        let window = tasks_in_window(&tasks, &start, &end);
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].id, tasks[0].id);
        assert_eq!(window[1].id, tasks[1].id);

        assert!(tasks_in_window(&tasks, &end, &start).is_empty());
    }

    #[test]
    fn task_due_earlier_today_is_not_overdue() {
        let tasks = vec![task_due("2024-03-01T06:00:00Z", TaskStatus::InProgress)];
        let evening = Utc.with_ymd_and_hms(2024, 3, 1, 20, 0, 0).unwrap();
        assert!(overdue_tasks(&tasks, &evening).is_empty());
        assert_eq!(tasks_on_date(&tasks, &evening).len(), 1);

        let next_day = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 1).unwrap();
        assert_eq!(overdue_tasks(&tasks, &next_day).len(), 1);
    }

    #[test]
    fn upcoming_window_past_calendar_range_is_open_ended() {
        let tasks = vec![
            task_due("2024-02-09T12:00:00Z", TaskStatus::Todo),
            task_due("2024-02-10T12:00:00Z", TaskStatus::Todo),
            task_due("2031-06-01T12:00:00Z", TaskStatus::Review),
            task_due("2024-03-01T12:00:00Z", TaskStatus::Completed),
        ];
        let now = Utc.with_ymd_and_hms(2024, 2, 10, 9, 0, 0).unwrap();

        let upcoming = upcoming_deadlines(&tasks, &now, u32::MAX);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].id, tasks[1].id);
        assert_eq!(upcoming[1].id, tasks[2].id);

        let week = upcoming_deadlines(&tasks, &now, 7);
        assert_eq!(week.len(), 1);
        assert_eq!(week[0].id, tasks[1].id);
    }
}
