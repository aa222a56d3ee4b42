use chrono::NaiveDate;
use taskdeck_core::{seed, Notification, NotificationKind, Project, ProjectStatus, Task};

#[test]
fn task_serialization_uses_kebab_case_status() {
    let task = seed::tasks().remove(0);
    let json = serde_json::to_value(&task).unwrap();

    assert_eq!(json["status"], "in-progress");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["title"], "Design new checkout flow");
    assert_eq!(json["tags"], serde_json::json!(["design", "ux"]));

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn notification_kind_is_serialized_as_type() {
    let notification = seed::notifications().remove(0);
    let json = serde_json::to_value(&notification).unwrap();
    assert_eq!(json["type"], "task_assigned");
    assert_eq!(json["read"], false);

    let decoded: Notification = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.kind, NotificationKind::TaskAssigned);
}

#[test]
fn project_status_uses_on_hold_wire_name() {
    let mut project = seed::projects().remove(1);
    project.status = ProjectStatus::OnHold;
    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["status"], "on-hold");
    assert_eq!(json["start_date"], "2024-01-15");
}

#[test]
fn deserialize_rejects_completed_above_total() {
    let mut json = serde_json::to_value(seed::projects().remove(0)).unwrap();
    json["completed_tasks"] = serde_json::json!(30);

    let err = serde_json::from_value::<Project>(json).unwrap_err();
    assert!(
        err.to_string()
            .contains("completed_tasks (30) must be <= tasks_count (24)"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_reversed_date_range() {
    let mut json = serde_json::to_value(seed::projects().remove(0)).unwrap();
    json["end_date"] = serde_json::json!("2023-12-31");

    let err = serde_json::from_value::<Project>(json).unwrap_err();
    assert!(err.to_string().contains("end_date (2023-12-31)"));
}

#[test]
fn seed_projects_satisfy_invariants() {
    for project in seed::projects() {
        project.validate().unwrap();
        assert!(project.start_date <= project.end_date);
    }
    let marketing = &seed::projects()[2];
    assert_eq!(marketing.end_date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
}
