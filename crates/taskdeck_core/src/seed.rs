//! Built-in mock dataset loaded at startup.
//!
//! Ids are fixed so callers and tests can refer to seed records directly:
//! `user_id(1)` is the default current user.

use crate::model::category::Priority;
use crate::model::notification::{Notification, NotificationId, NotificationKind};
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::model::task::{Attachment, Comment, Task, TaskId, TaskStatus};
use crate::model::user::{Presence, Role, TeamMember, User, UserId};
use crate::service::workspace::Workspace;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::collections::BTreeSet;
use uuid::Uuid;

const USER_NAMESPACE: u128 = 0x1;
const PROJECT_NAMESPACE: u128 = 0x2;
const TASK_NAMESPACE: u128 = 0x3;
const NOTIFICATION_NAMESPACE: u128 = 0x4;
const CHILD_NAMESPACE: u128 = 0x5;

fn seed_uuid(namespace: u128, n: u8) -> Uuid {
    Uuid::from_u128((namespace << 64) | u128::from(n))
}

pub fn user_id(n: u8) -> UserId {
    seed_uuid(USER_NAMESPACE, n)
}

pub fn project_id(n: u8) -> ProjectId {
    seed_uuid(PROJECT_NAMESPACE, n)
}

pub fn task_id(n: u8) -> TaskId {
    seed_uuid(TASK_NAMESPACE, n)
}

pub fn notification_id(n: u8) -> NotificationId {
    seed_uuid(NOTIFICATION_NAMESPACE, n)
}

/// Seed due dates sit at noon UTC so the calendar day is the same in every
/// timezone between UTC-11 and UTC+11.
fn at_noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid seed timestamp")
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid seed timestamp")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn users() -> Vec<User> {
    let mut users = vec![
        User::new(user_id(1), "John Doe", "john@company.com", Role::Admin),
        User::new(user_id(2), "Jane Smith", "jane@company.com", Role::Manager),
        User::new(user_id(3), "Mike Johnson", "mike@company.com", Role::Member),
        User::new(user_id(4), "Sarah Wilson", "sarah@company.com", Role::Member),
    ];
    let presence = [
        Presence::Online,
        Presence::Away,
        Presence::Online,
        Presence::Busy,
    ];
    for (user, status) in users.iter_mut().zip(presence) {
        user.status = status;
        user.avatar = Some(format!("/avatars/{}.png", user.initials().to_lowercase()));
    }
    users
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: project_id(1),
            name: "E-commerce Platform".to_string(),
            description: "Modern e-commerce platform with advanced features".to_string(),
            status: ProjectStatus::Active,
            priority: Priority::High,
            progress: 75,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 3, 31),
            team: vec![user_id(1), user_id(2), user_id(3)],
            color: "#3B82F6".to_string(),
            tasks_count: 24,
            completed_tasks: 18,
        },
        Project {
            id: project_id(2),
            name: "Mobile App Redesign".to_string(),
            description: "Complete redesign of the mobile application".to_string(),
            status: ProjectStatus::Active,
            priority: Priority::Medium,
            progress: 45,
            start_date: date(2024, 1, 15),
            end_date: date(2024, 4, 15),
            team: vec![user_id(2), user_id(4)],
            color: "#10B981".to_string(),
            tasks_count: 18,
            completed_tasks: 8,
        },
        Project {
            id: project_id(3),
            name: "Marketing Campaign".to_string(),
            description: "Q1 marketing campaign for product launch".to_string(),
            status: ProjectStatus::Completed,
            priority: Priority::Low,
            progress: 100,
            start_date: date(2023, 12, 1),
            end_date: date(2024, 1, 31),
            team: vec![user_id(1), user_id(4)],
            color: "#F59E0B".to_string(),
            tasks_count: 12,
            completed_tasks: 12,
        },
    ]
}

pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: task_id(1),
            title: "Design new checkout flow".to_string(),
            description: "Create wireframes and mockups for the new checkout process".to_string(),
            status: TaskStatus::InProgress,
            priority: Priority::High,
            assignee: user_id(2),
            project: project_id(1),
            due_date: at_noon(2024, 2, 15),
            created_at: at(2024, 2, 1, 9, 0),
            tags: tags(&["design", "ux"]),
            attachments: vec![Attachment {
                id: seed_uuid(CHILD_NAMESPACE, 1),
                name: "checkout-wireframes.fig".to_string(),
                size_bytes: 2_457_600,
                mime_type: "application/octet-stream".to_string(),
                url: "/files/checkout-wireframes.fig".to_string(),
            }],
            comments: vec![Comment {
                id: seed_uuid(CHILD_NAMESPACE, 2),
                author: user_id(1),
                content: "Please keep the guest checkout path.".to_string(),
                created_at: at(2024, 2, 3, 14, 30),
            }],
        },
        Task {
            id: task_id(2),
            title: "Implement payment gateway".to_string(),
            description: "Integrate the payment provider for card payments".to_string(),
            status: TaskStatus::Todo,
            priority: Priority::Urgent,
            assignee: user_id(1),
            project: project_id(1),
            due_date: at_noon(2024, 2, 20),
            created_at: at(2024, 2, 2, 10, 0),
            tags: tags(&["backend", "payments"]),
            attachments: Vec::new(),
            comments: Vec::new(),
        },
        Task {
            id: task_id(3),
            title: "User testing sessions".to_string(),
            description: "Run usability sessions for the redesigned app".to_string(),
            status: TaskStatus::Completed,
            priority: Priority::Medium,
            assignee: user_id(4),
            project: project_id(2),
            due_date: at_noon(2024, 2, 10),
            created_at: at(2024, 1, 28, 11, 0),
            tags: tags(&["research", "testing"]),
            attachments: Vec::new(),
            comments: Vec::new(),
        },
        Task {
            id: task_id(4),
            title: "Update API documentation".to_string(),
            description: "Document the new order and payment endpoints".to_string(),
            status: TaskStatus::Review,
            priority: Priority::Medium,
            assignee: user_id(3),
            project: project_id(1),
            due_date: at_noon(2024, 2, 25),
            created_at: at(2024, 2, 5, 16, 0),
            tags: tags(&["documentation"]),
            attachments: Vec::new(),
            comments: Vec::new(),
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: notification_id(1),
            kind: NotificationKind::TaskAssigned,
            title: "New task assigned".to_string(),
            message: "You have been assigned to \"Implement payment gateway\"".to_string(),
            timestamp: at(2024, 2, 10, 10, 30),
            read: false,
            action_url: Some(format!("/tasks/{}", task_id(2))),
        },
        Notification {
            id: notification_id(2),
            kind: NotificationKind::TaskCompleted,
            title: "Task completed".to_string(),
            message: "Sarah Wilson completed \"User testing sessions\"".to_string(),
            timestamp: at(2024, 2, 10, 9, 15),
            read: false,
            action_url: Some(format!("/tasks/{}", task_id(3))),
        },
        Notification {
            id: notification_id(3),
            kind: NotificationKind::ProjectUpdated,
            title: "Project updated".to_string(),
            message: "E-commerce Platform progress updated to 75%".to_string(),
            timestamp: at(2024, 2, 9, 16, 45),
            read: true,
            action_url: Some(format!("/projects/{}", project_id(1))),
        },
        Notification {
            id: notification_id(4),
            kind: NotificationKind::DeadlineApproaching,
            title: "Deadline approaching".to_string(),
            message: "\"Design new checkout flow\" is due in 5 days".to_string(),
            timestamp: at(2024, 2, 10, 8, 0),
            read: true,
            action_url: None,
        },
    ]
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            user: user_id(1),
            department: "Engineering".to_string(),
            tasks_completed: 24,
            productivity: 92,
            hours_logged: 168,
        },
        TeamMember {
            user: user_id(2),
            department: "Design".to_string(),
            tasks_completed: 18,
            productivity: 88,
            hours_logged: 152,
        },
        TeamMember {
            user: user_id(3),
            department: "Engineering".to_string(),
            tasks_completed: 15,
            productivity: 78,
            hours_logged: 160,
        },
        TeamMember {
            user: user_id(4),
            department: "Marketing".to_string(),
            tasks_completed: 21,
            productivity: 85,
            hours_logged: 144,
        },
    ]
}

/// Workspace populated with the full seed dataset.
pub fn workspace() -> Workspace {
    Workspace::new(users(), projects(), tasks(), team_members())
}
