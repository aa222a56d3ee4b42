//! User and team-member records.
//!
//! # Invariants
//! - `id` is stable; only `status` changes through presence updates.
//! - Users are shared by id across projects, tasks and comments.

use crate::model::category::{parse_category, Category, CategoryParseError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type UserId = Uuid;

/// Access level of one user.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    #[default]
    Member,
    Guest,
}

impl Category for Role {
    const ALL: &'static [Self] = &[Self::Admin, Self::Manager, Self::Member, Self::Guest];

    fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Member => "member",
            Self::Guest => "guest",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Member => "Member",
            Self::Guest => "Guest",
        }
    }
}

impl Role {
    pub fn parse(value: &str) -> Result<Self, CategoryParseError> {
        parse_category("role", value)
    }
}

/// Presence indicator shown next to avatars.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Online,
    #[default]
    Offline,
    Away,
    Busy,
}

impl Category for Presence {
    const ALL: &'static [Self] = &[Self::Online, Self::Offline, Self::Away, Self::Busy];

    fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Away => "away",
            Self::Busy => "busy",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
            Self::Away => "Away",
            Self::Busy => "Busy",
        }
    }
}

impl Presence {
    pub fn parse(value: &str) -> Result<Self, CategoryParseError> {
        parse_category("presence", value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Avatar image reference; `None` renders initials.
    pub avatar: Option<String>,
    pub role: Role,
    pub status: Presence,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            avatar: None,
            role,
            status: Presence::Offline,
        }
    }

    /// Up to two uppercase initials derived from the display name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// Per-user statistics shown on the team and reports screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub user: UserId,
    pub department: String,
    pub tasks_completed: u32,
    /// Percentage in `0..=100`.
    pub productivity: u8,
    pub hours_logged: u32,
}

#[cfg(test)]
mod tests {
    use super::{Presence, Role, User};
    use uuid::Uuid;

    #[test]
    fn initials_take_first_letters_of_first_two_words() {
        let user = User::new(Uuid::new_v4(), "jane van smith", "jane@example.com", Role::Member);
        assert_eq!(user.initials(), "JV");
    }

    #[test]
    fn new_user_starts_offline() {
        let user = User::new(Uuid::new_v4(), "Solo", "solo@example.com", Role::Guest);
        assert_eq!(user.status, Presence::Offline);
        assert_eq!(user.initials(), "S");
    }
}
