//! Session user model.
//!
//! # Responsibility
//! - Define the selectable accounts and their roles.
//!
//! # Invariants
//! - Users are immutable for the whole session.
//! - The built-in set has exactly two entries and the first one is the owner.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier of a selectable user.
pub type UserId = u32;

/// Id of the user that is active when a session starts.
pub const DEFAULT_USER_ID: UserId = 1;

/// Role that gates list mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full mutation rights over a list.
    Owner,
    /// Add-only rights plus the ability to leave a list.
    Guest,
}

impl Role {
    /// Stable string id used in logs and display labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Guest => "guest",
        }
    }
}

/// One selectable account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub role: Role,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role,
        }
    }

    pub fn is_owner(&self) -> bool {
        self.role == Role::Owner
    }
}

impl Display for User {
    /// Renders the account picker label, e.g. `Owner (owner)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.role.as_str())
    }
}

/// Returns the fixed set of selectable users.
pub fn builtin_users() -> Vec<User> {
    vec![
        User::new(DEFAULT_USER_ID, "Owner", Role::Owner),
        User::new(2, "Guest", Role::Guest),
    ]
}

/// Returns the user a session falls back to when no actor was handed over.
pub fn default_user() -> User {
    User::new(DEFAULT_USER_ID, "Owner", Role::Owner)
}

#[cfg(test)]
mod tests {
    use super::{builtin_users, default_user, Role};

    #[test]
    fn builtin_users_are_owner_then_guest() {
        let users = builtin_users();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].role, Role::Owner);
        assert_eq!(users[1].role, Role::Guest);
        assert_eq!(users[0], default_user());
    }

    #[test]
    fn display_matches_picker_label() {
        let users = builtin_users();
        assert_eq!(users[0].to_string(), "Owner (owner)");
        assert_eq!(users[1].to_string(), "Guest (guest)");
    }

    #[test]
    fn role_serializes_as_snake_case() {
        let json = serde_json::to_string(&Role::Guest).expect("role should serialize");
        assert_eq!(json, "\"guest\"");
    }
}
