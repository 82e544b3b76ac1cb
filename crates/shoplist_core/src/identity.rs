//! Identity store: the selectable users and the one currently acting.
//!
//! # Invariants
//! - The current user is always one of `users()`.
//! - A restart resets the current user to the first built-in user.

use crate::model::outcome::{Outcome, RejectReason};
use crate::model::user::{builtin_users, User, UserId};
use log::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityStore {
    users: Vec<User>,
    current: usize,
}

impl IdentityStore {
    /// Creates the store with the built-in users; the first one is active.
    pub fn new() -> Self {
        Self {
            users: builtin_users(),
            current: 0,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn current_user(&self) -> &User {
        &self.users[self.current]
    }

    pub fn find_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Switches the acting user. Unknown ids leave the store unchanged.
    pub fn set_current_user(&mut self, id: UserId) -> Outcome {
        let Some(index) = self.users.iter().position(|user| user.id == id) else {
            info!("event=user_switch module=identity status=rejected reason=unknown_user user_id={id}");
            return Outcome::Rejected(RejectReason::UnknownUser(id));
        };

        self.current = index;
        info!(
            "event=user_switch module=identity status=ok user_id={} role={}",
            id,
            self.users[index].role.as_str()
        );
        Outcome::Applied(())
    }
}

impl Default for IdentityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::IdentityStore;
    use crate::model::outcome::{Outcome, RejectReason};
    use crate::model::user::Role;

    #[test]
    fn starts_with_owner() {
        let store = IdentityStore::new();
        assert_eq!(store.current_user().id, 1);
        assert_eq!(store.current_user().role, Role::Owner);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut store = IdentityStore::new();
        store.set_current_user(2);
        assert_eq!(
            store.set_current_user(42),
            Outcome::Rejected(RejectReason::UnknownUser(42))
        );
        assert_eq!(store.current_user().id, 2);
    }
}
