//! Result of a user-triggered mutation.
//!
//! Invalid input and permission violations never surface as errors to the
//! caller; they leave state untouched. `Outcome` keeps the two cases apart so
//! callers and tests can tell "denied by role" from "nothing to do".

use crate::model::shopping_list::{ItemId, ListId};
use crate::model::user::UserId;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T = ()> {
    /// State changed.
    Applied(T),
    /// Acting user's role does not permit the action. State unchanged.
    Denied,
    /// Input was invalid or referenced nothing. State unchanged.
    Rejected(RejectReason),
}

impl<T> Outcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied)
    }

    /// Returns the applied value, dropping denial/rejection details.
    pub fn applied(self) -> Option<T> {
        match self {
            Self::Applied(value) => Some(value),
            Self::Denied | Self::Rejected(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Applied(value) => Outcome::Applied(f(value)),
            Self::Denied => Outcome::Denied,
            Self::Rejected(reason) => Outcome::Rejected(reason),
        }
    }
}

/// Why a mutation was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Name is empty (or blank, where trimming applies).
    EmptyName,
    UnknownList(ListId),
    UnknownItem(ItemId),
    UnknownMember(String),
    UnknownUser(UserId),
    /// Route does not match the handed-over list.
    RouteMismatch { route_id: ListId, list_id: ListId },
}

impl RejectReason {
    /// Stable reason code for log lines. Never carries user content.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::UnknownList(_) => "unknown_list",
            Self::UnknownItem(_) => "unknown_item",
            Self::UnknownMember(_) => "unknown_member",
            Self::UnknownUser(_) => "unknown_user",
            Self::RouteMismatch { .. } => "route_mismatch",
        }
    }
}

impl Display for RejectReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::UnknownList(id) => write!(f, "shopping list not found: {id}"),
            Self::UnknownItem(id) => write!(f, "item not found: {id}"),
            Self::UnknownMember(name) => write!(f, "member not found: {name}"),
            Self::UnknownUser(id) => write!(f, "user not found: {id}"),
            Self::RouteMismatch { route_id, list_id } => write!(
                f,
                "route targets list {route_id} but handoff carries list {list_id}"
            ),
        }
    }
}

impl<T> Display for Outcome<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Applied(_) => write!(f, "applied"),
            Self::Denied => write!(f, "denied"),
            Self::Rejected(reason) => write!(f, "rejected: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Outcome, RejectReason};

    #[test]
    fn map_preserves_non_applied_variants() {
        let denied: Outcome<u32> = Outcome::Denied;
        assert_eq!(denied.map(|id| id + 1), Outcome::Denied);

        let rejected: Outcome<u32> = Outcome::Rejected(RejectReason::EmptyName);
        assert_eq!(
            rejected.map(|id| id + 1),
            Outcome::Rejected(RejectReason::EmptyName)
        );

        assert_eq!(Outcome::Applied(1).map(|id| id + 1), Outcome::Applied(2));
    }

    #[test]
    fn reject_codes_do_not_leak_names() {
        let reason = RejectReason::UnknownMember("Alice".to_string());
        assert_eq!(reason.code(), "unknown_member");
        assert!(reason.to_string().contains("Alice"));
    }

    #[test]
    fn display_is_short() {
        assert_eq!(Outcome::Applied(()).to_string(), "applied");
        assert_eq!(Outcome::<()>::Denied.to_string(), "denied");
        assert_eq!(
            Outcome::<()>::Rejected(RejectReason::UnknownList(4)).to_string(),
            "rejected: shopping list not found: 4"
        );
    }
}
