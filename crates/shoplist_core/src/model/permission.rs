//! Role-based permission matrix for list actions.

use crate::model::user::{Role, User};

/// Every user-triggered action that goes through a role check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListAction {
    CreateList,
    ToggleArchive,
    DeleteList,
    OpenList,
    RenameList,
    AddItem,
    RemoveItem,
    ToggleResolved,
    AddMember,
    RemoveMember,
    LeaveList,
}

impl ListAction {
    /// Stable event name used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateList => "list_create",
            Self::ToggleArchive => "list_toggle_archive",
            Self::DeleteList => "list_delete",
            Self::OpenList => "list_open",
            Self::RenameList => "list_rename",
            Self::AddItem => "item_add",
            Self::RemoveItem => "item_remove",
            Self::ToggleResolved => "item_toggle_resolved",
            Self::AddMember => "member_add",
            Self::RemoveMember => "member_remove",
            Self::LeaveList => "list_leave",
        }
    }

    /// Actions reserved to list owners.
    pub fn is_owner_only(self) -> bool {
        matches!(
            self,
            Self::RenameList | Self::RemoveItem | Self::AddMember | Self::RemoveMember
        )
    }
}

impl Role {
    /// Returns whether this role may perform `action`.
    pub fn permits(self, action: ListAction) -> bool {
        match action {
            ListAction::LeaveList => self == Role::Guest,
            action if action.is_owner_only() => self == Role::Owner,
            _ => true,
        }
    }
}

impl User {
    /// Shorthand for `self.role.permits(action)`.
    pub fn may(&self, action: ListAction) -> bool {
        self.role.permits(action)
    }
}

#[cfg(test)]
mod tests {
    use super::ListAction;
    use crate::model::user::Role;

    const ALL_ACTIONS: [ListAction; 11] = [
        ListAction::CreateList,
        ListAction::ToggleArchive,
        ListAction::DeleteList,
        ListAction::OpenList,
        ListAction::RenameList,
        ListAction::AddItem,
        ListAction::RemoveItem,
        ListAction::ToggleResolved,
        ListAction::AddMember,
        ListAction::RemoveMember,
        ListAction::LeaveList,
    ];

    #[test]
    fn owner_may_do_everything_but_leave() {
        for action in ALL_ACTIONS {
            assert_eq!(
                Role::Owner.permits(action),
                action != ListAction::LeaveList,
                "owner permission mismatch for {}",
                action.as_str()
            );
        }
    }

    #[test]
    fn guest_is_limited_to_non_owner_actions() {
        for action in ALL_ACTIONS {
            assert_eq!(
                Role::Guest.permits(action),
                !action.is_owner_only(),
                "guest permission mismatch for {}",
                action.as_str()
            );
        }
    }

    #[test]
    fn guest_may_add_and_toggle_items() {
        assert!(Role::Guest.permits(ListAction::AddItem));
        assert!(Role::Guest.permits(ListAction::ToggleResolved));
        assert!(!Role::Guest.permits(ListAction::RemoveItem));
    }
}
