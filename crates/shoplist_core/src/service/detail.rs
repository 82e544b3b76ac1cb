//! Detail session: the working copy of one opened shopping list.
//!
//! # Responsibility
//! - Rename the list, manage its items and members under role checks.
//! - Expose the active (unresolved) / archived (resolved) item partition.
//!
//! # Invariants
//! - The session owns its copy of the list; nothing is written back to the
//!   collection it was opened from.
//! - New item ids never collide with an id present at creation time under
//!   `IdAllocation::Monotonic`; under `CountPlusOne` they are `len + 1`.
//! - Leaving a list never mutates `members`.

use crate::model::filter::VisibilityFilter;
use crate::model::ids::{IdAllocation, IdAllocator};
use crate::model::outcome::{Outcome, RejectReason};
use crate::model::permission::ListAction;
use crate::model::shopping_list::{Item, ItemId, ListId, ShoppingList};
use crate::model::user::User;
use crate::nav::{Handoff, Route};
use crate::service::{authorize, log_rejected};
use log::info;

const MODULE: &str = "detail";

/// Name of the list shown when the detail view is entered without a handoff.
pub const DEFAULT_LIST_NAME: &str = "Default Shopping List";

/// Editable state of one opened list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSession {
    list_id: Option<ListId>,
    name: String,
    archived: bool,
    items: Vec<Item>,
    members: Vec<String>,
    item_ids: IdAllocator,
    filter: VisibilityFilter,
}

impl DetailSession {
    /// Starts a session from a handoff, or from the built-in default list.
    pub fn from_handoff(handoff: Option<Handoff>, id_allocation: IdAllocation) -> Self {
        match handoff {
            Some(handoff) => Self::from_list(handoff.list, id_allocation),
            None => Self::fallback(id_allocation),
        }
    }

    /// Starts a session over a copy of `list`.
    pub fn from_list(list: ShoppingList, id_allocation: IdAllocation) -> Self {
        let item_ids = IdAllocator::new(id_allocation, list.items.iter().map(|item| item.id));
        Self {
            list_id: Some(list.id),
            name: list.name,
            archived: list.archived,
            items: list.items,
            members: list.members,
            item_ids,
            filter: VisibilityFilter::default(),
        }
    }

    /// Session over the built-in default list. It has no collection id.
    pub fn fallback(id_allocation: IdAllocation) -> Self {
        let mut resolved = Item::new(3, "Default Item 3");
        resolved.resolved = true;
        let items = vec![
            Item::new(1, "Default Item 1"),
            Item::new(2, "Default Item 2"),
            resolved,
        ];

        Self {
            list_id: None,
            name: DEFAULT_LIST_NAME.to_string(),
            archived: false,
            item_ids: IdAllocator::new(id_allocation, items.iter().map(|item| item.id)),
            items,
            members: vec![
                "Member 1".to_string(),
                "Member 2".to_string(),
                "Member 3".to_string(),
            ],
            filter: VisibilityFilter::default(),
        }
    }

    /// Renames the list. Owner only; any string is accepted.
    pub fn rename_list(&mut self, actor: &User, new_name: &str) -> Outcome {
        let action = ListAction::RenameList;
        if !authorize(MODULE, actor, action) {
            return Outcome::Denied;
        }

        self.name = new_name.to_string();
        self.log_applied(action, actor);
        Outcome::Applied(())
    }

    /// Appends an unresolved item. Any role; `name` must be non-empty.
    pub fn add_item(&mut self, actor: &User, name: &str) -> Outcome<ItemId> {
        let action = ListAction::AddItem;
        if !authorize(MODULE, actor, action) {
            return Outcome::Denied;
        }
        if name.is_empty() {
            return reject(action, RejectReason::EmptyName);
        }

        let id = self.item_ids.allocate(self.items.len());
        self.items.push(Item::new(id, name));
        info!(
            "event={} module={MODULE} status=ok item_id={id} user_id={}",
            action.as_str(),
            actor.id
        );
        Outcome::Applied(id)
    }

    /// Removes every item with `id`. Owner only.
    pub fn remove_item(&mut self, actor: &User, id: ItemId) -> Outcome {
        let action = ListAction::RemoveItem;
        if !authorize(MODULE, actor, action) {
            return Outcome::Denied;
        }

        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return reject(action, RejectReason::UnknownItem(id));
        }

        self.log_applied(action, actor);
        Outcome::Applied(())
    }

    /// Flips `resolved` on every item with `id`. Any role.
    pub fn toggle_resolved(&mut self, actor: &User, id: ItemId) -> Outcome {
        let action = ListAction::ToggleResolved;
        if !authorize(MODULE, actor, action) {
            return Outcome::Denied;
        }

        let mut touched = false;
        for item in self.items.iter_mut().filter(|item| item.id == id) {
            item.toggle_resolved();
            touched = true;
        }
        if !touched {
            return reject(action, RejectReason::UnknownItem(id));
        }

        self.log_applied(action, actor);
        Outcome::Applied(())
    }

    /// Appends a member. Owner only; `name` must be non-empty.
    pub fn add_member(&mut self, actor: &User, name: &str) -> Outcome {
        let action = ListAction::AddMember;
        if !authorize(MODULE, actor, action) {
            return Outcome::Denied;
        }
        if name.is_empty() {
            return reject(action, RejectReason::EmptyName);
        }

        self.members.push(name.to_string());
        self.log_applied(action, actor);
        Outcome::Applied(())
    }

    /// Removes every member equal to `name`. Owner only.
    pub fn remove_member(&mut self, actor: &User, name: &str) -> Outcome {
        let action = ListAction::RemoveMember;
        if !authorize(MODULE, actor, action) {
            return Outcome::Denied;
        }

        let before = self.members.len();
        self.members.retain(|member| member != name);
        if self.members.len() == before {
            return reject(action, RejectReason::UnknownMember(name.to_string()));
        }

        self.log_applied(action, actor);
        Outcome::Applied(())
    }

    /// Items matching `filter`: active = unresolved, archived = resolved.
    pub fn items_filtered(&self, filter: VisibilityFilter) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| filter.admits(item.resolved))
            .collect()
    }

    /// Signals a return to the collection. Guests only; members untouched.
    pub fn leave(&self, actor: &User) -> Outcome<Route> {
        let action = ListAction::LeaveList;
        if !authorize(MODULE, actor, action) {
            return Outcome::Denied;
        }

        self.log_applied(action, actor);
        Outcome::Applied(Route::Collection)
    }

    /// Collection id of the opened list; `None` for the fallback list.
    pub fn list_id(&self) -> Option<ListId> {
        self.list_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn filter(&self) -> VisibilityFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: VisibilityFilter) {
        self.filter = filter;
    }

    pub fn visible_items(&self) -> Vec<&Item> {
        self.items_filtered(self.filter)
    }

    /// Current draft as a list value. The fallback list reports id `0`.
    pub fn snapshot(&self) -> ShoppingList {
        ShoppingList {
            id: self.list_id.unwrap_or(0),
            name: self.name.clone(),
            archived: self.archived,
            items: self.items.clone(),
            members: self.members.clone(),
        }
    }

    fn log_applied(&self, action: ListAction, actor: &User) {
        info!(
            "event={} module={MODULE} status=ok list_id={} user_id={}",
            action.as_str(),
            self.list_id
                .map_or_else(|| "default".to_string(), |id| id.to_string()),
            actor.id
        );
    }
}

fn reject<T>(action: ListAction, reason: RejectReason) -> Outcome<T> {
    log_rejected(MODULE, action, &reason);
    Outcome::Rejected(reason)
}
