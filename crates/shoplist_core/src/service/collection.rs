//! List collection use-case service.
//!
//! # Responsibility
//! - Create, archive-toggle, delete and open shopping lists.
//! - Expose the active/archived partition in insertion order.
//!
//! # Invariants
//! - Blank names never create a list.
//! - `list_filtered(Active)` and `list_filtered(Archived)` partition the
//!   collection.
//! - Opening a list hands out a snapshot; later edits to that snapshot are
//!   not written back.

use crate::model::filter::VisibilityFilter;
use crate::model::ids::{IdAllocation, IdAllocator};
use crate::model::outcome::{Outcome, RejectReason};
use crate::model::permission::ListAction;
use crate::model::shopping_list::{ListId, ShoppingList};
use crate::model::user::User;
use crate::nav::Handoff;
use crate::repo::list_repo::{InMemoryListRepository, ListRepository};
use crate::service::{authorize, log_rejected};
use log::info;

const MODULE: &str = "collection";

/// Collection manager over a list repository.
pub struct ListCollection<R: ListRepository = InMemoryListRepository> {
    repo: R,
    ids: IdAllocator,
    filter: VisibilityFilter,
}

impl ListCollection<InMemoryListRepository> {
    /// Builds an in-memory collection from seed lists.
    pub fn from_seed(lists: Vec<ShoppingList>, id_allocation: IdAllocation) -> Self {
        Self::new(InMemoryListRepository::with_lists(lists), id_allocation)
    }
}

impl<R: ListRepository> ListCollection<R> {
    pub fn new(repo: R, id_allocation: IdAllocation) -> Self {
        let ids = IdAllocator::new(id_allocation, repo.lists().iter().map(|list| list.id));
        Self {
            repo,
            ids,
            filter: VisibilityFilter::default(),
        }
    }

    /// Creates an active, empty list named `name`.
    ///
    /// # Contract
    /// - Only whitespace or U+FEFF: `Rejected(EmptyName)`, collection
    ///   unchanged.
    /// - The raw `name` is stored untrimmed.
    /// - Returns the id chosen by the configured `IdAllocation`.
    pub fn create_list(&mut self, actor: &User, name: &str) -> Outcome<ListId> {
        let action = ListAction::CreateList;
        if !authorize(MODULE, actor, action) {
            return Outcome::Denied;
        }
        if is_blank(name) {
            return self.reject(action, RejectReason::EmptyName);
        }

        let id = self.ids.allocate(self.repo.len());
        let id = self.repo.insert_list(ShoppingList::new(id, name));
        info!(
            "event={} module={MODULE} status=ok list_id={id} user_id={}",
            action.as_str(),
            actor.id
        );
        Outcome::Applied(id)
    }

    /// Flips `archived` on the list(s) with `id`.
    pub fn toggle_archive(&mut self, actor: &User, id: ListId) -> Outcome {
        let action = ListAction::ToggleArchive;
        if !authorize(MODULE, actor, action) {
            return Outcome::Denied;
        }

        let mut toggle = |list: &mut ShoppingList| list.toggle_archived();
        match self.repo.update_lists(id, &mut toggle) {
            Ok(touched) => {
                info!(
                    "event={} module={MODULE} status=ok list_id={id} touched={touched}",
                    action.as_str()
                );
                Outcome::Applied(())
            }
            Err(_) => self.reject(action, RejectReason::UnknownList(id)),
        }
    }

    /// Removes the list(s) with `id`. Irreversible within the session.
    pub fn delete_list(&mut self, actor: &User, id: ListId) -> Outcome {
        let action = ListAction::DeleteList;
        if !authorize(MODULE, actor, action) {
            return Outcome::Denied;
        }

        match self.repo.delete_lists(id) {
            Ok(removed) => {
                info!(
                    "event={} module={MODULE} status=ok list_id={id} removed={removed}",
                    action.as_str()
                );
                Outcome::Applied(())
            }
            Err(_) => self.reject(action, RejectReason::UnknownList(id)),
        }
    }

    /// Lists matching `filter`, in insertion order.
    pub fn list_filtered(&self, filter: VisibilityFilter) -> Vec<&ShoppingList> {
        self.repo
            .lists()
            .iter()
            .filter(|list| filter.admits(list.archived))
            .collect()
    }

    /// Builds the handoff payload for entering the detail view.
    pub fn open_list(&self, actor: &User, id: ListId) -> Outcome<Handoff> {
        let action = ListAction::OpenList;
        if !authorize(MODULE, actor, action) {
            return Outcome::Denied;
        }

        match self.repo.get_list(id) {
            Some(list) => {
                info!(
                    "event={} module={MODULE} status=ok list_id={id} user_id={}",
                    action.as_str(),
                    actor.id
                );
                Outcome::Applied(Handoff::new(list.clone(), Some(actor.clone())))
            }
            None => self.reject(action, RejectReason::UnknownList(id)),
        }
    }

    pub fn get(&self, id: ListId) -> Option<&ShoppingList> {
        self.repo.get_list(id)
    }

    pub fn lists(&self) -> &[ShoppingList] {
        self.repo.lists()
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    /// Current display selector. Has no effect on stored lists.
    pub fn filter(&self) -> VisibilityFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: VisibilityFilter) {
        self.filter = filter;
    }

    /// Lists visible under the current display selector.
    pub fn visible_lists(&self) -> Vec<&ShoppingList> {
        self.list_filtered(self.filter)
    }

    fn reject<T>(&self, action: ListAction, reason: RejectReason) -> Outcome<T> {
        log_rejected(MODULE, action, &reason);
        Outcome::Rejected(reason)
    }
}

fn is_blank(name: &str) -> bool {
    name.chars().all(|c| c.is_whitespace() || c == '\u{feff}')
}
