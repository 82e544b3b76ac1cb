//! Shopping list repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered list collection behind a storage-agnostic trait.
//!
//! # Invariants
//! - Insertion order is preserved and is the only ordering exposed.
//! - Ids are not required to be unique: id-keyed writes touch every list
//!   carrying that id and report how many they touched.

use crate::model::shopping_list::{ListId, ShoppingList};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for list lookups and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(ListId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "shopping list not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for the list collection.
pub trait ListRepository {
    /// Appends one list and returns its id.
    fn insert_list(&mut self, list: ShoppingList) -> ListId;
    /// Applies `apply` to every list with `id`; returns how many were touched.
    fn update_lists(
        &mut self,
        id: ListId,
        apply: &mut dyn FnMut(&mut ShoppingList),
    ) -> RepoResult<usize>;
    /// Removes every list with `id`; returns how many were removed.
    fn delete_lists(&mut self, id: ListId) -> RepoResult<usize>;
    /// All lists in insertion order.
    fn lists(&self) -> &[ShoppingList];

    fn len(&self) -> usize {
        self.lists().len()
    }

    fn is_empty(&self) -> bool {
        self.lists().is_empty()
    }

    /// First list carrying `id`.
    fn get_list(&self, id: ListId) -> Option<&ShoppingList> {
        self.lists().iter().find(|list| list.id == id)
    }
}

/// Vec-backed repository living for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryListRepository {
    lists: Vec<ShoppingList>,
}

impl InMemoryListRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from pre-existing lists, e.g. a seed document.
    pub fn with_lists(lists: Vec<ShoppingList>) -> Self {
        Self { lists }
    }
}

impl ListRepository for InMemoryListRepository {
    fn insert_list(&mut self, list: ShoppingList) -> ListId {
        let id = list.id;
        self.lists.push(list);
        id
    }

    fn update_lists(
        &mut self,
        id: ListId,
        apply: &mut dyn FnMut(&mut ShoppingList),
    ) -> RepoResult<usize> {
        let mut touched = 0;
        for list in self.lists.iter_mut().filter(|list| list.id == id) {
            apply(list);
            touched += 1;
        }

        if touched == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(touched)
    }

    fn delete_lists(&mut self, id: ListId) -> RepoResult<usize> {
        let before = self.lists.len();
        self.lists.retain(|list| list.id != id);
        let removed = before - self.lists.len();

        if removed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(removed)
    }

    fn lists(&self) -> &[ShoppingList] {
        &self.lists
    }
}
