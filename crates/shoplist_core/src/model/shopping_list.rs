//! Shopping list and item records.
//!
//! # Responsibility
//! - Define the list/item shapes shared by the collection, detail sessions
//!   and the seed document.
//!
//! # Invariants
//! - A list owns its items and members; nothing is shared between lists.
//! - Item ids are unique within their list at creation time.
//! - `archived` and `resolved` are plain booleans.

use serde::{Deserialize, Serialize};

/// Identifier of a list inside one collection.
pub type ListId = u32;

/// Identifier of an item inside one list.
pub type ItemId = u32;

/// One entry of a shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub resolved: bool,
}

impl Item {
    /// Creates an unresolved item.
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            resolved: false,
        }
    }

    pub fn toggle_resolved(&mut self) {
        self.resolved = !self.resolved;
    }
}

/// A named shopping list with its items and members.
///
/// Field names match the seed document schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: ListId,
    pub name: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub items: Vec<Item>,
    /// Member display names, in insertion order. Duplicates are allowed.
    #[serde(default)]
    pub members: Vec<String>,
}

impl ShoppingList {
    /// Creates an active list with no items and no members.
    pub fn new(id: ListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            archived: false,
            items: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn toggle_archived(&mut self) {
        self.archived = !self.archived;
    }

    pub fn is_active(&self) -> bool {
        !self.archived
    }
}

#[cfg(test)]
mod tests {
    use super::{Item, ShoppingList};

    #[test]
    fn new_list_is_active_and_empty() {
        let list = ShoppingList::new(1, "Groceries");
        assert!(list.is_active());
        assert!(list.items.is_empty());
        assert!(list.members.is_empty());
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let list: ShoppingList = serde_json::from_str(r#"{"id": 4, "name": "Hardware"}"#)
            .expect("minimal list should parse");
        assert_eq!(list, ShoppingList::new(4, "Hardware"));

        let item: Item =
            serde_json::from_str(r#"{"id": 2, "name": "Nails"}"#).expect("item should parse");
        assert!(!item.resolved);
    }

    #[test]
    fn toggles_flip_flags() {
        let mut list = ShoppingList::new(1, "Party");
        list.toggle_archived();
        assert!(list.archived);

        let mut item = Item::new(1, "Cake");
        item.toggle_resolved();
        assert!(item.resolved);
        item.toggle_resolved();
        assert!(!item.resolved);
    }
}
