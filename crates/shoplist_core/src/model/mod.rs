//! Domain model for shopping-list sessions.
//!
//! # Responsibility
//! - Define users, roles, lists, items and the permission matrix.
//! - Define the `Outcome` contract shared by every mutating operation.
//!
//! # Invariants
//! - Model types hold no references to each other; lists own their items.
//! - Role checks go through `Role::permits` only.

pub mod filter;
pub mod ids;
pub mod outcome;
pub mod permission;
pub mod shopping_list;
pub mod user;
