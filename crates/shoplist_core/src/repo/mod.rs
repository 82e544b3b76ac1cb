//! Repository layer abstractions.
//!
//! # Responsibility
//! - Define the storage contract the list collection is written against.
//! - Keep storage details out of use-case services.
//!
//! # Invariants
//! - Repositories do not check permissions or validate names; services do.

pub mod list_repo;
