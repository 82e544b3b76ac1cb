//! Core domain logic for shopping-list sessions.
//! This crate is the single source of truth for list, item, member and
//! permission invariants; hosts only render state and forward user input.

pub mod config;
pub mod identity;
pub mod logging;
pub mod model;
pub mod nav;
pub mod repo;
pub mod seed;
pub mod service;

pub use config::{ConfigError, SessionConfig};
pub use identity::IdentityStore;
pub use logging::{
    default_log_level, init_logging, init_logging_from, logging_status, LoggingError,
};
pub use model::filter::{parse_visibility_filter, FilterParseError, VisibilityFilter};
pub use model::ids::{parse_id_allocation, IdAllocation, IdAllocationParseError, IdAllocator};
pub use model::outcome::{Outcome, RejectReason};
pub use model::permission::ListAction;
pub use model::shopping_list::{Item, ItemId, ListId, ShoppingList};
pub use model::user::{builtin_users, default_user, Role, User, UserId, DEFAULT_USER_ID};
pub use nav::{Handoff, Navigator, Route, RouteParseError, View};
pub use repo::list_repo::{InMemoryListRepository, ListRepository, RepoError, RepoResult};
pub use seed::{bundled_seed, load_seed, load_seed_or_empty, parse_seed, SeedError};
pub use service::collection::ListCollection;
pub use service::detail::{DetailSession, DEFAULT_LIST_NAME};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Builds a ready-to-use session from config: seed lists, built-in users,
/// collection view active.
pub fn start_session(config: &SessionConfig) -> Navigator {
    let lists = match config.seed_path.as_deref() {
        Some(path) => load_seed_or_empty(path),
        None => bundled_seed(),
    };
    Navigator::new(
        IdentityStore::new(),
        ListCollection::from_seed(lists, config.id_allocation),
        config.id_allocation,
    )
}
