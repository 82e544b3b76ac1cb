//! Navigation bridge between the collection view and a detail session.
//!
//! # Responsibility
//! - Parse and render logical routes (`/`, `/shopping-list/{id}`).
//! - Carry the handoff payload from the collection into a detail session.
//! - Return control to the collection on back/leave.
//!
//! # Invariants
//! - At most one detail session exists at a time.
//! - Nothing flows back from a detail session to the collection: leaving
//!   the detail view discards the session.
//! - The detail view has its own acting user. Entering, switching users
//!   inside, and leaving a detail session never change the collection's
//!   current user.

use crate::identity::IdentityStore;
use crate::model::ids::IdAllocation;
use crate::model::outcome::{Outcome, RejectReason};
use crate::model::shopping_list::{ListId, ShoppingList};
use crate::model::user::{default_user, User, UserId, DEFAULT_USER_ID};
use crate::repo::list_repo::{InMemoryListRepository, ListRepository};
use crate::service::collection::ListCollection;
use crate::service::detail::DetailSession;
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static DETAIL_ROUTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/shopping-list/(\d+)/?$").expect("valid detail route regex"));

/// Logical view address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Collection,
    /// `/shopping-list/{id}`
    ShoppingList(ListId),
}

impl Route {
    /// Parses a logical path.
    pub fn parse(path: &str) -> Result<Self, RouteParseError> {
        let trimmed = path.trim();
        if trimmed == "/" {
            return Ok(Self::Collection);
        }

        let captures = DETAIL_ROUTE_RE
            .captures(trimmed)
            .ok_or_else(|| RouteParseError::UnknownPath(trimmed.to_string()))?;
        captures[1]
            .parse::<ListId>()
            .map(Self::ShoppingList)
            .map_err(|_| RouteParseError::InvalidListId(captures[1].to_string()))
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Collection => write!(f, "/"),
            Self::ShoppingList(id) => write!(f, "/shopping-list/{id}"),
        }
    }
}

impl FromStr for Route {
    type Err = RouteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteParseError {
    UnknownPath(String),
    /// Digits matched but do not fit a list id.
    InvalidListId(String),
}

impl Display for RouteParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPath(path) => write!(f, "unknown route: {path}"),
            Self::InvalidListId(value) => write!(f, "invalid shopping list id in route: {value}"),
        }
    }
}

impl Error for RouteParseError {}

/// Payload carried from the collection into a detail session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    /// Snapshot of the list at open time.
    pub list: ShoppingList,
    /// User acting when the list was opened, if known.
    pub acting_user: Option<User>,
}

impl Handoff {
    pub fn new(list: ShoppingList, acting_user: Option<User>) -> Self {
        Self { list, acting_user }
    }
}

/// What the session is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Collection,
    Detail(DetailSession),
}

/// Owns identity, collection and the active view for one session.
pub struct Navigator<R: ListRepository = InMemoryListRepository> {
    identity: IdentityStore,
    collection: ListCollection<R>,
    view: View,
    route: Route,
    /// Acting user of the open detail session; `None` on the collection.
    detail_actor: Option<User>,
    id_allocation: IdAllocation,
}

impl<R: ListRepository> Navigator<R> {
    pub fn new(
        identity: IdentityStore,
        collection: ListCollection<R>,
        id_allocation: IdAllocation,
    ) -> Self {
        Self {
            identity,
            collection,
            view: View::Collection,
            route: Route::Collection,
            detail_actor: None,
            id_allocation,
        }
    }

    pub fn identity(&self) -> &IdentityStore {
        &self.identity
    }

    /// Clone of the user acting in the current view, to pass into service
    /// calls.
    pub fn acting_user(&self) -> User {
        match &self.detail_actor {
            Some(actor) => actor.clone(),
            None => self.identity.current_user().clone(),
        }
    }

    /// Switches the user acting in the current view.
    ///
    /// Inside a detail session only that session's actor changes.
    pub fn switch_user(&mut self, id: UserId) -> Outcome {
        if self.detail_actor.is_none() {
            return self.identity.set_current_user(id);
        }

        let Some(user) = self.identity.find_user(id).cloned() else {
            info!("event=user_switch module=nav status=rejected reason=unknown_user user_id={id}");
            return Outcome::Rejected(RejectReason::UnknownUser(id));
        };
        info!(
            "event=user_switch module=nav status=ok scope=detail user_id={id} role={}",
            user.role.as_str()
        );
        self.detail_actor = Some(user);
        Outcome::Applied(())
    }

    pub fn collection(&self) -> &ListCollection<R> {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut ListCollection<R> {
        &mut self.collection
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn session(&self) -> Option<&DetailSession> {
        match &self.view {
            View::Detail(session) => Some(session),
            View::Collection => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut DetailSession> {
        match &mut self.view {
            View::Detail(session) => Some(session),
            View::Collection => None,
        }
    }

    /// Current logical route, as last entered.
    pub fn route(&self) -> Route {
        self.route
    }

    /// Opens list `id` as the current user.
    pub fn open(&mut self, id: ListId) -> Outcome<Route> {
        let actor = self.acting_user();
        match self.collection.open_list(&actor, id) {
            Outcome::Applied(handoff) => self.enter(Route::ShoppingList(id), Some(handoff)),
            Outcome::Denied => Outcome::Denied,
            Outcome::Rejected(reason) => Outcome::Rejected(reason),
        }
    }

    /// Enters `route`, optionally with a handoff payload.
    ///
    /// # Contract
    /// - `/` returns to the collection and drops any session.
    /// - `/shopping-list/{id}` without a payload starts the fallback session
    ///   acting as the default user.
    /// - With a payload, its list id must match the route and its acting
    ///   user (when present) acts in the session; otherwise the collection's
    ///   current user does.
    /// - The collection's current user is never changed.
    pub fn enter(&mut self, route: Route, handoff: Option<Handoff>) -> Outcome<Route> {
        let Route::ShoppingList(route_id) = route else {
            return Outcome::Applied(self.back());
        };

        let actor = match &handoff {
            Some(payload) if payload.list.id != route_id => {
                return Outcome::Rejected(RejectReason::RouteMismatch {
                    route_id,
                    list_id: payload.list.id,
                });
            }
            Some(payload) => payload
                .acting_user
                .clone()
                .unwrap_or_else(|| self.identity.current_user().clone()),
            None => self
                .identity
                .find_user(DEFAULT_USER_ID)
                .cloned()
                .unwrap_or_else(default_user),
        };

        let fallback = handoff.is_none();
        self.view = View::Detail(DetailSession::from_handoff(handoff, self.id_allocation));
        self.detail_actor = Some(actor);
        self.route = route;
        info!("event=navigate module=nav status=ok route={route} fallback={fallback}");
        Outcome::Applied(route)
    }

    /// Drops the detail session and returns to the collection.
    pub fn back(&mut self) -> Route {
        if matches!(self.view, View::Detail(_)) {
            info!("event=navigate module=nav status=ok route=/");
        }
        self.view = View::Collection;
        self.detail_actor = None;
        self.route = Route::Collection;
        Route::Collection
    }

    /// Leaves the open list as the current user. Guests only.
    pub fn leave(&mut self) -> Outcome<Route> {
        let actor = self.acting_user();
        let Some(session) = self.session() else {
            return Outcome::Applied(Route::Collection);
        };

        match session.leave(&actor) {
            Outcome::Applied(_) => Outcome::Applied(self.back()),
            other => other,
        }
    }
}
