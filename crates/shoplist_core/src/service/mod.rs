//! Use-case services for the collection and detail views.
//!
//! # Responsibility
//! - Apply role checks and input validation before touching state.
//! - Report every mutation as an `Outcome` and log it metadata-only.
//!
//! # Invariants
//! - The acting user is passed into every call; services never read a
//!   global "current user".
//! - A denied or rejected call leaves state byte-for-byte unchanged.

pub mod collection;
pub mod detail;

use crate::model::outcome::RejectReason;
use crate::model::permission::ListAction;
use crate::model::user::User;
use log::{debug, info};

/// Returns whether `actor` may perform `action`, logging denials.
pub(crate) fn authorize(module: &str, actor: &User, action: ListAction) -> bool {
    if actor.may(action) {
        return true;
    }
    info!(
        "event={} module={module} status=denied user_id={} role={}",
        action.as_str(),
        actor.id,
        actor.role.as_str()
    );
    false
}

pub(crate) fn log_rejected(module: &str, action: ListAction, reason: &RejectReason) {
    debug!(
        "event={} module={module} status=rejected reason={}",
        action.as_str(),
        reason.code()
    );
}
