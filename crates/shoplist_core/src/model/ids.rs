//! Id allocation for lists and items.
//!
//! `CountPlusOne` reproduces the historical behavior: the next id is the
//! current record count plus one. After a deletion this can hand out an id
//! that is still in use. `Monotonic` keeps a high-water mark and never reuses
//! an id within a session.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Id allocation policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdAllocation {
    #[default]
    #[serde(rename = "count")]
    CountPlusOne,
    #[serde(rename = "monotonic")]
    Monotonic,
}

impl IdAllocation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CountPlusOne => "count",
            Self::Monotonic => "monotonic",
        }
    }
}

/// Parses an allocation policy name (`count|monotonic`).
pub fn parse_id_allocation(value: &str) -> Result<IdAllocation, IdAllocationParseError> {
    match value.trim() {
        "count" => Ok(IdAllocation::CountPlusOne),
        "monotonic" => Ok(IdAllocation::Monotonic),
        other => Err(IdAllocationParseError(other.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocationParseError(pub String);

impl Display for IdAllocationParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported id allocation `{}`; expected count|monotonic",
            self.0
        )
    }
}

impl Error for IdAllocationParseError {}

/// Stateful allocator bound to one record sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    policy: IdAllocation,
    high_water: u32,
}

impl IdAllocator {
    /// Creates an allocator aware of the ids already present.
    pub fn new(policy: IdAllocation, existing: impl IntoIterator<Item = u32>) -> Self {
        Self {
            policy,
            high_water: existing.into_iter().max().unwrap_or(0),
        }
    }

    pub fn policy(&self) -> IdAllocation {
        self.policy
    }

    /// Hands out the id for a record appended to a sequence of `current_len`.
    pub fn allocate(&mut self, current_len: usize) -> u32 {
        let id = match self.policy {
            IdAllocation::CountPlusOne => {
                u32::try_from(current_len).unwrap_or(u32::MAX).saturating_add(1)
            }
            IdAllocation::Monotonic => self.high_water.saturating_add(1),
        };
        self.high_water = self.high_water.max(id);
        id
    }
}
