//! Seed document loading.
//!
//! # Responsibility
//! - Parse the static `{ "shoppingLists": [...] }` document that populates
//!   the collection once at startup.
//!
//! # Invariants
//! - A missing or `null` `shoppingLists` key yields an empty collection.
//! - `load_seed_or_empty` never fails; it logs and degrades to empty.

use crate::model::shopping_list::ShoppingList;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Sample dataset bundled with the crate.
pub const BUNDLED_SEED: &str = include_str!("../data/shopping_lists.json");

/// On-disk seed document shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedDocument {
    #[serde(rename = "shoppingLists", default)]
    pub shopping_lists: Option<Vec<ShoppingList>>,
}

impl SeedDocument {
    pub fn into_lists(self) -> Vec<ShoppingList> {
        self.shopping_lists.unwrap_or_default()
    }
}

#[derive(Debug)]
pub enum SeedError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read seed `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid seed document: {err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Parses seed JSON text into lists, in document order.
pub fn parse_seed(json: &str) -> Result<Vec<ShoppingList>, SeedError> {
    let document: SeedDocument = serde_json::from_str(json)?;
    Ok(document.into_lists())
}

/// Reads and parses a seed file.
pub fn load_seed(path: &Path) -> Result<Vec<ShoppingList>, SeedError> {
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&json)
}

/// Reads a seed file, degrading to an empty collection on any error.
pub fn load_seed_or_empty(path: &Path) -> Vec<ShoppingList> {
    match load_seed(path) {
        Ok(lists) => {
            info!(
                "event=seed_load module=seed status=ok lists={}",
                lists.len()
            );
            lists
        }
        Err(err) => {
            warn!("event=seed_load module=seed status=degraded error={err}");
            Vec::new()
        }
    }
}

/// Parses `BUNDLED_SEED`, degrading to empty if it is malformed.
pub fn bundled_seed() -> Vec<ShoppingList> {
    parse_seed(BUNDLED_SEED).unwrap_or_else(|err| {
        warn!("event=seed_load module=seed status=degraded source=bundled error={err}");
        Vec::new()
    })
}
