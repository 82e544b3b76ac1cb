//! Active/archived visibility selector shared by lists and items.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Display-level partition selector.
///
/// For lists the partition key is `archived`; for items it is `resolved`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VisibilityFilter {
    #[default]
    Active,
    Archived,
}

impl VisibilityFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }

    /// Returns whether a record whose partition flag is `flag` is visible.
    pub fn admits(self, flag: bool) -> bool {
        match self {
            Self::Active => !flag,
            Self::Archived => flag,
        }
    }

    /// Returns the other side of the partition.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Archived,
            Self::Archived => Self::Active,
        }
    }
}

/// Parses a filter name; `archive` is accepted as an alias of `archived`.
pub fn parse_visibility_filter(value: &str) -> Result<VisibilityFilter, FilterParseError> {
    match value.trim() {
        "" => Err(FilterParseError::Empty),
        "active" => Ok(VisibilityFilter::Active),
        "archived" | "archive" => Ok(VisibilityFilter::Archived),
        other => Err(FilterParseError::Unsupported(other.to_string())),
    }
}

impl FromStr for VisibilityFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_visibility_filter(s)
    }
}

/// Filter parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterParseError {
    Empty,
    Unsupported(String),
}

impl Display for FilterParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "filter value must not be empty"),
            Self::Unsupported(value) => {
                write!(f, "unsupported filter `{value}`; expected active|archived")
            }
        }
    }
}

impl Error for FilterParseError {}
