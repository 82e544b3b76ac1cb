//! Session configuration.
//!
//! # Responsibility
//! - Collect the knobs a session host needs: id allocation, logging and the
//!   seed document location.
//!
//! # Invariants
//! - `SessionConfig::default()` reproduces historical behavior
//!   (`IdAllocation::CountPlusOne`, no file logging, bundled seed).

use crate::logging::default_log_level;
use crate::model::ids::IdAllocation;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub id_allocation: IdAllocation,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files. `None` disables file logs.
    pub log_dir: Option<PathBuf>,
    /// Seed document path. `None` uses the bundled sample.
    pub seed_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            id_allocation: IdAllocation::default(),
            log_level: default_log_level().to_string(),
            log_dir: None,
            seed_path: None,
        }
    }
}

impl SessionConfig {
    /// Parses a JSON config; absent fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    /// Reads a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SessionConfig};
    use crate::model::ids::IdAllocation;
    use std::path::PathBuf;

    #[test]
    fn empty_object_yields_defaults() {
        let config = SessionConfig::from_json_str("{}").expect("empty config should parse");
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.id_allocation, IdAllocation::CountPlusOne);
    }

    #[test]
    fn parses_all_fields() {
        let config = SessionConfig::from_json_str(
            r#"{
                "id_allocation": "monotonic",
                "log_level": "warn",
                "log_dir": "/var/log/shoplist",
                "seed_path": "/srv/seed.json"
            }"#,
        )
        .expect("full config should parse");
        assert_eq!(config.id_allocation, IdAllocation::Monotonic);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/shoplist")));
        assert_eq!(config.seed_path, Some(PathBuf::from("/srv/seed.json")));
    }

    #[test]
    fn unknown_allocation_is_rejected() {
        let err = SessionConfig::from_json_str(r#"{"id_allocation": "uuid"}"#)
            .expect_err("unknown allocation must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"id_allocation": "count"}"#).expect("write config");
        let config = SessionConfig::load(&path).expect("config should load");
        assert_eq!(config.id_allocation, IdAllocation::CountPlusOne);

        let missing = SessionConfig::load(&dir.path().join("missing.json"))
            .expect_err("missing file must fail");
        assert!(matches!(missing, ConfigError::Io { .. }));
    }
}
