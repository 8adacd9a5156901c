//! Typed errors for the edges of the game
//!
//! Game operations themselves never fail; these cover catalog construction
//! and configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a catalog from a list of entities.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A catalog needs at least one entity to be playable.
    #[error("catalog is empty")]
    Empty,

    /// Two entities share the same id.
    #[error("duplicate entity id {0}")]
    DuplicateId(u32),
}

/// Errors raised while reading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid config JSON.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A field holds a value the game cannot use.
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
