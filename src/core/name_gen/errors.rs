//! Name Generator Error Types
//!
//! Error types for argument parsing, race lookup, request validation and
//! seed retrieval. Uses thiserror with context fields so failures can be
//! logged with the key or token that caused them.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Race Errors
// ============================================================================

/// Errors raised by the race registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RaceError {
    /// Identifier is not part of the race table.
    #[error("Unknown race: {name}")]
    Unknown { name: String },
}

impl RaceError {
    /// Create an Unknown error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::Unknown { name: name.into() }
    }
}

// ============================================================================
// Argument Errors
// ============================================================================

/// Errors that abort tokenizing of a name command.
///
/// The display text is shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// A second count token was found.
    #[error("Already specified name count - can only take one name count!")]
    DuplicateCount,

    /// A half-breed token named a race outside the table.
    #[error(transparent)]
    Race(#[from] RaceError),
}

// ============================================================================
// Selection Errors
// ============================================================================

/// Errors raised when a request cannot be used to select seeds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("args must be provided to generate seed data")]
    MissingRequest,

    #[error("at least one race must be provided to generate seed data")]
    NoRaces,

    #[error("at least one gender must be provided to generate seed data")]
    NoGenders,
}

// ============================================================================
// Seed Store Errors
// ============================================================================

/// Errors that can occur while reading from a seed store.
#[derive(Error, Debug)]
pub enum SeedStoreError {
    /// No entry exists for the key.
    #[error("Seed entry not found: {key}")]
    NotFound { key: String },

    /// Reading the backing file failed.
    #[error("Failed to read seed file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SeedStoreError {
    /// Create a NotFound error.
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create a ReadFailed error.
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }
}

// ============================================================================
// Seed Errors
// ============================================================================

/// Errors from loading a seed list: retrieval or decoding.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error(transparent)]
    Store(#[from] SeedStoreError),

    /// Seed entry was not a JSON array of strings.
    #[error("Failed to parse seed list '{key}': {source}")]
    ParseFailed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SeedError {
    /// Create a ParseFailed error.
    pub fn parse_failed(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ParseFailed {
            key: key.into(),
            source,
        }
    }

    /// Check if retrying with a different key could succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Store(SeedStoreError::NotFound { .. }))
    }
}

/// Result type for seed loading.
pub type SeedResult<T> = std::result::Result<T, SeedError>;

// ============================================================================
// Tests
// ============================================================================
