//! Error types for `TomeKeeper`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `TomeKeeper` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A dump or career file does not exist.
    #[error("file not found: {path}")]
    FileNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// File contents are not valid in the declared text encoding.
    #[error("failed to decode {path} as {encoding}")]
    Decode {
        /// The file that failed to decode.
        path: PathBuf,
        /// Name of the declared encoding.
        encoding: &'static str,
    },

    /// Replacing a career file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The career file being replaced.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    // ==================== Data Integrity Errors ====================
    /// A curated ability links to an ability id absent from the canonical dataset.
    #[error("ability '{ability}' links to gameId {game_id}, which is not in the canonical dataset")]
    MissingCanonicalReference {
        /// Curated ability name.
        ability: String,
        /// The dangling link.
        game_id: u32,
    },

    /// A curated ability links to an ability owned by a different career.
    #[error("ability '{ability}' links to gameId {game_id}, owned by career {career_id}")]
    ForeignCanonicalReference {
        /// Curated ability name.
        ability: String,
        /// The offending link.
        game_id: u32,
        /// `CareerID` of the linked canonical ability.
        career_id: u16,
    },

    /// The decision port answered with an id that was not offered.
    #[error("decision for '{ability}' chose gameId {game_id}, which was not offered")]
    InvalidDecision {
        /// Curated ability name.
        ability: String,
        /// The id returned by the decision port.
        game_id: u32,
    },

    // ==================== Career Errors ====================
    /// No career file exists for the slug.
    #[error("career not found: {0}")]
    CareerNotFound(String),

    /// The slug is not present in the career registry.
    #[error("career '{0}' is not in the registry")]
    UnknownCareer(String),

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Career registry TOML could not be parsed.
    #[error("registry parse error: {0}")]
    RegistryParse(#[from] toml::de::Error),

    // ==================== Operator Errors ====================
    /// The interactive prompt could not be shown or answered.
    #[error("prompt failed: {0}")]
    Prompt(String),
}

/// A specialized Result type for `TomeKeeper` operations.
pub type Result<T> = std::result::Result<T, Error>;
