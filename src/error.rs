/// Error types for mesearch
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for mesearch operations
#[derive(Error, Debug)]
pub enum SearchError {
    /// I/O errors (data file access, process spawning)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Malformed engine literal (bad grammar or wrong field count)
    #[error("Invalid search engine literal: {0}")]
    Parse(String),

    /// An engine with the same alias is already registered
    #[error("Engine already exists: {0}")]
    DuplicateAlias(String),

    /// Two distinct aliases hash to the same registry key
    #[error("Cannot add {adding}, key already taken by {existing}")]
    HashCollision { adding: String, existing: String },

    /// Alias not present in the registry
    #[error("Alias not found in engine registry: {0}")]
    NotFound(String),

    /// Search query missing the leading ':' or the space after the selector
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    /// Unrecognized '-' command
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Data file exists but is not in the two-segment shape or is undecodable
    #[error("Malformed data file: {0}")]
    MalformedStore(String),
}

/// Result type alias for mesearch operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Convert SearchError to a user-friendly error message
impl SearchError {
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            SearchError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            SearchError::Parse(literal) => {
                format!("Could not parse search engine literal: {}", literal)
            }
            SearchError::DuplicateAlias(engine) => {
                format!("Cannot add search engine \"{}\", engine already exists", engine)
            }
            SearchError::HashCollision { adding, existing } => {
                format!(
                    "Cannot add search engine {} because of hash mismatch with engine {}",
                    adding, existing
                )
            }
            SearchError::NotFound(alias) => {
                format!("Alias not found in engine registry: {}", alias)
            }
            SearchError::InvalidQuery(query) => {
                format!("Invalid search query: {}", query)
            }
            SearchError::InvalidCommand(command) => {
                format!("Invalid command: -{}", command)
            }
            SearchError::MalformedStore(reason) => {
                format!("Data file is corrupted: {}", reason)
            }
        }
    }
}
