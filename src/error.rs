//! Error types for socialgraph operations.

use std::io;
use thiserror::Error;

/// The error type for graph and configuration operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration file could not be read or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Could not reach or authenticate against the database.
    #[error("Failed to connect to {uri}: {source}")]
    Connection {
        uri: String,
        #[source]
        source: neo4rs::Error,
    },

    /// A query or transaction failed inside the database.
    #[error("Query failed: {0}")]
    Query(#[from] neo4rs::Error),

    /// Output could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A returned row did not have the expected shape.
    #[error("Unexpected query result: {0}")]
    Decode(String),
}

impl From<neo4rs::DeError> for Error {
    fn from(e: neo4rs::DeError) -> Self {
        Error::Decode(e.to_string())
    }
}

/// A specialized Result type for socialgraph operations.
pub type Result<T> = std::result::Result<T, Error>;
