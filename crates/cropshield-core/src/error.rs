//! Error types for CropShield

use thiserror::Error;

/// Main error type for CropShield client operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// The service answered with `{ ok: false, error }`
    #[error("{0}")]
    Api(String),

    /// The service answered with a non-JSON failure
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Request could not be sent or the connection dropped
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid client configuration (base URL, timeouts, ...)
    #[error("Config error: {0}")]
    Config(String),

    /// Form input rejected before a request was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Wallet provider failure
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

/// Result type alias using ClientError
pub type ClientResult<T> = Result<T, ClientError>;
