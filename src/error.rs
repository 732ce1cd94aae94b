//! Error types for prefix selection and discovery.

use thiserror::Error;

/// Result type for net-autoconfig operations.
pub type Result<T> = std::result::Result<T, Error>;

/// net-autoconfig errors
#[derive(Debug, Error)]
pub enum Error {
    /// The router discovery tool failed or its output could not be read.
    #[error("Discovery failed: {0}")]
    DiscoveryFailed(String),

    /// No usable /64 pair could be carved out of the free space.
    #[error("Prefix selection failed: {0}")]
    Selection(String),

    #[error("Invalid CIDR: {0}")]
    InvalidCidr(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),
}

impl Error {
    /// Process exit code for this error: 1 for discovery failures, 2 for anything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::DiscoveryFailed(_) => 1,
            _ => 2,
        }
    }
}

impl From<std::net::AddrParseError> for Error {
    fn from(e: std::net::AddrParseError) -> Self {
        Error::InvalidCidr(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}
