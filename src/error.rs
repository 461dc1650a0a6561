//! Error types for btcaudit.

use thiserror::Error;

/// Result type for btcaudit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the helpers in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A string did not name a member of a closed enumeration.
    #[error("invalid {kind}: {value:?}")]
    InvalidEnum {
        /// Which enumeration was being parsed ("network", "backend").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    #[error("malformed endpoint: {0:?}")]
    MalformedEndpoint(String),

    #[error("unknown xpub prefix: {0:?}")]
    UnknownXpubPrefix(String),

    #[error("unknown address prefix: {0:?}")]
    UnknownAddressPrefix(String),

    #[error("invalid multisig {m}-of-{n}: {reason}")]
    InvalidMultisig {
        /// Required signatures.
        m: u32,
        /// Total keys.
        n: u32,
        /// Which bound was violated.
        reason: &'static str,
    },

    #[error("config read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_enum(kind: &'static str, value: impl Into<String>) -> Self {
        Error::InvalidEnum { kind, value: value.into() }
    }
}
