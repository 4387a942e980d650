//! Error types for Front Desk.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure or timeout while talking to the request store.
    #[error("Request store unreachable: {0}")]
    StoreUnreachable(String),

    /// The request store replied with a non-success status.
    #[error("Request store rejected the call: HTTP {0}")]
    StoreRejected(u16),

    /// The request store answered, but not with something we can use.
    #[error("Malformed store response: {0}")]
    MalformedStoreResponse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error came from the request store round-trip.
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            Self::StoreUnreachable(_) | Self::StoreRejected(_) | Self::MalformedStoreResponse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_failures() {
        assert!(Error::StoreUnreachable("timeout".into()).is_store_failure());
        assert!(Error::StoreRejected(502).is_store_failure());
        assert!(Error::MalformedStoreResponse("not json".into()).is_store_failure());
        assert!(!Error::NotFound("req-1".into()).is_store_failure());
    }

    #[test]
    fn test_display() {
        let err = Error::Conflict("already handled".into());
        assert_eq!(err.to_string(), "Conflict: already handled");
    }
}
