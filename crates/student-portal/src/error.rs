//! Error type for portal login, scraping, and snapshot storage.

/// All errors that can occur while talking to the ERP portal.
#[derive(thiserror::Error, Debug)]
pub enum PortalError {
    #[error("Missing credentials")]
    MissingCredentials,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("No snapshot at {0}")]
    SnapshotMissing(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PortalError {
    /// Whether the portal itself rejected the request (as opposed to a
    /// transport or local failure).
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            PortalError::MissingCredentials | PortalError::InvalidCredentials
        )
    }
}

/// Convenience result type.
pub type PortalResult<T> = Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failure_classification() {
        assert!(PortalError::MissingCredentials.is_auth_failure());
        assert!(PortalError::InvalidCredentials.is_auth_failure());
        assert!(!PortalError::SnapshotMissing("x".into()).is_auth_failure());
    }

    #[test]
    fn test_status_message() {
        let e = PortalError::UnexpectedStatus {
            url: "http://portal/a.jsp".into(),
            status: 503,
        };
        assert_eq!(e.to_string(), "Unexpected status 503 from http://portal/a.jsp");
    }
}
