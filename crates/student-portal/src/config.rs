//! Client configuration: explicit value, then environment, then default.

use crate::error::{PortalError, PortalResult};
use crate::pages::DEFAULT_BASE_URL;

/// Environment variable overriding the portal base URL.
pub const BASE_URL_ENV: &str = "STUDENT_PORTAL_BASE_URL";

/// Environment variable overriding the request timeout in milliseconds.
pub const TIMEOUT_ENV: &str = "STUDENT_PORTAL_TIMEOUT_MS";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) \
                                  AppleWebKit/537.36 (KHTML, like Gecko) \
                                  Chrome/131.0.0.0 Safari/537.36";

/// Settings for [`crate::PortalClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct PortalConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl PortalConfig {
    /// Config pointing at an explicit base URL, other fields defaulted.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Resolve from an optional explicit base URL, falling back to the
    /// environment and then the built-in defaults.
    pub fn resolve(explicit_base: Option<&str>) -> PortalResult<Self> {
        let base_url = match explicit_base {
            Some(b) => b.to_string(),
            None => std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        };

        let timeout_ms = std::env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let config = Self {
            base_url,
            timeout_ms,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject base URLs that are not absolute http(s) URLs.
    pub fn validate(&self) -> PortalResult<()> {
        let parsed = url::Url::parse(&self.base_url).map_err(|e| PortalError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(PortalError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: format!("unsupported scheme '{other}'"),
            }),
        }
    }
}
