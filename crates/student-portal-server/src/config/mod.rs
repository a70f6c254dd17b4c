//! Configuration loading and resolution.
//!
//! Every setting resolves the same way: explicit CLI value, then the
//! environment, then the built-in default.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use student_portal::{PortalConfig, Snapshot};

/// Environment variable overriding the listen address.
pub const ADDR_ENV: &str = "STUDENT_PORTAL_ADDR";

/// Environment variable overriding the snapshot path.
pub const SNAPSHOT_ENV: &str = "STUDENT_PORTAL_SNAPSHOT";

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Resolve the address the REST API binds to.
pub fn resolve_bind_addr(explicit: Option<&str>) -> Result<SocketAddr> {
    let raw = match explicit {
        Some(a) => a.to_string(),
        None => std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string()),
    };
    raw.parse::<SocketAddr>()
        .with_context(|| format!("invalid listen address '{raw}'"))
}

/// Resolve the snapshot file path.
pub fn resolve_snapshot_path(explicit: Option<&str>) -> PathBuf {
    if let Some(path) = explicit {
        return PathBuf::from(path);
    }

    if let Ok(env_path) = std::env::var(SNAPSHOT_ENV) {
        return PathBuf::from(env_path);
    }

    Snapshot::default_path()
}

/// Resolve the portal client configuration.
pub fn resolve_portal(explicit_base: Option<&str>) -> Result<PortalConfig> {
    PortalConfig::resolve(explicit_base).context("invalid portal configuration")
}
