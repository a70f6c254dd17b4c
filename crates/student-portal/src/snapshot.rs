//! Local cache of the last scraped dashboard.
//!
//! Plain pretty-printed JSON, overwritten on every successful scrape.
//! There is no versioning: an unreadable snapshot is simply replaced by the
//! next login.

use crate::error::{PortalError, PortalResult};
use crate::types::Dashboard;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Snapshot file name inside the data directory.
const SNAPSHOT_FILE: &str = "snapshot.json";

/// Data directory name under the user's home.
const DATA_DIR: &str = ".student-portal";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub saved_at: DateTime<Utc>,
    pub uid: String,
    pub dashboard: Dashboard,
}

impl Snapshot {
    /// Stamp a freshly scraped dashboard with the current time.
    pub fn new(uid: impl Into<String>, dashboard: Dashboard) -> Self {
        Self {
            saved_at: Utc::now(),
            uid: uid.into(),
            dashboard,
        }
    }

    /// `~/.student-portal/snapshot.json`.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATA_DIR)
            .join(SNAPSHOT_FILE)
    }

    /// Write the snapshot, replacing any previous one.
    pub fn save(&self, path: &Path) -> PortalResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_vec_pretty(self)?;
        std::fs::write(path, json)?;
        tracing::debug!("snapshot written to {}", path.display());
        Ok(())
    }

    pub fn load(path: &Path) -> PortalResult<Self> {
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PortalError::SnapshotMissing(path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Remove the snapshot. Returns whether a file was actually deleted.
    pub fn clear(path: &Path) -> PortalResult<bool> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
