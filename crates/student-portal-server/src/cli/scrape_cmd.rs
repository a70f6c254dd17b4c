//! One-shot scrape from the command line. Saves the snapshot and prints
//! the dashboard JSON.

use crate::cli::output;
use crate::config::{resolve_portal, resolve_snapshot_path};
use anyhow::{Context, Result};
use std::path::Path;
use student_portal::{Credentials, PortalClient, Snapshot};
use tracing::info;

pub async fn run(
    uid: &str,
    password: &str,
    portal_base: Option<&str>,
    snapshot: Option<&str>,
    out: Option<&Path>,
) -> Result<()> {
    let portal = resolve_portal(portal_base)?;
    let client = PortalClient::new(portal)?;
    let credentials = Credentials::new(uid, password);

    let dashboard = client
        .scrape(&credentials)
        .await
        .with_context(|| format!("scrape failed for {}", uid.trim()))?;

    let snapshot_path = resolve_snapshot_path(snapshot);
    let snapshot = Snapshot::new(uid.trim(), dashboard);
    snapshot
        .save(&snapshot_path)
        .with_context(|| format!("failed to save snapshot to {}", snapshot_path.display()))?;
    info!("snapshot saved to {}", snapshot_path.display());

    match out {
        Some(path) => {
            let json = serde_json::to_vec_pretty(&snapshot.dashboard)?;
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("dashboard written to {}", path.display());
        }
        None => output::print_json(&snapshot.dashboard),
    }
    Ok(())
}
