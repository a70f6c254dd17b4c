//! Delete the cached snapshot.

use crate::config::resolve_snapshot_path;
use anyhow::Result;
use student_portal::Snapshot;

pub fn run(snapshot: Option<&str>) -> Result<()> {
    let path = resolve_snapshot_path(snapshot);
    if Snapshot::clear(&path)? {
        eprintln!("  Removed {}", path.display());
    } else {
        eprintln!("  No snapshot at {}", path.display());
    }
    Ok(())
}
