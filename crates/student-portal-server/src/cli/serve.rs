//! Run the REST API.

use crate::config::{resolve_bind_addr, resolve_portal};
use crate::rest::{self, AppState};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

pub async fn run(addr: Option<&str>, portal_base: Option<&str>) -> Result<()> {
    let addr = resolve_bind_addr(addr)?;
    let portal = resolve_portal(portal_base)?;

    info!(
        "starting student-portal v{} (portal {})",
        env!("CARGO_PKG_VERSION"),
        portal.base_url
    );

    rest::start(addr, Arc::new(AppState::new(portal))).await
}
