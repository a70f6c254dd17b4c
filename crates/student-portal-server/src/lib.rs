//! Student portal server: REST API and command-line front end over the
//! `student-portal` scraping library.

pub mod cli;
pub mod config;
pub mod rest;

pub use config::{resolve_bind_addr, resolve_portal, resolve_snapshot_path};
pub use rest::{router, AppState};
