//! Student portal: ERP login, report-page scraping, and record extraction.

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod pages;
pub mod snapshot;
pub mod summary;
pub mod types;

pub use client::{Credentials, FetchedPages, PortalClient};
pub use config::PortalConfig;
pub use error::{PortalError, PortalResult};
pub use pages::ReportPage;
pub use snapshot::Snapshot;
pub use types::*;
