//! Session-holding HTTP client for the ERP portal.
//!
//! One `PortalClient` is one portal session: the login POST stores the
//! session cookie in the client's jar and every report GET reuses it.
//! Build a fresh client per login so sessions never leak between users.

use crate::config::PortalConfig;
use crate::error::{PortalError, PortalResult};
use crate::extract::extract_dashboard;
use crate::pages::{join_url, ReportPage, LOGIN_MARKER, LOGIN_PATH};
use crate::types::Dashboard;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Login identity for the portal.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub uid: String,
    pub password: String,
}

impl Credentials {
    pub fn new(uid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            password: password.into(),
        }
    }

    /// Both fields must be non-blank.
    pub fn validate(&self) -> PortalResult<()> {
        if self.uid.trim().is_empty() || self.password.is_empty() {
            return Err(PortalError::MissingCredentials);
        }
        Ok(())
    }

    /// Fixed login form payload the portal's `youLogin.jsp` expects.
    fn form(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("txtAN", self.uid.trim()),
            ("txtSK", self.password.as_str()),
            ("txtPageAction", "1"),
            ("_tries", "1"),
            ("_md5", ""),
            ("login", "iamalsouser"),
            ("passwd", "haveaniceday"),
            ("_save", "Log In"),
        ]
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("uid", &self.uid)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Report bodies from one fan-out, plus the pages that could not be fetched.
#[derive(Debug, Clone, Default)]
pub struct FetchedPages {
    pub bodies: HashMap<ReportPage, String>,
    pub failed: Vec<ReportPage>,
}

/// HTTP client bound to one portal session.
pub struct PortalClient {
    client: reqwest::Client,
    config: PortalConfig,
}

impl PortalClient {
    /// Create a client with an empty cookie jar.
    pub fn new(config: PortalConfig) -> PortalResult<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_millis(config.timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Submit the login form. The portal answers a bad login by landing
    /// back on the login page, so the final URL after redirects decides.
    pub async fn login(&self, credentials: &Credentials) -> PortalResult<()> {
        credentials.validate()?;

        let url = join_url(&self.config.base_url, LOGIN_PATH);
        info!("logging in {}", credentials.uid.trim());

        let resp = self
            .client
            .post(&url)
            .form(&credentials.form())
            .send()
            .await?;

        let status = resp.status();
        let final_url = resp.url().to_string();
        if !status.is_success() {
            return Err(PortalError::UnexpectedStatus {
                url: final_url,
                status: status.as_u16(),
            });
        }
        if final_url.contains(LOGIN_MARKER) {
            info!("login rejected for {}", credentials.uid.trim());
            return Err(PortalError::InvalidCredentials);
        }

        debug!("login landed on {final_url}");
        Ok(())
    }

    /// GET one report page with the session cookie.
    pub async fn fetch_page(&self, page: ReportPage) -> PortalResult<String> {
        let url = page.url(&self.config.base_url);
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PortalError::UnexpectedStatus {
                url,
                status: status.as_u16(),
            });
        }
        Ok(resp.text().await?)
    }

    /// Fetch all eight report pages concurrently. Each fetch is
    /// best-effort: a failure is logged and that page is left out.
    pub async fn fetch_all(&self) -> FetchedPages {
        let fetches = ReportPage::ALL.iter().map(|&page| async move {
            let result = self.fetch_page(page).await;
            (page, result)
        });

        let mut pages = FetchedPages::default();
        for (page, result) in futures::future::join_all(fetches).await {
            match result {
                Ok(body) => {
                    debug!("fetched {} ({} bytes)", page.key(), body.len());
                    pages.bodies.insert(page, body);
                }
                Err(e) => {
                    warn!("fetching {} failed, treating it as empty: {e}", page.key());
                    pages.failed.push(page);
                }
            }
        }
        pages
    }

    /// Log in, fetch every report, and extract the dashboard.
    pub async fn scrape(&self, credentials: &Credentials) -> PortalResult<Dashboard> {
        self.login(credentials).await?;
        info!("login ok, scraping {} reports", ReportPage::ALL.len());

        let pages = self.fetch_all().await;
        if !pages.failed.is_empty() {
            let keys: Vec<&str> = pages.failed.iter().map(|p| p.key()).collect();
            warn!("{} report(s) unavailable: {}", keys.len(), keys.join(", "));
        }
        Ok(extract_dashboard(&pages.bodies))
    }
}
