//! HTTP API for the dashboard frontend.
//!
//! Two routes: a health check and the login endpoint that performs the
//! whole login-and-scrape flow and answers with the dashboard JSON.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use student_portal::{Credentials, PortalClient, PortalConfig, PortalError};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

/// Shared state passed to all handlers via axum State.
#[derive(Debug, Clone)]
pub struct AppState {
    pub portal: PortalConfig,
}

impl AppState {
    pub fn new(portal: PortalConfig) -> Self {
        Self { portal }
    }
}

/// Body of `POST /api/login`. Fields are optional so that a missing field
/// is reported as missing credentials rather than a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Build the axum Router with all REST endpoints.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/hello", get(handle_hello))
        .route("/api/login", post(handle_login))
        .layer(cors)
        .with_state(state)
}

/// Serve the API on `addr` until ctrl-c.
pub async fn start(addr: SocketAddr, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("REST API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("received shutdown signal");
        })
        .await?;
    Ok(())
}

// ── Handlers ────────────────────────────────────────────────────

async fn handle_hello() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Student portal API is functioning",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn handle_login(
    State(state): State<Arc<AppState>>,
    body: Option<Json<LoginRequest>>,
) -> Response {
    let req = body.map(|Json(r)| r).unwrap_or_default();
    let credentials = Credentials::new(
        req.uid.unwrap_or_default(),
        req.password.unwrap_or_default(),
    );
    if credentials.validate().is_err() {
        return failure(StatusCode::BAD_REQUEST, "Missing Credentials");
    }

    info!(target: "auth", "login request for {}", credentials.uid.trim());

    let result = match PortalClient::new(state.portal.clone()) {
        Ok(client) => client.scrape(&credentials).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(dashboard) => {
            info!(target: "auth", "dashboard ready for {}", credentials.uid.trim());
            (
                StatusCode::OK,
                Json(json!({ "success": true, "data": dashboard })),
            )
                .into_response()
        }
        Err(e) => error_response(&e),
    }
}

// ── Helpers ─────────────────────────────────────────────────────

/// Map a portal error to the status code and message the frontend expects.
fn error_response(e: &PortalError) -> Response {
    match e {
        PortalError::MissingCredentials => {
            failure(StatusCode::BAD_REQUEST, "Missing Credentials")
        }
        PortalError::InvalidCredentials => {
            info!(target: "auth", "login rejected by portal");
            failure(StatusCode::UNAUTHORIZED, "Invalid Credentials")
        }
        other => {
            error!("scrape failed: {other}");
            failure(StatusCode::INTERNAL_SERVER_ERROR, "Portal request failed")
        }
    }
}

fn failure(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({ "success": false, "message": message })),
    )
        .into_response()
}
