//! Fantasy Gateway HTTPS Server
//!
//! Wires the OAuth and data handlers into an axum router and serves it over
//! TLS on the configured port.

pub mod data_handlers;
pub mod oauth_handlers;

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router as AxumRouter};
use axum_server::{tls_rustls::RustlsConfig, Handle};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::FantasyApiClient;
use crate::auth::{OAuthClient, SessionStore};
use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};

/// Application state shared across handlers
///
/// Holds the one session this instance serves; every handler sees the same
/// token slot through `session`.
#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub oauth: OAuthClient,
    pub api: FantasyApiClient,
}

impl AppState {
    pub fn new(config: &GatewayConfig) -> Self {
        Self::with_session(config, SessionStore::new())
    }

    pub fn with_session(config: &GatewayConfig, session: SessionStore) -> Self {
        let http_client = reqwest::Client::new();
        Self {
            oauth: OAuthClient::new(config.oauth.clone(), session.clone(), http_client.clone()),
            api: FantasyApiClient::new(http_client, config.api_base.clone()),
            session,
        }
    }
}

/// Routes served by [`build_router`], as `(path, description)`
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("/auth", "Start OAuth authorization"),
    ("/callback", "OAuth callback handler"),
    ("/status", "Session status"),
    ("/test", "User games"),
    ("/nhl-leagues", "NHL leagues"),
    ("/nhl-matchups", "NHL matchups (?week=)"),
    ("/nhl-teams", "NHL teams"),
];

/// Build the router with all gateway routes listed in [`ENDPOINTS`]
pub fn build_router(state: Arc<AppState>) -> AxumRouter {
    AxumRouter::new()
        .route("/auth", get(oauth_handlers::authorize))
        .route("/callback", get(oauth_handlers::callback))
        .route("/status", get(oauth_handlers::status))
        .route("/test", get(data_handlers::user_games))
        .route("/nhl-leagues", get(data_handlers::nhl_leagues))
        .route("/nhl-matchups", get(data_handlers::nhl_matchups))
        .route("/nhl-teams", get(data_handlers::nhl_teams))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTPS server and serve until Ctrl-C
///
/// # Errors
/// Returns error if the TLS key/certificate cannot be loaded or the listener
/// cannot bind.
pub async fn start_server(config: GatewayConfig) -> Result<()> {
    let addr = config.server.socket_addr()?;

    let tls = RustlsConfig::from_pem_file(
        &config.server.tls_cert_path,
        &config.server.tls_key_path,
    )
    .await
    .map_err(|e| {
        GatewayError::Tls(format!(
            "Failed to load certificate {} / key {}: {}",
            config.server.tls_cert_path.display(),
            config.server.tls_key_path.display(),
            e
        ))
    })?;

    let state = Arc::new(AppState::new(&config));
    let app = build_router(state);

    let handle = Handle::new();
    tokio::spawn(shutdown_on_ctrl_c(handle.clone()));

    info!("[INFO] Fantasy Gateway listening on https://{}", addr);
    info!("[INFO] Available endpoints:");
    for (path, description) in ENDPOINTS {
        info!("  GET    {:<14} - {}", path, description);
    }

    if config.open_browser {
        let entry = config.server.auth_entry_url();
        tokio::spawn(open_browser_when_ready(handle.clone(), entry));
    }

    axum_server::bind_rustls(addr, tls)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    info!("[INFO] Fantasy Gateway stopped");
    Ok(())
}

async fn shutdown_on_ctrl_c(handle: Handle) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("[WARN] Failed to listen for Ctrl-C: {}", e);
        return;
    }
    info!("[INFO] Shutting down");
    handle.graceful_shutdown(Some(Duration::from_secs(5)));
}

/// Best-effort browser launch once the listener is up
async fn open_browser_when_ready(handle: Handle, url: String) {
    if handle.listening().await.is_none() {
        return;
    }

    info!("[INFO] Opening {} in your browser", url);
    let result = tokio::task::spawn_blocking(move || webbrowser::open(&url)).await;
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!("[WARN] Could not open browser: {}", e),
        Err(e) => warn!("[WARN] Browser launch task failed: {}", e),
    }
}
