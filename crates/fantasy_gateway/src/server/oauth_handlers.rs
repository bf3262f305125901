//! OAuth Authentication Handlers
//!
//! `/auth` sends the browser to the provider's login page and `/callback`
//! completes the authorization code flow by exchanging the code for a token.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::AppState;

pub const CALLBACK_SUCCESS_MESSAGE: &str =
    "Authentication successful! You can close this window and use the API endpoints.";
pub const CALLBACK_FAILURE_MESSAGE: &str = "Failed to obtain access token";
pub const MISSING_CODE_MESSAGE: &str = "Missing or invalid authorization code";

/// OAuth callback query parameters
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Session state reported by `/status`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub authenticated: bool,
    pub authenticated_at: Option<String>,
}

/// Redirect to the provider's authorization page
pub async fn authorize(
    State(state): State<Arc<AppState>>,
) -> Result<Response, (StatusCode, String)> {
    let url = state.oauth.authorization_url().map_err(|e| {
        tracing::error!("[ERROR] Cannot build authorization URL: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to start authorization".to_string())
    })?;

    tracing::info!("[INFO] Redirecting to provider for authorization");
    Ok((StatusCode::FOUND, [(LOCATION, url)]).into_response())
}

/// OAuth callback handler - exchanges the code and stores the token
pub async fn callback(
    State(state): State<Arc<AppState>>,
    query: Result<Query<OAuthCallbackQuery>, QueryRejection>,
) -> Result<&'static str, (StatusCode, String)> {
    let Query(params) = query.map_err(|e| {
        tracing::warn!("[WARN] Rejected callback query: {}", e);
        (StatusCode::BAD_REQUEST, MISSING_CODE_MESSAGE.to_string())
    })?;

    let code = match params.code.filter(|c| !c.is_empty()) {
        Some(code) => code,
        None => {
            if let Some(error) = params.error {
                tracing::warn!(
                    "[WARN] Provider returned error '{}': {}",
                    error,
                    params.error_description.as_deref().unwrap_or("no description")
                );
                return Err((StatusCode::BAD_REQUEST, format!("Authorization failed: {}", error)));
            }
            return Err((StatusCode::BAD_REQUEST, MISSING_CODE_MESSAGE.to_string()));
        }
    };

    match state.oauth.exchange_code(&code).await {
        Ok(_) => {
            tracing::info!("[OK] Access token obtained and stored");
            Ok(CALLBACK_SUCCESS_MESSAGE)
        }
        Err(e) => {
            tracing::error!("[ERROR] Token exchange failed: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, CALLBACK_FAILURE_MESSAGE.to_string()))
        }
    }
}

/// Whether this instance currently holds a token
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let token = state.session.get().await;
    Json(StatusResponse {
        authenticated: token.is_some(),
        authenticated_at: token.map(|t| t.obtained_at.to_rfc3339()),
    })
}
