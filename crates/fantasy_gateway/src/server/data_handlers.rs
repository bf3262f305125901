//! Pass-through data routes
//!
//! Each route requires a stored token and relays the remote JSON verbatim.
//! Upstream failures are logged by the API client and reported to the caller
//! only as a fixed message.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use super::AppState;
use crate::api::DEFAULT_WEEK;
use crate::error::GatewayError;

pub const NOT_AUTHENTICATED_MESSAGE: &str = "Not authenticated. Visit /auth first.";
pub const INVALID_WEEK_MESSAGE: &str = "Invalid week parameter";

type DataResult = Result<Json<Value>, (StatusCode, String)>;

#[derive(Debug, Deserialize)]
pub struct MatchupsQuery {
    pub week: Option<String>,
}

fn unauthenticated() -> (StatusCode, String) {
    (StatusCode::UNAUTHORIZED, NOT_AUTHENTICATED_MESSAGE.to_string())
}

fn relay(result: crate::error::Result<Value>, failure: &str) -> DataResult {
    match result {
        Ok(body) => Ok(Json(body)),
        Err(GatewayError::Unauthenticated) => Err(unauthenticated()),
        Err(e) => {
            // Upstream failures were already logged by the API client.
            if !e.is_upstream() {
                tracing::error!("[ERROR] {}: {}", failure, e);
            }
            Err((StatusCode::INTERNAL_SERVER_ERROR, failure.to_string()))
        }
    }
}

/// GET /test
pub async fn user_games(State(state): State<Arc<AppState>>) -> DataResult {
    let Some(token) = state.session.get().await else {
        return Err(unauthenticated());
    };
    relay(state.api.user_games(Some(&token)).await, "Failed to fetch user games")
}

/// GET /nhl-leagues
pub async fn nhl_leagues(State(state): State<Arc<AppState>>) -> DataResult {
    let Some(token) = state.session.get().await else {
        return Err(unauthenticated());
    };
    relay(state.api.nhl_leagues(Some(&token)).await, "Failed to fetch NHL leagues")
}

/// GET /nhl-matchups?week=
pub async fn nhl_matchups(
    State(state): State<Arc<AppState>>,
    query: Result<Query<MatchupsQuery>, QueryRejection>,
) -> DataResult {
    let Some(token) = state.session.get().await else {
        return Err(unauthenticated());
    };
    let Query(query) = query.map_err(|e| {
        tracing::warn!("[WARN] Rejected matchups query: {}", e);
        (StatusCode::BAD_REQUEST, INVALID_WEEK_MESSAGE.to_string())
    })?;
    let week = query.week.filter(|w| !w.is_empty());
    let week = week.as_deref().unwrap_or(DEFAULT_WEEK);
    relay(state.api.nhl_matchups(Some(&token), week).await, "Failed to fetch NHL matchups")
}

/// GET /nhl-teams
pub async fn nhl_teams(State(state): State<Arc<AppState>>) -> DataResult {
    let Some(token) = state.session.get().await else {
        return Err(unauthenticated());
    };
    relay(state.api.nhl_teams(Some(&token)).await, "Failed to fetch NHL teams")
}
