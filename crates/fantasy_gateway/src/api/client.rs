use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde_json::Value;
use tracing::{debug, error, info};

use super::leagues::{first_league, LeagueSummary};
use crate::auth::SessionToken;
use crate::error::{GatewayError, Result};

/// Week selector used when the caller does not ask for a specific week
pub const DEFAULT_WEEK: &str = "current";

/// Client for the fantasy data API, authenticated with the session's bearer token
#[derive(Clone)]
pub struct FantasyApiClient {
    http_client: reqwest::Client,
    api_base: String,
}

impl FantasyApiClient {
    pub fn new(http_client: reqwest::Client, api_base: impl Into<String>) -> Self {
        Self {
            http_client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn user_games_url(&self) -> String {
        format!("{}/users;use_login=1/games?format=json", self.api_base)
    }

    pub fn nhl_leagues_url(&self) -> String {
        format!("{}/users;use_login=1/games;game_keys=nhl/leagues?format=json", self.api_base)
    }

    pub fn scoreboard_url(&self, league_key: &str, week: &str) -> String {
        let week: String = url::form_urlencoded::byte_serialize(week.as_bytes()).collect();
        format!("{}/league/{}/scoreboard;week={}?format=json", self.api_base, league_key, week)
    }

    pub fn teams_url(&self, league_key: &str) -> String {
        format!("{}/league/{}/teams?format=json", self.api_base, league_key)
    }

    /// GET `url` with the bearer token and return the parsed JSON body.
    ///
    /// Without a token this fails with [`GatewayError::Unauthenticated`] and
    /// no request is sent. Failures are logged here and handed back to the
    /// caller unchanged.
    pub async fn get_json(&self, token: Option<&SessionToken>, url: &str) -> Result<Value> {
        let token = token.ok_or(GatewayError::Unauthenticated)?;

        debug!("Fetching {}", url);
        let result = self.send(token, url).await;
        if let Err(ref e) = result {
            error!("[ERROR] Request to {} failed: {}", url, e);
        }
        result
    }

    async fn send(&self, token: &SessionToken, url: &str) -> Result<Value> {
        let response = self
            .http_client
            .get(url)
            .header(AUTHORIZATION, token.bearer_header())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Upstream { status, body });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }

    pub async fn user_games(&self, token: Option<&SessionToken>) -> Result<Value> {
        self.get_json(token, &self.user_games_url()).await
    }

    pub async fn nhl_leagues(&self, token: Option<&SessionToken>) -> Result<Value> {
        self.get_json(token, &self.nhl_leagues_url()).await
    }

    /// League the matchup and team lookups are scoped to
    pub async fn primary_nhl_league(&self, token: Option<&SessionToken>) -> Result<LeagueSummary> {
        let leagues = self.nhl_leagues(token).await?;
        let league = first_league(&leagues).inspect_err(|e| error!("[ERROR] {}", e))?;
        info!(
            "[INFO] Using league {} ({})",
            league.league_key,
            league.name.as_deref().unwrap_or("unnamed")
        );
        Ok(league)
    }

    pub async fn nhl_matchups(&self, token: Option<&SessionToken>, week: &str) -> Result<Value> {
        let league = self.primary_nhl_league(token).await?;
        self.get_json(token, &self.scoreboard_url(&league.league_key, week)).await
    }

    pub async fn nhl_teams(&self, token: Option<&SessionToken>) -> Result<Value> {
        let league = self.primary_nhl_league(token).await?;
        self.get_json(token, &self.teams_url(&league.league_key)).await
    }
}
