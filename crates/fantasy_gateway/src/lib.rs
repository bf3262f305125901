//! Fantasy Gateway Service
//!
//! Local OAuth2 authorization code helper and thin proxy for the Yahoo
//! Fantasy Sports API.
//!
//! # Features
//! - Browser redirect to the provider login and callback code exchange
//! - Single in-memory session token
//! - Pass-through NHL data routes authenticated with the session token
//! - HTTPS listener with PEM key/certificate

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod server;

pub use api::{FantasyApiClient, LeagueSummary};
pub use auth::{OAuthClient, OAuthConfig, SessionStore, SessionToken};
pub use config::{GatewayConfig, ServerConfig};
pub use error::{GatewayError, Result};
pub use server::{build_router, start_server, AppState};
