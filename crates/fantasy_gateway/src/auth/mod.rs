//! OAuth authorization code flow and session token storage

pub mod oauth;
pub mod token_store;

pub use oauth::{OAuthClient, OAuthConfig};
pub use token_store::{SessionStore, SessionToken};
