//! Gateway configuration
//!
//! Everything is read from the environment (optionally seeded from a `.env`
//! file by the binary). Client credentials are mandatory; the rest has
//! defaults suitable for a local development session.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::auth::OAuthConfig;
use crate::error::{GatewayError, Result};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_TLS_KEY_PATH: &str = "key.pem";
pub const DEFAULT_TLS_CERT_PATH: &str = "cert.pem";
pub const DEFAULT_AUTH_URL: &str = "https://api.login.yahoo.com/oauth2/request_auth";
pub const DEFAULT_TOKEN_URL: &str = "https://api.login.yahoo.com/oauth2/get_token";
pub const DEFAULT_API_BASE: &str = "https://fantasysports.yahooapis.com/fantasy/v2";

/// HTTPS listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub tls_key_path: PathBuf,
    pub tls_cert_path: PathBuf,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                GatewayError::Config(format!(
                    "Invalid listen address {}:{}: {}",
                    self.host, self.port, e
                ))
            })
    }

    /// Local URL of the authorization entry point
    pub fn auth_entry_url(&self) -> String {
        format!("https://localhost:{}/auth", self.port)
    }
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub oauth: OAuthConfig,
    pub server: ServerConfig,
    /// Base URL of the fantasy data API, without trailing slash
    pub api_base: String,
    /// Launch the system browser on `/auth` after startup
    pub open_browser: bool,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let required = |key: &str| {
            get(key).ok_or_else(|| {
                GatewayError::Config(format!("{} environment variable not set", key))
            })
        };
        let client_id = required("YAHOO_CLIENT_ID")?;
        let client_secret = required("YAHOO_CLIENT_SECRET")?;
        let or_default = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| GatewayError::Config(format!("Invalid PORT '{}': {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        let open_browser = match get("OPEN_BROWSER") {
            Some(raw) => !matches!(
                raw.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            ),
            None => true,
        };

        let server = ServerConfig {
            host: or_default("HOST", DEFAULT_HOST),
            port,
            tls_key_path: PathBuf::from(or_default("TLS_KEY_PATH", DEFAULT_TLS_KEY_PATH)),
            tls_cert_path: PathBuf::from(or_default("TLS_CERT_PATH", DEFAULT_TLS_CERT_PATH)),
        };

        let oauth = OAuthConfig {
            client_id,
            client_secret,
            auth_url: or_default("YAHOO_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: or_default("YAHOO_TOKEN_URL", DEFAULT_TOKEN_URL),
            redirect_uri: format!("https://localhost:{}/callback", port),
        };

        let api_base = or_default("YAHOO_API_BASE", DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            oauth,
            server,
            api_base,
            open_browser,
        })
    }
}
