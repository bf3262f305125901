use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not authenticated: no access token available")]
    Unauthenticated,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {body}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),

    #[error("No league found in response: {0}")]
    LeagueNotFound(String),

    #[error("TLS setup failed: {0}")]
    Tls(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GatewayError {
    /// True for failures caused by the provider or the remote API.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            GatewayError::Http(_)
                | GatewayError::Upstream { .. }
                | GatewayError::InvalidResponse(_)
                | GatewayError::LeagueNotFound(_)
        )
    }
}
