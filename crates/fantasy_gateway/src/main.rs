// Fantasy Gateway Server
//
// Local HTTPS service that walks the browser through the Yahoo OAuth flow
// and proxies a few Fantasy Sports API calls with the resulting token

use fantasy_gateway::{start_server, GatewayConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fantasy_gateway=info,tower_http=info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match GatewayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("[ERROR] {}", e);
            tracing::error!(
                "[ERROR] Set YAHOO_CLIENT_ID and YAHOO_CLIENT_SECRET (environment or .env)"
            );
            std::process::exit(1);
        }
    };

    tracing::info!("[OK] Yahoo OAuth configured: {}", config.oauth.client_id);
    tracing::info!("[OK] Redirect URI: {}", config.oauth.redirect_uri);

    start_server(config).await?;

    Ok(())
}
