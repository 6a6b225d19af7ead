//! Promocode Validation HTTP Server
//!
//! REST API for registering promocodes and validating them against a
//! requester's age, the current date, and live weather.

use anyhow::Result;
use promo_runtime::OpenWeatherClient;
use promo_server::api;
use promo_server::config::ServerConfig;
use promo_server::store::PromocodeStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing()?;

    // Load configuration
    let config = ServerConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    if config.weather.api_key.is_none() {
        warn!("no weather API key configured; town-based validations will fail");
    }

    // Wire up state
    let store = Arc::new(PromocodeStore::new());
    let weather = Arc::new(OpenWeatherClient::with_base_url(
        config.weather.api_key.clone().unwrap_or_default(),
        config.weather.base_url.clone(),
    ));

    let app = api::create_router(store, weather);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/_healthz", addr);
    info!("  Create promocode: POST http://{}/promocodes", addr);
    info!("  Validate promocode: POST http://{}/promocodes/validate", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "promo_server=info,promo_runtime=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
