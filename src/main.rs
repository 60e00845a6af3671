use std::sync::Arc;

use forecast_relay::app::{self, AppState};
use forecast_relay::config::RelayConfig;
use tracing::info;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("forecast_relay=debug,tower_http=info")
            }),
        )
        .init();

    let config = RelayConfig::from_env();
    info!(webhook_url = %config.webhook_url, "forecast relay starting");

    let state = Arc::new(AppState::new(&config));
    let app = app::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind TCP listener");

    info!("relay listening at http://localhost:{}", config.port);
    axum::serve(listener, app)
        .await
        .expect("server runtime failure");
}
