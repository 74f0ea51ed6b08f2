use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use whipcast_api::{build_app, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before the log filter reads RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "whipcast_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!(
        environment = %config.environment(),
        "Starting Whipcast API server on port {}",
        config.port
    );
    tracing::info!(
        whip_url = %config.stream().whip_url,
        whep_url = %config.stream().whep_url,
        "Channel endpoints configured"
    );

    let app = build_app(&config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
