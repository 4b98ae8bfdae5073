//! Video List Sample Application Entry Point

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use video_api::api::create_router;
use video_api::infrastructure::{AppConfig, AppDependencies};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,video_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Video List Sample Application...");

    let config = AppConfig::from_env().inspect_err(|error| {
        tracing::error!("Failed to load configuration from environment: {error}");
    })?;
    tracing::info!(
        "Configuration loaded: host={}, port={}, flakiness={}%",
        config.app_host,
        config.app_port,
        config.flakiness_percentage
    );

    let bind_address = format!("{}:{}", config.app_host, config.app_port);
    let dependencies = AppDependencies::from_config(config)?;

    let app = create_router(dependencies).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("Video List Sample Application started on http://{bind_address}");
    tracing::info!("Available endpoints:");
    tracing::info!("  GET  /{{session}}/videos - List videos");
    tracing::info!("  POST /{{session}}/video  - Add video");
    tracing::info!("  GET  /health           - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Video List Sample Application stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for CTRL+C: {error}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
