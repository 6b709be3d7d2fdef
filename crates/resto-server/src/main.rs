use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use resto_core::JwtKeys;
use resto_db::{Database, DatabaseConfig};
use resto_server::config::ServerConfig;
use resto_server::routes;
use resto_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("resto=info".parse()?))
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;
    tracing::info!(database = %db_config.redacted_url(), "Connecting to database");

    let db = Database::connect(&db_config).await?;
    db.migrate().await?;

    let state = Arc::new(AppState::new(db, JwtKeys::new(&config.jwt)));

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.bind_addr();
    tracing::info!("Starting server on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
