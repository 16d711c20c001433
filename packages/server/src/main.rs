use anyhow::Context;
use tracing::{Level, info};

use registration_server::config::AppConfig;
use registration_server::state::AppState;
use registration_server::{build_router, seed, store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let stores = store::connect(&config.storage)
        .await
        .context("Failed to open registration store")?;
    seed::seed_admin(stores.users.as_ref(), &config.admin)
        .await
        .context("Failed to seed admin account")?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_router(AppState::new(stores, config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
