use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use product_service::category::HttpCategoryDirectory;
use product_service::config::AppConfig;
use product_service::database::init_db;
use product_service::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let config = AppConfig::load().context("Failed to load config")?;

    let db = init_db(&config.database)
        .await
        .context("Failed to initialize database")?;
    let categories =
        HttpCategoryDirectory::new(&config.category).context("Failed to build HTTP client")?;

    info!(
        category_service = %config.category.base_url,
        on_unknown = ?config.category.on_unknown,
        "Category service configured"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let instance_id = config.server.instance_id.clone();

    let state = AppState {
        db: db.clone(),
        categories: Arc::new(categories),
        config,
    };
    let app = product_service::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, instance = %instance_id, "Product service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down, closing database pool");
    db.close().await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
