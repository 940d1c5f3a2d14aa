//! Course discovery service entry point.

use anyhow::Context;
use backend::{AppState, build_router, catalog::CatalogSnapshot, config::Config};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Config::parse();
    info!("Starting makers-backend v{}", env!("CARGO_PKG_VERSION"));

    let catalog = CatalogSnapshot::load(&config.catalog_source())
        .await
        .context("failed to load course catalog")?;
    let app = build_router(AppState::new(catalog));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!("makers-backend listening on http://{}", config.bind);

    axum::serve(listener, app).await?;
    Ok(())
}
