//! Pokedex-RS: a Pokédex catalog aggregator backed by PokéAPI
//!
//! This is the main entry point for the application.

use anyhow::Result;
use pokedex_rs::{
    config,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let settings_path = config::locate();
    let settings = config::load_from(settings_path.as_deref())?;

    // Initialize logging
    let level = if settings.general.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .init();

    info!("Starting Pokedex-RS v{}", pokedex_rs::VERSION);
    match settings_path {
        Some(path) => info!("Loaded settings from: {}", path.display()),
        None => info!("No settings file found, using defaults"),
    }
    info!(
        "Catalog: {} ({} entries)",
        settings.catalog.base_url, settings.catalog.count
    );

    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    // Create application state
    let state = AppState::from_settings(settings)?;

    // First aggregation run; the list endpoint reports "loading" until it settles
    let loader = state.clone();
    tokio::spawn(async move {
        loader.reload().await;
    });

    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
