mod app;
mod config;
mod dispatch;
mod docs;
mod error;
mod extract;
mod inventory;
mod optimize;
mod request_logging;
mod routes;
mod state;


use std::sync::Arc;

use axum::serve;
use stockroute_inventory::inventory_store::InventoryStore;
use stockroute_maps::route_optimizer::RouteOptimizer;
use tracing::{Level, info};

use crate::app::build_app;
use crate::config::ApiConfig;
use crate::state::AppState;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = ApiConfig::from_env()?;

    let state = Arc::new(AppState {
        inventory: InventoryStore::default(),
        route_optimizer: RouteOptimizer::new(config.route_optimizer_params()),
        dispatch_origin: config.dispatch_origin.clone(),
    });

    let app = build_app(state, config.cors_origin.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_address.as_str()).await?;
    info!("Listening on {}", config.bind_address);

    serve(listener, app).await?;

    Ok(())
}
