mod config;
mod db;
mod documents;
mod errors;
mod models;
mod references;
mod render;
mod routes;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::render::pdf::{ChromiumRenderer, PdfRenderer};
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::PhotoStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Malumotnoma API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Photo store on local disk
    let photos = PhotoStore::new(config.photo_dir.clone());
    info!("Photo store at {}", config.photo_dir.display());

    // PDF backend (Chromium print pipeline — swap via the PdfRenderer trait)
    let renderer: Arc<dyn PdfRenderer> = Arc::new(ChromiumRenderer::new(config.chrome_binary.clone()));
    info!("PDF renderer initialized (Chromium backend)");

    // Label table for the composer
    let labels = config.label_variant.labels();
    info!("Label variant: {}", labels.locale);

    // Build app state
    let state = AppState {
        db,
        photos,
        renderer,
        labels,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
