use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::render::labels::LabelSet;
use crate::render::pdf::PdfRenderer;
use crate::storage::PhotoStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Filesystem store for uploaded portrait photos.
    pub photos: PhotoStore,
    /// Pluggable PDF backend. Default: ChromiumRenderer. Swapped for a stub in tests.
    pub renderer: Arc<dyn PdfRenderer>,
    /// Label table driving all composer output — selected via LABEL_VARIANT env.
    pub labels: &'static LabelSet,
    pub config: Config,
}
