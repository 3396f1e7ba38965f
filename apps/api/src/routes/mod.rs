pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};

use crate::documents::handlers as documents;
use crate::references::handlers as references;
use crate::render::handlers as render;
use crate::state::AppState;

/// Multipart bodies carry a photo of up to 5 MB plus the JSON payload.
const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Documents
        .route(
            "/api/v1/documents",
            get(documents::handle_list_documents).post(documents::handle_create_document),
        )
        .route(
            "/api/v1/documents/:id",
            get(documents::handle_get_document)
                .put(documents::handle_update_document)
                .delete(documents::handle_delete_document),
        )
        .route(
            "/api/v1/documents/:id/download",
            get(render::handle_download_document),
        )
        // References
        .route(
            "/api/v1/references",
            get(references::handle_list_references).post(references::handle_create_reference),
        )
        .route(
            "/api/v1/references/:id",
            get(references::handle_get_reference)
                .put(references::handle_update_reference)
                .delete(references::handle_delete_reference),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
