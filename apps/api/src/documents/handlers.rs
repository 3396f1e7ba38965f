use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;

use crate::documents::models::{CreateDocumentRequest, PhotoUpload, UpdateDocumentRequest};
use crate::documents::store;
use crate::documents::validation::{validate_create, validate_photo, validate_update};
use crate::errors::AppError;
use crate::models::document::DocumentAggregate;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// GET /api/v1/documents
pub async fn handle_list_documents(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<DocumentAggregate>>, AppError> {
    let documents = store::list_documents(&state.db, params.user_id).await?;
    Ok(Json(documents))
}

/// POST /api/v1/documents
///
/// Multipart body: a `payload` part holding the JSON create record and an
/// optional `photo` part (JPEG/PNG, ≤ 5 MB).
pub async fn handle_create_document(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<DocumentAggregate>), AppError> {
    let (req, photo) = read_payload::<CreateDocumentRequest>(multipart).await?;

    let mut errors = validate_create(&req);
    if let Some(photo) = &photo {
        errors.extend(validate_photo(photo.content_type.as_deref(), photo.bytes.len()));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let aggregate = store::create_document(&state.db, &state.photos, &req, photo.as_ref()).await?;
    Ok((StatusCode::CREATED, Json(aggregate)))
}

/// GET /api/v1/documents/:id
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<DocumentAggregate>, AppError> {
    let aggregate = store::load_aggregate(&state.db, id, params.user_id).await?;
    Ok(Json(aggregate))
}

/// PUT /api/v1/documents/:id
///
/// Same multipart shape as create, with a partial payload. Child arrays,
/// when present, fully replace the stored collections.
pub async fn handle_update_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<DocumentAggregate>, AppError> {
    let (req, photo) = read_payload::<UpdateDocumentRequest>(multipart).await?;

    let mut errors = validate_update(&req);
    if let Some(photo) = &photo {
        errors.extend(validate_photo(photo.content_type.as_deref(), photo.bytes.len()));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let aggregate =
        store::update_document(&state.db, &state.photos, id, &req, photo.as_ref()).await?;
    Ok(Json(aggregate))
}

/// DELETE /api/v1/documents/:id
pub async fn handle_delete_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    store::delete_document(&state.db, &state.photos, id, params.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Pulls the `payload` JSON part and the optional `photo` part out of a
/// multipart body. Unknown parts are ignored.
async fn read_payload<T: DeserializeOwned>(
    mut multipart: Multipart,
) -> Result<(T, Option<PhotoUpload>), AppError> {
    let mut payload: Option<String> = None;
    let mut photo: Option<PhotoUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation("payload", format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("payload") => {
                let text = field.text().await.map_err(|e| {
                    AppError::validation("payload", format!("Unreadable payload part: {e}"))
                })?;
                payload = Some(text);
            }
            Some("photo") => {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::validation("photo", format!("Unreadable photo part: {e}"))
                })?;
                photo = Some(PhotoUpload {
                    bytes,
                    content_type,
                });
            }
            _ => {}
        }
    }

    let payload = payload
        .ok_or_else(|| AppError::validation("payload", "The payload field is required."))?;
    let req: T = serde_json::from_str(&payload)
        .map_err(|e| AppError::validation("payload", format!("Invalid payload JSON: {e}")))?;

    Ok((req, photo))
}
