use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{Datelike, Utc};
use uuid::Uuid;

use crate::documents::handlers::UserIdQuery;
use crate::errors::AppError;
use crate::models::reference::ReferenceRow;
use crate::references::models::{CreateReferenceRequest, UpdateReferenceRequest};
use crate::references::store;
use crate::references::validation::{validate_create, validate_update};
use crate::state::AppState;

/// GET /api/v1/references
pub async fn handle_list_references(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ReferenceRow>>, AppError> {
    let references = store::list_references(&state.db, params.user_id).await?;
    Ok(Json(references))
}

/// POST /api/v1/references
pub async fn handle_create_reference(
    State(state): State<AppState>,
    Json(req): Json<CreateReferenceRequest>,
) -> Result<(StatusCode, Json<ReferenceRow>), AppError> {
    let errors = validate_create(&req, Utc::now().year());
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    let reference = store::create_reference(&state.db, &req).await?;
    Ok((StatusCode::CREATED, Json(reference)))
}

/// GET /api/v1/references/:id
pub async fn handle_get_reference(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ReferenceRow>, AppError> {
    let reference = store::get_reference(&state.db, id, params.user_id).await?;
    Ok(Json(reference))
}

/// PUT /api/v1/references/:id
pub async fn handle_update_reference(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateReferenceRequest>,
) -> Result<Json<ReferenceRow>, AppError> {
    let errors = validate_update(&req, Utc::now().year());
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    let reference = store::update_reference(&state.db, id, &req).await?;
    Ok(Json(reference))
}

/// DELETE /api/v1/references/:id
pub async fn handle_delete_reference(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    store::delete_reference(&state.db, id, params.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
