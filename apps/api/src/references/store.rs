use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::reference::ReferenceRow;
use crate::references::models::{CreateReferenceRequest, UpdateReferenceRequest};

pub async fn list_references(pool: &PgPool, user_id: Uuid) -> Result<Vec<ReferenceRow>, AppError> {
    Ok(sqlx::query_as(
        "SELECT * FROM reference_entries WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}

pub async fn create_reference(
    pool: &PgPool,
    req: &CreateReferenceRequest,
) -> Result<ReferenceRow, AppError> {
    let id = Uuid::new_v4();
    let row: ReferenceRow = sqlx::query_as(
        r#"
        INSERT INTO reference_entries (id, user_id, title, author, year, reference_type)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(req.user_id)
    .bind(&req.title)
    .bind(&req.author)
    .bind(req.year)
    .bind(&req.reference_type)
    .fetch_one(pool)
    .await?;

    info!("Created reference {id} for user {}", req.user_id);
    Ok(row)
}

pub async fn get_reference(
    pool: &PgPool,
    reference_id: Uuid,
    user_id: Uuid,
) -> Result<ReferenceRow, AppError> {
    let row: Option<ReferenceRow> =
        sqlx::query_as("SELECT * FROM reference_entries WHERE id = $1 AND user_id = $2")
            .bind(reference_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    row.ok_or_else(|| AppError::NotFound("Reference not found".to_string()))
}

pub async fn update_reference(
    pool: &PgPool,
    reference_id: Uuid,
    req: &UpdateReferenceRequest,
) -> Result<ReferenceRow, AppError> {
    get_reference(pool, reference_id, req.user_id).await?;

    let row: ReferenceRow = sqlx::query_as(
        r#"
        UPDATE reference_entries
        SET title = COALESCE($3, title),
            author = COALESCE($4, author),
            year = COALESCE($5, year),
            reference_type = COALESCE($6, reference_type),
            updated_at = now()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(reference_id)
    .bind(req.user_id)
    .bind(&req.title)
    .bind(&req.author)
    .bind(req.year)
    .bind(&req.reference_type)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn delete_reference(
    pool: &PgPool,
    reference_id: Uuid,
    user_id: Uuid,
) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM reference_entries WHERE id = $1 AND user_id = $2")
        .bind(reference_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Reference not found".to_string()));
    }
    info!("Deleted reference {reference_id} for user {user_id}");
    Ok(())
}
