//! Transactional persistence for the document aggregate.
//!
//! Writes are all-or-nothing: the document row and every child row commit
//! together or not at all. Child collections use full-replace semantics on
//! update (delete-all-then-reinsert) — an explicit policy, not a diff.
//! A photo file stored ahead of a failed transaction is removed again so
//! rollbacks never leave orphaned files.

use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::info;
use uuid::Uuid;

use crate::documents::models::{
    normalized, CreateDocumentRequest, DocumentStatus, EducationRecordInput, PersonalInformationInput,
    PhotoUpload, RelativeInput, UpdateDocumentRequest, WorkExperienceInput,
};
use crate::documents::validation;
use crate::errors::AppError;
use crate::models::document::{
    DocumentAggregate, DocumentRow, EducationRecordRow, PersonalInformationRow, RelativeRow,
    WorkExperienceRow,
};
use crate::storage::PhotoStore;

// ────────────────────────────────────────────────────────────────────────────
// Loader
// ────────────────────────────────────────────────────────────────────────────

/// Fetches a document owned by `user_id` together with all child records.
/// Ownership is part of the lookup: someone else's document and a missing
/// document produce the same `NotFound`.
pub async fn load_aggregate(
    pool: &PgPool,
    document_id: Uuid,
    user_id: Uuid,
) -> Result<DocumentAggregate, AppError> {
    let document = fetch_document(pool, document_id, user_id).await?;
    load_children(pool, document).await
}

/// Returns all of a user's documents as full aggregates, newest first.
pub async fn list_documents(pool: &PgPool, user_id: Uuid) -> Result<Vec<DocumentAggregate>, AppError> {
    let documents: Vec<DocumentRow> = sqlx::query_as(
        "SELECT * FROM documents WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    let mut aggregates = Vec::with_capacity(documents.len());
    for document in documents {
        aggregates.push(load_children(pool, document).await?);
    }
    Ok(aggregates)
}

async fn fetch_document(
    pool: &PgPool,
    document_id: Uuid,
    user_id: Uuid,
) -> Result<DocumentRow, AppError> {
    let document: Option<DocumentRow> =
        sqlx::query_as("SELECT * FROM documents WHERE id = $1 AND user_id = $2")
            .bind(document_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

    document.ok_or_else(|| AppError::NotFound("Document not found".to_string()))
}

async fn load_children(pool: &PgPool, document: DocumentRow) -> Result<DocumentAggregate, AppError> {
    let personal_information: Option<PersonalInformationRow> =
        sqlx::query_as("SELECT * FROM personal_information WHERE document_id = $1")
            .bind(document.id)
            .fetch_optional(pool)
            .await?;

    let education_records: Vec<EducationRecordRow> = sqlx::query_as(
        "SELECT * FROM education_records WHERE document_id = $1 ORDER BY order_index",
    )
    .bind(document.id)
    .fetch_all(pool)
    .await?;

    let relatives: Vec<RelativeRow> =
        sqlx::query_as("SELECT * FROM relatives WHERE document_id = $1 ORDER BY order_index")
            .bind(document.id)
            .fetch_all(pool)
            .await?;

    let work_experiences: Vec<WorkExperienceRow> = sqlx::query_as(
        "SELECT * FROM work_experiences WHERE document_id = $1 ORDER BY order_index",
    )
    .bind(document.id)
    .fetch_all(pool)
    .await?;

    Ok(DocumentAggregate {
        document,
        personal_information,
        education_records,
        relatives,
        work_experiences,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Create
// ────────────────────────────────────────────────────────────────────────────

pub async fn create_document(
    pool: &PgPool,
    photos: &PhotoStore,
    req: &CreateDocumentRequest,
    photo: Option<&PhotoUpload>,
) -> Result<DocumentAggregate, AppError> {
    let photo_path = match photo {
        Some(p) => Some(photos.store(&p.bytes, p.extension())?),
        None => None,
    };

    match create_in_tx(pool, req, photo_path.as_deref()).await {
        Ok(document_id) => {
            info!("Created document {document_id} for user {}", req.user_id);
            load_aggregate(pool, document_id, req.user_id).await
        }
        Err(e) => {
            // A failed write must not leave the photo file behind.
            if let Some(path) = &photo_path {
                photos.remove(path);
            }
            Err(e)
        }
    }
}

async fn create_in_tx(
    pool: &PgPool,
    req: &CreateDocumentRequest,
    photo_path: Option<&str>,
) -> Result<Uuid, AppError> {
    let mut tx = pool.begin().await?;

    let document_id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO documents (id, user_id, document_type, status) VALUES ($1, $2, $3, $4)",
    )
    .bind(document_id)
    .bind(req.user_id)
    .bind(&req.document_type)
    .bind(DocumentStatus::Draft.as_str())
    .execute(&mut *tx)
    .await?;

    insert_personal_information(&mut tx, document_id, &req.personal_information, photo_path)
        .await?;
    insert_education_records(&mut tx, document_id, &req.education_records).await?;
    insert_relatives(&mut tx, document_id, &req.relatives).await?;
    insert_work_experiences(&mut tx, document_id, &req.work_experiences).await?;

    tx.commit().await?;
    Ok(document_id)
}

// ────────────────────────────────────────────────────────────────────────────
// Update
// ────────────────────────────────────────────────────────────────────────────

pub async fn update_document(
    pool: &PgPool,
    photos: &PhotoStore,
    document_id: Uuid,
    req: &UpdateDocumentRequest,
    photo: Option<&PhotoUpload>,
) -> Result<DocumentAggregate, AppError> {
    let document = fetch_document(pool, document_id, req.user_id).await?;
    let old_photo_path = fetch_photo_path(pool, document_id).await?;

    let new_photo_path = match photo {
        Some(p) => Some(photos.store(&p.bytes, p.extension())?),
        None => None,
    };

    match update_in_tx(pool, &document, req, new_photo_path.as_deref()).await {
        Ok(()) => {
            if new_photo_path.is_some() {
                // The replaced file is unreferenced once the new path committed.
                if let Some(old) = old_photo_path {
                    photos.remove(&old);
                }
            }
            info!("Updated document {document_id} for user {}", req.user_id);
            load_aggregate(pool, document_id, req.user_id).await
        }
        Err(e) => {
            if let Some(path) = &new_photo_path {
                photos.remove(path);
            }
            Err(e)
        }
    }
}

async fn update_in_tx(
    pool: &PgPool,
    document: &DocumentRow,
    req: &UpdateDocumentRequest,
    new_photo_path: Option<&str>,
) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    if req.document_type.is_some() || req.status.is_some() {
        sqlx::query(
            r#"
            UPDATE documents
            SET document_type = COALESCE($2, document_type),
                status = COALESCE($3, status),
                updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(document.id)
        .bind(&req.document_type)
        .bind(&req.status)
        .execute(&mut *tx)
        .await?;
    }

    if let Some(pi) = &req.personal_information {
        update_personal_information(&mut tx, document.id, pi, new_photo_path).await?;
    } else if let Some(path) = new_photo_path {
        sqlx::query(
            "UPDATE personal_information SET photo_path = $2, updated_at = now() WHERE document_id = $1",
        )
        .bind(document.id)
        .bind(path)
        .execute(&mut *tx)
        .await?;
    }

    if let Some(records) = &req.education_records {
        sqlx::query("DELETE FROM education_records WHERE document_id = $1")
            .bind(document.id)
            .execute(&mut *tx)
            .await?;
        insert_education_records(&mut tx, document.id, records).await?;
    }

    if let Some(relatives) = &req.relatives {
        sqlx::query("DELETE FROM relatives WHERE document_id = $1")
            .bind(document.id)
            .execute(&mut *tx)
            .await?;
        insert_relatives(&mut tx, document.id, relatives).await?;
    }

    if let Some(work) = &req.work_experiences {
        sqlx::query("DELETE FROM work_experiences WHERE document_id = $1")
            .bind(document.id)
            .execute(&mut *tx)
            .await?;
        insert_work_experiences(&mut tx, document.id, work).await?;
    }

    // A manual switch to 'completed' requires the full aggregate to exist
    // in the post-write state; failing the check rolls everything back.
    if req.status.as_deref() == Some(DocumentStatus::Completed.as_str()) {
        ensure_complete(&mut tx, document.id).await?;
    }

    tx.commit().await?;
    Ok(())
}

async fn ensure_complete(
    tx: &mut Transaction<'_, Postgres>,
    document_id: Uuid,
) -> Result<(), AppError> {
    let personal = count_children(tx, "personal_information", document_id).await?;
    let education = count_children(tx, "education_records", document_id).await?;
    let relatives = count_children(tx, "relatives", document_id).await?;
    let work = count_children(tx, "work_experiences", document_id).await?;

    if personal == 0 || education == 0 || relatives == 0 || work == 0 {
        return Err(AppError::validation(
            "status",
            "All required data is not present.",
        ));
    }
    Ok(())
}

async fn count_children(
    tx: &mut Transaction<'_, Postgres>,
    table: &str,
    document_id: Uuid,
) -> Result<i64, AppError> {
    // `table` is one of four fixed names above, never user input.
    let count: i64 = sqlx::query_scalar(&format!(
        "SELECT COUNT(*) FROM {table} WHERE document_id = $1"
    ))
    .bind(document_id)
    .fetch_one(&mut **tx)
    .await?;
    Ok(count)
}

// ────────────────────────────────────────────────────────────────────────────
// Delete / status transition
// ────────────────────────────────────────────────────────────────────────────

/// Deletes a document and (via foreign keys) all child rows, then removes
/// the stored photo file.
pub async fn delete_document(
    pool: &PgPool,
    photos: &PhotoStore,
    document_id: Uuid,
    user_id: Uuid,
) -> Result<(), AppError> {
    fetch_document(pool, document_id, user_id).await?;
    let photo_path = fetch_photo_path(pool, document_id).await?;

    sqlx::query("DELETE FROM documents WHERE id = $1 AND user_id = $2")
        .bind(document_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if let Some(path) = photo_path {
        photos.remove(&path);
    }

    info!("Deleted document {document_id} for user {user_id}");
    Ok(())
}

/// Flips draft → completed. The WHERE clause keeps the transition
/// idempotent: an already-completed document is left untouched.
pub async fn mark_completed(pool: &PgPool, document_id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query(
        "UPDATE documents SET status = $2, updated_at = now() WHERE id = $1 AND status = $3",
    )
    .bind(document_id)
    .bind(DocumentStatus::Completed.as_str())
    .bind(DocumentStatus::Draft.as_str())
    .execute(pool)
    .await?;

    if result.rows_affected() > 0 {
        info!("Document {document_id} marked completed");
    }
    Ok(())
}

async fn fetch_photo_path(pool: &PgPool, document_id: Uuid) -> Result<Option<String>, AppError> {
    let path: Option<Option<String>> =
        sqlx::query_scalar("SELECT photo_path FROM personal_information WHERE document_id = $1")
            .bind(document_id)
            .fetch_optional(pool)
            .await?;
    Ok(path.flatten())
}

// ────────────────────────────────────────────────────────────────────────────
// Child inserts
// ────────────────────────────────────────────────────────────────────────────

async fn insert_personal_information(
    tx: &mut Transaction<'_, Postgres>,
    document_id: Uuid,
    pi: &PersonalInformationInput,
    photo_path: Option<&str>,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO personal_information
            (id, document_id, familya, ism, sharif, photo_path,
             joriy_lavozim_sanasi, joriy_lavozim_toliq,
             tugilgan_sana, tugilgan_joyi, millati, partiyaviyligi, xalq_deputatlari)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(document_id)
    .bind(&pi.familya)
    .bind(&pi.ism)
    .bind(&pi.sharif)
    .bind(photo_path)
    .bind(normalized(&pi.joriy_lavozim_sanasi))
    .bind(normalized(&pi.joriy_lavozim_toliq))
    .bind(date_field(&pi.tugilgan_sana, "personal_information.tugilgan_sana")?)
    .bind(&pi.tugilgan_joyi)
    .bind(&pi.millati)
    .bind(normalized(&pi.partiyaviyligi))
    .bind(normalized(&pi.xalq_deputatlari))
    .execute(&mut **tx)
    .await?;
    Ok(())
}

async fn update_personal_information(
    tx: &mut Transaction<'_, Postgres>,
    document_id: Uuid,
    pi: &PersonalInformationInput,
    photo_path: Option<&str>,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        UPDATE personal_information
        SET familya = $2, ism = $3, sharif = $4,
            joriy_lavozim_sanasi = $5, joriy_lavozim_toliq = $6,
            tugilgan_sana = $7, tugilgan_joyi = $8, millati = $9,
            partiyaviyligi = $10, xalq_deputatlari = $11,
            photo_path = COALESCE($12, photo_path),
            updated_at = now()
        WHERE document_id = $1
        "#,
    )
    .bind(document_id)
    .bind(&pi.familya)
    .bind(&pi.ism)
    .bind(&pi.sharif)
    .bind(normalized(&pi.joriy_lavozim_sanasi))
    .bind(normalized(&pi.joriy_lavozim_toliq))
    .bind(date_field(&pi.tugilgan_sana, "personal_information.tugilgan_sana")?)
    .bind(&pi.tugilgan_joyi)
    .bind(&pi.millati)
    .bind(normalized(&pi.partiyaviyligi))
    .bind(normalized(&pi.xalq_deputatlari))
    .bind(photo_path)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

async fn insert_education_records(
    tx: &mut Transaction<'_, Postgres>,
    document_id: Uuid,
    records: &[EducationRecordInput],
) -> Result<(), AppError> {
    for (i, rec) in records.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO education_records
                (id, document_id, malumoti, tamomlagan, mutaxassisligi,
                 ilmiy_daraja, ilmiy_unvoni, chet_tillari, maxsus_unvoni,
                 davlat_mukofoti, order_index)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(document_id)
        .bind(&rec.malumoti)
        .bind(normalized(&rec.tamomlagan))
        .bind(normalized(&rec.mutaxassisligi))
        .bind(normalized(&rec.ilmiy_daraja))
        .bind(normalized(&rec.ilmiy_unvoni))
        .bind(normalized(&rec.chet_tillari))
        .bind(normalized(&rec.maxsus_unvoni))
        .bind(normalized(&rec.davlat_mukofoti))
        .bind(i as i32)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn insert_relatives(
    tx: &mut Transaction<'_, Postgres>,
    document_id: Uuid,
    relatives: &[RelativeInput],
) -> Result<(), AppError> {
    for (i, rel) in relatives.iter().enumerate() {
        let (ish_joyi, turar_joyi, vafot_etgan_yili, kasbi) = normalized_relative_fields(rel);
        sqlx::query(
            r#"
            INSERT INTO relatives
                (id, document_id, qarindoshligi, fio, tugilgan, vafot_etgan,
                 ish_joyi, turar_joyi, vafot_etgan_yili, kasbi, order_index)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(document_id)
        .bind(&rel.qarindoshligi)
        .bind(&rel.fio)
        .bind(&rel.tugilgan)
        .bind(rel.vafot_etgan)
        .bind(ish_joyi)
        .bind(turar_joyi)
        .bind(vafot_etgan_yili)
        .bind(kasbi)
        .bind(i as i32)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn insert_work_experiences(
    tx: &mut Transaction<'_, Postgres>,
    document_id: Uuid,
    work: &[WorkExperienceInput],
) -> Result<(), AppError> {
    for (i, entry) in work.iter().enumerate() {
        let field = format!("work_experiences.{i}.start_date");
        let start_date = date_field(&entry.start_date, &field)?;
        let end_date = match normalized(&entry.end_date) {
            Some(end) => Some(date_field(&end, &format!("work_experiences.{i}.end_date"))?),
            None => None,
        };
        sqlx::query(
            r#"
            INSERT INTO work_experiences
                (id, document_id, start_date, end_date, info, order_index)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(document_id)
        .bind(start_date)
        .bind(end_date)
        .bind(&entry.info)
        .bind(i as i32)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

/// Applies the deceased-exclusivity rule at write time: exactly one of the
/// {workplace, residence} / {year-of-death, occupation} pairs survives,
/// matching the flag, regardless of what the payload carried.
pub(crate) fn normalized_relative_fields(
    rel: &RelativeInput,
) -> (
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
) {
    if rel.vafot_etgan {
        (
            None,
            None,
            normalized(&rel.vafot_etgan_yili),
            normalized(&rel.kasbi),
        )
    } else {
        (
            normalized(&rel.ish_joyi),
            normalized(&rel.turar_joyi),
            None,
            None,
        )
    }
}

fn date_field(value: &str, field: &str) -> Result<NaiveDate, AppError> {
    validation::parse_date(value).ok_or_else(|| {
        AppError::validation(
            field.to_string(),
            format!("The {field} field must be a valid date (YYYY-MM-DD)."),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative(vafot_etgan: bool) -> RelativeInput {
        RelativeInput {
            qarindoshligi: "Onasi".to_string(),
            fio: "Каримова Ойша".to_string(),
            tugilgan: "1945 йил, Бухоро".to_string(),
            vafot_etgan,
            ish_joyi: Some("уй бекаси".to_string()),
            turar_joyi: Some("Бухоро шаҳри".to_string()),
            vafot_etgan_yili: Some("2010".to_string()),
            kasbi: Some("деҳқон".to_string()),
        }
    }

    #[test]
    fn test_deceased_relative_drops_workplace_and_residence() {
        let (ish_joyi, turar_joyi, yili, kasbi) = normalized_relative_fields(&relative(true));
        assert!(ish_joyi.is_none());
        assert!(turar_joyi.is_none());
        assert_eq!(yili.as_deref(), Some("2010"));
        assert_eq!(kasbi.as_deref(), Some("деҳқон"));
    }

    #[test]
    fn test_living_relative_drops_death_fields() {
        let (ish_joyi, turar_joyi, yili, kasbi) = normalized_relative_fields(&relative(false));
        assert_eq!(ish_joyi.as_deref(), Some("уй бекаси"));
        assert_eq!(turar_joyi.as_deref(), Some("Бухоро шаҳри"));
        assert!(yili.is_none());
        assert!(kasbi.is_none());
    }

    #[test]
    fn test_date_field_reports_the_failing_field() {
        let err = date_field("not-a-date", "work_experiences.0.start_date").unwrap_err();
        match err {
            AppError::Validation(fields) => {
                assert_eq!(fields[0].field, "work_experiences.0.start_date");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
