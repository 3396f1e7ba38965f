use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use crate::documents::handlers::UserIdQuery;
use crate::documents::models::DocumentStatus;
use crate::documents::store::{load_aggregate, mark_completed};
use crate::errors::AppError;
use crate::models::document::PersonalInformationRow;
use crate::render::composer::compose_document_html;
use crate::render::photo::embed_photo;
use crate::state::AppState;

/// GET /api/v1/documents/:id/download
///
/// Load → embed photo → compose → render → flip status. The draft →
/// completed transition happens only after the renderer returns bytes, so
/// a failed or timed-out render leaves the draft untouched. Downloading an
/// already-completed document changes nothing.
pub async fn handle_download_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Response, AppError> {
    let aggregate = load_aggregate(&state.db, id, params.user_id).await?;

    let photo = embed_photo(
        &state.photos,
        aggregate
            .personal_information
            .as_ref()
            .and_then(|pi| pi.photo_path.as_deref()),
        state.labels.photo_box,
    );

    let html = compose_document_html(&aggregate, state.labels, photo.as_ref());

    let pdf = tokio::time::timeout(state.config.render_timeout, state.renderer.render(html))
        .await
        .map_err(|_| AppError::RenderTimeout)??;

    if aggregate.document.status == DocumentStatus::Draft.as_str() {
        mark_completed(&state.db, id).await?;
    }

    let filename = download_filename(
        aggregate.personal_information.as_ref(),
        Utc::now().date_naive(),
    );
    info!(
        "Rendered document {id} for user {} ({} bytes)",
        params.user_id,
        pdf.len()
    );

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, pdf).into_response())
}

/// Attachment filename: `Malumotnoma_<familya>_<ism>_<YYYY-MM-DD>.pdf`,
/// sanitized for header safety. The date lives here, outside the markup,
/// so composition itself stays deterministic.
pub fn download_filename(pi: Option<&PersonalInformationRow>, date: NaiveDate) -> String {
    let stem = match pi {
        Some(pi) => format!("Malumotnoma_{}_{}", pi.familya, pi.ism),
        None => "Malumotnoma_document".to_string(),
    };
    sanitize_filename(&format!("{stem}_{}.pdf", date.format("%Y-%m-%d")))
}

/// Maps every character outside `[A-Za-z0-9_.-]` to `_`.
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn personal_information(familya: &str, ism: &str) -> PersonalInformationRow {
        let ts = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        PersonalInformationRow {
            id: Uuid::nil(),
            document_id: Uuid::nil(),
            familya: familya.to_string(),
            ism: ism.to_string(),
            sharif: "Тошевич".to_string(),
            photo_path: None,
            joriy_lavozim_sanasi: None,
            joriy_lavozim_toliq: None,
            tugilgan_sana: NaiveDate::from_ymd_opt(1975, 3, 14).unwrap(),
            tugilgan_joyi: "Самарқанд".to_string(),
            millati: "ўзбек".to_string(),
            partiyaviyligi: None,
            xalq_deputatlari: None,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn test_filename_with_ascii_name() {
        let pi = personal_information("Karimov", "Anvar");
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_eq!(
            download_filename(Some(&pi), date),
            "Malumotnoma_Karimov_Anvar_2026-01-15.pdf"
        );
    }

    #[test]
    fn test_filename_sanitizes_non_ascii() {
        let pi = personal_information("Каримов", "Анвар");
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let name = download_filename(Some(&pi), date);
        assert!(name.ends_with("_2026-01-15.pdf"));
        assert!(name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.'));
    }

    #[test]
    fn test_filename_without_personal_information() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_eq!(
            download_filename(None, date),
            "Malumotnoma_document_2026-01-15.pdf"
        );
    }

    #[test]
    fn test_sanitize_replaces_spaces_and_slashes() {
        assert_eq!(sanitize_filename("a b/c\\d.pdf"), "a_b_c_d.pdf");
    }
}
