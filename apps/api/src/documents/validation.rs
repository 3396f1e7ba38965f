//! Boundary validation for document payloads.
//!
//! Explicit field-by-field checks that collect a structured error list; no
//! rule-map indirection. Every check runs before any mutation starts, so a
//! failed request never leaves partial writes behind.

use chrono::NaiveDate;

use crate::documents::models::{
    CreateDocumentRequest, DocumentStatus, DocumentType, EducationLevel, EducationRecordInput,
    PersonalInformationInput, RelativeInput, RelativeType, UpdateDocumentRequest,
    WorkExperienceInput,
};
use crate::errors::FieldError;

/// Upper bound on an uploaded photo, in bytes (5 MB).
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

const MAX_STR: usize = 255;
/// `ish_joyi` and `joriy_lavozim_toliq` carry longer free text.
const MAX_LONG_STR: usize = 500;

pub fn validate_create(req: &CreateDocumentRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    check_enum(
        &mut errors,
        "document_type",
        &req.document_type,
        DocumentType::parse(&req.document_type).is_some(),
        &["obyektivka", "employment_application", "transfer_application"],
    );

    validate_personal_information(&mut errors, &req.personal_information);

    if req.education_records.is_empty() {
        errors.push(required("education_records"));
    }
    for (i, record) in req.education_records.iter().enumerate() {
        validate_education_record(&mut errors, i, record);
    }

    if req.relatives.is_empty() {
        errors.push(required("relatives"));
    }
    for (i, relative) in req.relatives.iter().enumerate() {
        validate_relative(&mut errors, i, relative);
    }

    if req.work_experiences.is_empty() {
        errors.push(required("work_experiences"));
    }
    for (i, work) in req.work_experiences.iter().enumerate() {
        validate_work_experience(&mut errors, i, work);
    }

    errors
}

pub fn validate_update(req: &UpdateDocumentRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if let Some(document_type) = &req.document_type {
        check_enum(
            &mut errors,
            "document_type",
            document_type,
            DocumentType::parse(document_type).is_some(),
            &["obyektivka", "employment_application", "transfer_application"],
        );
    }
    if let Some(status) = &req.status {
        check_enum(
            &mut errors,
            "status",
            status,
            DocumentStatus::parse(status).is_some(),
            &["draft", "completed"],
        );
    }
    if let Some(pi) = &req.personal_information {
        validate_personal_information(&mut errors, pi);
    }
    if let Some(records) = &req.education_records {
        for (i, record) in records.iter().enumerate() {
            validate_education_record(&mut errors, i, record);
        }
    }
    if let Some(relatives) = &req.relatives {
        for (i, relative) in relatives.iter().enumerate() {
            validate_relative(&mut errors, i, relative);
        }
    }
    if let Some(work) = &req.work_experiences {
        for (i, entry) in work.iter().enumerate() {
            validate_work_experience(&mut errors, i, entry);
        }
    }

    errors
}

/// Photo constraints: JPEG or PNG, at most [`MAX_PHOTO_BYTES`].
pub fn validate_photo(content_type: Option<&str>, size: usize) -> Vec<FieldError> {
    let mut errors = Vec::new();
    match content_type {
        Some("image/jpeg") | Some("image/jpg") | Some("image/png") => {}
        _ => errors.push(FieldError::new(
            "photo",
            "The photo must be a JPEG or PNG image.",
        )),
    }
    if size > MAX_PHOTO_BYTES {
        errors.push(FieldError::new("photo", "The photo must not exceed 5 MB."));
    }
    errors
}

fn validate_personal_information(errors: &mut Vec<FieldError>, pi: &PersonalInformationInput) {
    let p = "personal_information";
    check_required(errors, &format!("{p}.familya"), &pi.familya, MAX_STR);
    check_required(errors, &format!("{p}.ism"), &pi.ism, MAX_STR);
    check_required(errors, &format!("{p}.sharif"), &pi.sharif, MAX_STR);
    check_optional(
        errors,
        &format!("{p}.joriy_lavozim_sanasi"),
        &pi.joriy_lavozim_sanasi,
        MAX_STR,
    );
    check_optional(
        errors,
        &format!("{p}.joriy_lavozim_toliq"),
        &pi.joriy_lavozim_toliq,
        MAX_LONG_STR,
    );
    check_date(errors, &format!("{p}.tugilgan_sana"), &pi.tugilgan_sana);
    check_required(
        errors,
        &format!("{p}.tugilgan_joyi"),
        &pi.tugilgan_joyi,
        MAX_STR,
    );
    check_required(errors, &format!("{p}.millati"), &pi.millati, MAX_STR);
    check_optional(
        errors,
        &format!("{p}.partiyaviyligi"),
        &pi.partiyaviyligi,
        MAX_STR,
    );
    // xalq_deputatlari is an uncapped text column
}

fn validate_education_record(errors: &mut Vec<FieldError>, index: usize, rec: &EducationRecordInput) {
    let p = format!("education_records.{index}");
    check_enum(
        errors,
        &format!("{p}.malumoti"),
        &rec.malumoti,
        EducationLevel::parse(&rec.malumoti).is_some(),
        &["Олий", "Махсус", "Ўрта"],
    );
    check_optional(errors, &format!("{p}.tamomlagan"), &rec.tamomlagan, MAX_STR);
    check_optional(
        errors,
        &format!("{p}.mutaxassisligi"),
        &rec.mutaxassisligi,
        MAX_STR,
    );
    check_optional(
        errors,
        &format!("{p}.ilmiy_daraja"),
        &rec.ilmiy_daraja,
        MAX_STR,
    );
    check_optional(
        errors,
        &format!("{p}.ilmiy_unvoni"),
        &rec.ilmiy_unvoni,
        MAX_STR,
    );
    check_optional(
        errors,
        &format!("{p}.chet_tillari"),
        &rec.chet_tillari,
        MAX_STR,
    );
    check_optional(
        errors,
        &format!("{p}.maxsus_unvoni"),
        &rec.maxsus_unvoni,
        MAX_STR,
    );
    check_optional(
        errors,
        &format!("{p}.davlat_mukofoti"),
        &rec.davlat_mukofoti,
        MAX_STR,
    );
}

/// Relative checks, including the deceased-exclusivity rule: a deceased
/// relative requires year-of-death and occupation; a living one requires
/// workplace and residence. The messages are the ones the forms show.
fn validate_relative(errors: &mut Vec<FieldError>, index: usize, rel: &RelativeInput) {
    let p = format!("relatives.{index}");
    check_enum(
        errors,
        &format!("{p}.qarindoshligi"),
        &rel.qarindoshligi,
        RelativeType::parse(&rel.qarindoshligi).is_some(),
        &["Otasi", "Onasi", "Akasi", "Ukasi", "Opasi"],
    );
    check_required(errors, &format!("{p}.fio"), &rel.fio, MAX_STR);
    check_required(errors, &format!("{p}.tugilgan"), &rel.tugilgan, MAX_STR);
    check_optional(errors, &format!("{p}.ish_joyi"), &rel.ish_joyi, MAX_LONG_STR);
    check_optional(errors, &format!("{p}.turar_joyi"), &rel.turar_joyi, MAX_STR);
    check_optional(
        errors,
        &format!("{p}.vafot_etgan_yili"),
        &rel.vafot_etgan_yili,
        MAX_STR,
    );
    check_optional(errors, &format!("{p}.kasbi"), &rel.kasbi, MAX_STR);

    if rel.vafot_etgan {
        if is_blank(&rel.vafot_etgan_yili) {
            errors.push(FieldError::new(
                format!("{p}.vafot_etgan_yili"),
                "Vafot etgan yili to'ldirilishi shart.",
            ));
        }
        if is_blank(&rel.kasbi) {
            errors.push(FieldError::new(
                format!("{p}.kasbi"),
                "Kasbi to'ldirilishi shart.",
            ));
        }
    } else {
        if is_blank(&rel.ish_joyi) {
            errors.push(FieldError::new(
                format!("{p}.ish_joyi"),
                "Ish joyi va lavozimi to'ldirilishi shart.",
            ));
        }
        if is_blank(&rel.turar_joyi) {
            errors.push(FieldError::new(
                format!("{p}.turar_joyi"),
                "Turar joyi to'ldirilishi shart.",
            ));
        }
    }
}

fn validate_work_experience(errors: &mut Vec<FieldError>, index: usize, work: &WorkExperienceInput) {
    let p = format!("work_experiences.{index}");
    check_date(errors, &format!("{p}.start_date"), &work.start_date);
    if let Some(end) = &work.end_date {
        if !end.trim().is_empty() {
            check_date(errors, &format!("{p}.end_date"), end);
        }
    }
    check_required(errors, &format!("{p}.info"), &work.info, MAX_STR);
}

// ────────────────────────────────────────────────────────────────────────────
// Field-level helpers
// ────────────────────────────────────────────────────────────────────────────

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

fn required(field: &str) -> FieldError {
    FieldError::new(field, format!("The {field} field is required."))
}

fn check_required(errors: &mut Vec<FieldError>, field: &str, value: &str, max: usize) {
    if value.trim().is_empty() {
        errors.push(required(field));
    } else if value.chars().count() > max {
        errors.push(too_long(field, max));
    }
}

fn check_optional(errors: &mut Vec<FieldError>, field: &str, value: &Option<String>, max: usize) {
    if let Some(v) = value {
        if v.chars().count() > max {
            errors.push(too_long(field, max));
        }
    }
}

fn check_date(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(required(field));
    } else if parse_date(value).is_none() {
        errors.push(FieldError::new(
            field,
            format!("The {field} field must be a valid date (YYYY-MM-DD)."),
        ));
    }
}

fn check_enum(
    errors: &mut Vec<FieldError>,
    field: &str,
    value: &str,
    is_member: bool,
    allowed: &[&str],
) {
    if value.trim().is_empty() {
        errors.push(required(field));
    } else if !is_member {
        errors.push(FieldError::new(
            field,
            format!("The {field} field must be one of: {}.", allowed.join(", ")),
        ));
    }
}

fn too_long(field: &str, max: usize) -> FieldError {
    FieldError::new(
        field,
        format!("The {field} field must not exceed {max} characters."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personal_information() -> PersonalInformationInput {
        PersonalInformationInput {
            familya: "Каримов".to_string(),
            ism: "Анвар".to_string(),
            sharif: "Тошевич".to_string(),
            joriy_lavozim_sanasi: None,
            joriy_lavozim_toliq: None,
            tugilgan_sana: "1975-03-14".to_string(),
            tugilgan_joyi: "Самарқанд шаҳри".to_string(),
            millati: "ўзбек".to_string(),
            partiyaviyligi: None,
            xalq_deputatlari: None,
        }
    }

    fn education_record() -> EducationRecordInput {
        EducationRecordInput {
            malumoti: "Олий".to_string(),
            tamomlagan: Some("1997 й. ТошДУ".to_string()),
            mutaxassisligi: Some("ҳуқуқшунос".to_string()),
            ilmiy_daraja: None,
            ilmiy_unvoni: None,
            chet_tillari: Some("рус, инглиз".to_string()),
            maxsus_unvoni: None,
            davlat_mukofoti: None,
        }
    }

    fn living_relative() -> RelativeInput {
        RelativeInput {
            qarindoshligi: "Otasi".to_string(),
            fio: "Каримов Тоша".to_string(),
            tugilgan: "1941 йил, Самарқанд".to_string(),
            vafot_etgan: false,
            ish_joyi: Some("нафақада".to_string()),
            turar_joyi: Some("Самарқанд шаҳри".to_string()),
            vafot_etgan_yili: None,
            kasbi: None,
        }
    }

    fn work_experience() -> WorkExperienceInput {
        WorkExperienceInput {
            start_date: "2018-01-09".to_string(),
            end_date: None,
            info: "Адлия вазирлиги бош мутахассиси".to_string(),
        }
    }

    fn create_request() -> CreateDocumentRequest {
        CreateDocumentRequest {
            user_id: uuid::Uuid::new_v4(),
            document_type: "obyektivka".to_string(),
            personal_information: personal_information(),
            education_records: vec![education_record()],
            relatives: vec![living_relative()],
            work_experiences: vec![work_experience()],
        }
    }

    fn field_names(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_create_request_passes() {
        assert!(validate_create(&create_request()).is_empty());
    }

    #[test]
    fn test_unknown_document_type_rejected() {
        let mut req = create_request();
        req.document_type = "anketa".to_string();
        let errors = validate_create(&req);
        assert!(field_names(&errors).contains(&"document_type"));
    }

    #[test]
    fn test_empty_child_collections_rejected() {
        let mut req = create_request();
        req.education_records.clear();
        req.relatives.clear();
        req.work_experiences.clear();
        let names = field_names(&validate_create(&req))
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        assert!(names.contains(&"education_records".to_string()));
        assert!(names.contains(&"relatives".to_string()));
        assert!(names.contains(&"work_experiences".to_string()));
    }

    #[test]
    fn test_deceased_relative_missing_death_year_rejected() {
        let mut req = create_request();
        req.relatives[0].vafot_etgan = true;
        req.relatives[0].vafot_etgan_yili = None;
        req.relatives[0].kasbi = Some("деҳқон".to_string());
        let errors = validate_create(&req);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "relatives.0.vafot_etgan_yili");
        assert_eq!(errors[0].message, "Vafot etgan yili to'ldirilishi shart.");
    }

    #[test]
    fn test_deceased_relative_missing_occupation_rejected() {
        let mut req = create_request();
        req.relatives[0].vafot_etgan = true;
        req.relatives[0].vafot_etgan_yili = Some("2003".to_string());
        req.relatives[0].kasbi = None;
        let errors = validate_create(&req);
        assert_eq!(field_names(&errors), vec!["relatives.0.kasbi"]);
    }

    #[test]
    fn test_living_relative_requires_workplace_and_residence() {
        let mut req = create_request();
        req.relatives[0].ish_joyi = None;
        req.relatives[0].turar_joyi = Some("".to_string());
        let errors = validate_create(&req);
        assert_eq!(
            field_names(&errors),
            vec!["relatives.0.ish_joyi", "relatives.0.turar_joyi"]
        );
    }

    #[test]
    fn test_invalid_birth_date_rejected() {
        let mut req = create_request();
        req.personal_information.tugilgan_sana = "14.03.1975".to_string();
        let errors = validate_create(&req);
        assert_eq!(
            field_names(&errors),
            vec!["personal_information.tugilgan_sana"]
        );
    }

    #[test]
    fn test_education_level_membership() {
        let mut req = create_request();
        req.education_records[0].malumoti = "Oliy".to_string();
        let errors = validate_create(&req);
        assert_eq!(field_names(&errors), vec!["education_records.0.malumoti"]);
    }

    #[test]
    fn test_length_cap_counts_chars_not_bytes() {
        let mut req = create_request();
        // 255 Cyrillic chars = 510 bytes; must still pass
        req.personal_information.familya = "Ф".repeat(255);
        assert!(validate_create(&req).is_empty());

        req.personal_information.familya = "Ф".repeat(256);
        let errors = validate_create(&req);
        assert_eq!(field_names(&errors), vec!["personal_information.familya"]);
    }

    #[test]
    fn test_long_fields_allow_500_chars() {
        let mut req = create_request();
        req.relatives[0].ish_joyi = Some("a".repeat(500));
        assert!(validate_create(&req).is_empty());
        req.relatives[0].ish_joyi = Some("a".repeat(501));
        assert_eq!(
            field_names(&validate_create(&req)),
            vec!["relatives.0.ish_joyi"]
        );
    }

    #[test]
    fn test_update_accepts_partial_payload() {
        let req = UpdateDocumentRequest {
            user_id: uuid::Uuid::new_v4(),
            document_type: None,
            status: Some("completed".to_string()),
            personal_information: None,
            education_records: None,
            relatives: None,
            work_experiences: None,
        };
        assert!(validate_update(&req).is_empty());
    }

    #[test]
    fn test_update_rejects_unknown_status() {
        let req = UpdateDocumentRequest {
            user_id: uuid::Uuid::new_v4(),
            document_type: None,
            status: Some("archived".to_string()),
            personal_information: None,
            education_records: None,
            relatives: None,
            work_experiences: None,
        };
        assert_eq!(field_names(&validate_update(&req)), vec!["status"]);
    }

    #[test]
    fn test_photo_type_and_size_limits() {
        assert!(validate_photo(Some("image/jpeg"), 1024).is_empty());
        assert!(validate_photo(Some("image/png"), 1024).is_empty());

        let errors = validate_photo(Some("image/gif"), 1024);
        assert_eq!(field_names(&errors), vec!["photo"]);

        let errors = validate_photo(Some("image/jpeg"), MAX_PHOTO_BYTES + 1);
        assert_eq!(field_names(&errors), vec!["photo"]);

        let errors = validate_photo(None, 0);
        assert_eq!(field_names(&errors), vec!["photo"]);
    }

    #[test]
    fn test_parse_date_strict_format() {
        assert!(parse_date("2020-02-29").is_some());
        assert!(parse_date("2021-02-29").is_none());
        assert!(parse_date("2020/01/01").is_none());
    }
}
