use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Enumerations
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Obyektivka,
    EmploymentApplication,
    TransferApplication,
}

impl DocumentType {
    pub const ALL: [DocumentType; 3] = [
        DocumentType::Obyektivka,
        DocumentType::EmploymentApplication,
        DocumentType::TransferApplication,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Obyektivka => "obyektivka",
            DocumentType::EmploymentApplication => "employment_application",
            DocumentType::TransferApplication => "transfer_application",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Draft,
    Completed,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 2] = [DocumentStatus::Draft, DocumentStatus::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "draft",
            DocumentStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Education level. Wire values are the Cyrillic form strings the source
/// documents use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EducationLevel {
    #[serde(rename = "Олий")]
    Oliy,
    #[serde(rename = "Махсус")]
    Maxsus,
    #[serde(rename = "Ўрта")]
    Orta,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 3] = [
        EducationLevel::Oliy,
        EducationLevel::Maxsus,
        EducationLevel::Orta,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Oliy => "Олий",
            EducationLevel::Maxsus => "Махсус",
            EducationLevel::Orta => "Ўрта",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RelativeType {
    Otasi,
    Onasi,
    Akasi,
    Ukasi,
    Opasi,
}

impl RelativeType {
    pub const ALL: [RelativeType; 5] = [
        RelativeType::Otasi,
        RelativeType::Onasi,
        RelativeType::Akasi,
        RelativeType::Ukasi,
        RelativeType::Opasi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelativeType::Otasi => "Otasi",
            RelativeType::Onasi => "Onasi",
            RelativeType::Akasi => "Akasi",
            RelativeType::Ukasi => "Ukasi",
            RelativeType::Opasi => "Opasi",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Request DTOs
// ────────────────────────────────────────────────────────────────────────────
//
// Dates and enumerated values arrive as raw strings so validation can report
// per-field messages instead of opaque deserialization failures.

#[derive(Debug, Clone, Deserialize)]
pub struct PersonalInformationInput {
    pub familya: String,
    pub ism: String,
    pub sharif: String,
    #[serde(default)]
    pub joriy_lavozim_sanasi: Option<String>,
    #[serde(default)]
    pub joriy_lavozim_toliq: Option<String>,
    pub tugilgan_sana: String,
    pub tugilgan_joyi: String,
    pub millati: String,
    #[serde(default)]
    pub partiyaviyligi: Option<String>,
    #[serde(default)]
    pub xalq_deputatlari: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EducationRecordInput {
    pub malumoti: String,
    #[serde(default)]
    pub tamomlagan: Option<String>,
    #[serde(default)]
    pub mutaxassisligi: Option<String>,
    #[serde(default)]
    pub ilmiy_daraja: Option<String>,
    #[serde(default)]
    pub ilmiy_unvoni: Option<String>,
    #[serde(default)]
    pub chet_tillari: Option<String>,
    #[serde(default)]
    pub maxsus_unvoni: Option<String>,
    #[serde(default)]
    pub davlat_mukofoti: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelativeInput {
    pub qarindoshligi: String,
    pub fio: String,
    pub tugilgan: String,
    #[serde(default)]
    pub vafot_etgan: bool,
    #[serde(default)]
    pub ish_joyi: Option<String>,
    #[serde(default)]
    pub turar_joyi: Option<String>,
    #[serde(default)]
    pub vafot_etgan_yili: Option<String>,
    #[serde(default)]
    pub kasbi: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkExperienceInput {
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    pub info: String,
}

/// Create payload: the whole aggregate in one shot. Every child collection
/// must be non-empty.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDocumentRequest {
    pub user_id: Uuid,
    pub document_type: String,
    pub personal_information: PersonalInformationInput,
    pub education_records: Vec<EducationRecordInput>,
    pub relatives: Vec<RelativeInput>,
    pub work_experiences: Vec<WorkExperienceInput>,
}

/// Update payload: everything optional. Child collections, when present,
/// fully replace the stored set (delete-all-then-reinsert — an explicit
/// policy, not a diff).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDocumentRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub personal_information: Option<PersonalInformationInput>,
    #[serde(default)]
    pub education_records: Option<Vec<EducationRecordInput>>,
    #[serde(default)]
    pub relatives: Option<Vec<RelativeInput>>,
    #[serde(default)]
    pub work_experiences: Option<Vec<WorkExperienceInput>>,
}

/// An uploaded portrait photo, already size/type-checked by validation.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub bytes: Bytes,
    pub content_type: Option<String>,
}

impl PhotoUpload {
    /// File extension for storage, derived from the validated content type.
    pub fn extension(&self) -> &'static str {
        match self.content_type.as_deref() {
            Some("image/png") => "png",
            _ => "jpg",
        }
    }
}

/// Trims a free-text optional field, mapping empty strings to None the way
/// the write path stores them.
pub fn normalized(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
