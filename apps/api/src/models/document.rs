use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DocumentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub document_type: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PersonalInformationRow {
    pub id: Uuid,
    pub document_id: Uuid,
    pub familya: String,
    pub ism: String,
    pub sharif: String,
    pub photo_path: Option<String>,
    pub joriy_lavozim_sanasi: Option<String>,
    pub joriy_lavozim_toliq: Option<String>,
    pub tugilgan_sana: NaiveDate,
    pub tugilgan_joyi: String,
    pub millati: String,
    pub partiyaviyligi: Option<String>,
    pub xalq_deputatlari: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EducationRecordRow {
    pub id: Uuid,
    pub document_id: Uuid,
    pub malumoti: String,
    pub tamomlagan: Option<String>,
    pub mutaxassisligi: Option<String>,
    pub ilmiy_daraja: Option<String>,
    pub ilmiy_unvoni: Option<String>,
    pub chet_tillari: Option<String>,
    pub maxsus_unvoni: Option<String>,
    pub davlat_mukofoti: Option<String>,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RelativeRow {
    pub id: Uuid,
    pub document_id: Uuid,
    pub qarindoshligi: String,
    pub fio: String,
    pub tugilgan: String,
    pub vafot_etgan: bool,
    pub ish_joyi: Option<String>,
    pub turar_joyi: Option<String>,
    pub vafot_etgan_yili: Option<String>,
    pub kasbi: Option<String>,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkExperienceRow {
    pub id: Uuid,
    pub document_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub info: String,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A document together with all of its owned child records — the unit the
/// loader returns and the composer consumes. Child lists are ordered by
/// `order_index` at load time.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentAggregate {
    #[serde(flatten)]
    pub document: DocumentRow,
    pub personal_information: Option<PersonalInformationRow>,
    pub education_records: Vec<EducationRecordRow>,
    pub relatives: Vec<RelativeRow>,
    pub work_experiences: Vec<WorkExperienceRow>,
}
