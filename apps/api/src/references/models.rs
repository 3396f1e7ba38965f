use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceType {
    Book,
    Article,
    Website,
    Other,
}

impl ReferenceType {
    pub const ALL: [ReferenceType; 4] = [
        ReferenceType::Book,
        ReferenceType::Article,
        ReferenceType::Website,
        ReferenceType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceType::Book => "book",
            ReferenceType::Article => "article",
            ReferenceType::Website => "website",
            ReferenceType::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReferenceRequest {
    pub user_id: Uuid,
    pub title: String,
    pub author: String,
    pub year: i32,
    #[serde(rename = "type")]
    pub reference_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReferenceRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, rename = "type")]
    pub reference_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_type_round_trip() {
        for t in ReferenceType::ALL {
            assert_eq!(ReferenceType::parse(t.as_str()), Some(t));
        }
        assert_eq!(ReferenceType::parse("journal"), None);
    }

    #[test]
    fn test_type_field_wire_name() {
        let json = serde_json::json!({
            "user_id": Uuid::new_v4(),
            "title": "Rust in Action",
            "author": "T. McNamara",
            "year": 2021,
            "type": "book"
        });
        let req: CreateReferenceRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.reference_type, "book");
    }
}
