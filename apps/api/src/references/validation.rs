use crate::errors::FieldError;
use crate::references::models::{CreateReferenceRequest, ReferenceType, UpdateReferenceRequest};

const MAX_STR: usize = 255;
/// Year must fall in 1000 ..= current year + 10.
const MIN_YEAR: i32 = 1000;
const YEAR_HEADROOM: i32 = 10;

pub fn validate_create(req: &CreateReferenceRequest, current_year: i32) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_text(&mut errors, "title", &req.title);
    check_text(&mut errors, "author", &req.author);
    check_year(&mut errors, req.year, current_year);
    check_type(&mut errors, &req.reference_type);
    errors
}

pub fn validate_update(req: &UpdateReferenceRequest, current_year: i32) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if let Some(title) = &req.title {
        check_text(&mut errors, "title", title);
    }
    if let Some(author) = &req.author {
        check_text(&mut errors, "author", author);
    }
    if let Some(year) = req.year {
        check_year(&mut errors, year, current_year);
    }
    if let Some(reference_type) = &req.reference_type {
        check_type(&mut errors, reference_type);
    }
    errors
}

fn check_text(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(
            field,
            format!("The {field} field is required."),
        ));
    } else if value.chars().count() > MAX_STR {
        errors.push(FieldError::new(
            field,
            format!("The {field} field must not exceed {MAX_STR} characters."),
        ));
    }
}

fn check_year(errors: &mut Vec<FieldError>, year: i32, current_year: i32) {
    let max = current_year + YEAR_HEADROOM;
    if year < MIN_YEAR || year > max {
        errors.push(FieldError::new(
            "year",
            format!("The year field must be between {MIN_YEAR} and {max}."),
        ));
    }
}

fn check_type(errors: &mut Vec<FieldError>, value: &str) {
    if ReferenceType::parse(value).is_none() {
        errors.push(FieldError::new(
            "type",
            "The type field must be one of: book, article, website, other.",
        ));
    }
}
