//! Strict validation helpers for path and query values that must be present.
//!
//! Failures become `invalid_request` errors whose details name the field, the
//! offending value and a machine-readable code.

use serde_json::json;

use crate::domain::{Error, UniversityId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidId,
    DuplicateSelection,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidId => "invalid_id",
            Self::DuplicateSelection => "duplicate_selection",
        }
    }
}

/// Name of a request field as clients spell it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, message: String, code: ValidationCode, value: Option<&str>) -> Error {
    let mut details = json!({
        "field": field.as_str(),
        "code": code.as_str(),
    });
    if let (Some(value), Some(object)) = (value, details.as_object_mut()) {
        object.insert("value".to_owned(), json!(value));
    }
    Error::invalid_request(message).with_details(details)
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        format!("missing required field: {name}"),
        ValidationCode::MissingField,
        None,
    )
}

pub(crate) fn invalid_id_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    field_error(
        field,
        format!("{name} must be a positive integer university id"),
        ValidationCode::InvalidId,
        Some(value),
    )
}

pub(crate) fn duplicate_selection_error(field: FieldName, value: UniversityId) -> Error {
    field_error(
        field,
        "cannot compare a university with itself".to_owned(),
        ValidationCode::DuplicateSelection,
        Some(&value.to_string()),
    )
}

/// Parse a positive university id, trimming surrounding whitespace.
pub(crate) fn parse_university_id(value: &str, field: FieldName) -> Result<UniversityId, Error> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|id| *id > 0)
        .map(UniversityId::new)
        .ok_or_else(|| invalid_id_error(field, value))
}

/// Parse a required university id, treating blank values as missing.
pub(crate) fn require_university_id(
    value: Option<&str>,
    field: FieldName,
) -> Result<UniversityId, Error> {
    match value {
        Some(raw) if !raw.trim().is_empty() => parse_university_id(raw, field),
        _ => Err(missing_field_error(field)),
    }
}
