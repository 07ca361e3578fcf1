//! Schema validation for inbound payloads.
//!
//! Each payload type declares its fields as a static list of [`FieldSpec`]s.
//! [`validate`] checks a raw JSON object against that list and returns the
//! object with every declared field cast to its canonical JSON type, ready to
//! be deserialized into the typed payload. Failure is all-or-nothing and
//! carries no field-level detail.

mod field;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::VALIDATION_FAILED;
use crate::errors::{AppError, AppResult};

pub use field::{FieldKind, FieldSpec};

/// A payload type with a declarative field specification.
pub trait Schema: DeserializeOwned {
    const FIELDS: &'static [FieldSpec];
}

/// Validate `input` against `fields`, returning the cast object.
pub fn validate(input: Value, fields: &[FieldSpec]) -> AppResult<Value> {
    let Value::Object(mut map) = input else {
        return Err(AppError::validation(VALIDATION_FAILED));
    };

    for spec in fields {
        match map.get(spec.name) {
            None | Some(Value::Null) => {
                if spec.required {
                    return Err(AppError::validation(VALIDATION_FAILED));
                }
            }
            Some(value) => {
                let cast = spec
                    .cast(value)
                    .ok_or_else(|| AppError::validation(VALIDATION_FAILED))?;
                map.insert(spec.name.to_string(), cast);
            }
        }
    }

    Ok(Value::Object(map))
}

/// Validate and deserialize a payload in one step.
pub fn parse<T: Schema>(input: Value) -> AppResult<T> {
    let value = validate(input, T::FIELDS)?;
    serde_json::from_value(value).map_err(|e| {
        tracing::debug!("Payload rejected after validation: {}", e);
        AppError::validation(VALIDATION_FAILED)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        title: String,
        duration: i32,
        note: Option<String>,
    }

    impl Schema for Sample {
        const FIELDS: &'static [FieldSpec] = &[
            FieldSpec::required("title", FieldKind::Text),
            FieldSpec::required("duration", FieldKind::Integer).positive(),
            FieldSpec::optional("note", FieldKind::Text),
        ];
    }

    #[test]
    fn valid_payload_is_cast_and_parsed() {
        let sample: Sample = parse(json!({ "title": "Gold", "duration": "6" })).unwrap();
        assert_eq!(sample.title, "Gold");
        assert_eq!(sample.duration, 6);
        assert!(sample.note.is_none());
    }

    #[test]
    fn missing_required_field_fails() {
        let err = parse::<Sample>(json!({ "duration": 6 })).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn null_counts_as_absent() {
        assert!(parse::<Sample>(json!({ "title": "Gold", "duration": 3, "note": null })).is_ok());
        assert!(parse::<Sample>(json!({ "title": null, "duration": 3 })).is_err());
    }

    #[test]
    fn non_object_payload_fails() {
        assert!(validate(json!([1, 2, 3]), Sample::FIELDS).is_err());
        assert!(validate(json!("title"), Sample::FIELDS).is_err());
    }

    #[test]
    fn one_bad_field_fails_the_whole_payload() {
        let err = validate(json!({ "title": "Gold", "duration": -1 }), Sample::FIELDS).unwrap_err();
        assert_eq!(err.to_string(), VALIDATION_FAILED);
    }

    #[test]
    fn undeclared_fields_pass_through() {
        let value = validate(json!({ "title": "Gold", "duration": 1, "extra": true }), Sample::FIELDS)
            .unwrap();
        assert_eq!(value["extra"], json!(true));
    }
}
