//! Field specifications and their casting rules.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Number, Value};
use validator::ValidateEmail;

/// Shape a single field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A string; numbers are accepted and cast to their text form.
    Text,
    /// A string holding a well-formed e-mail address.
    Email,
    /// A number, or a string that parses as one.
    Number,
    /// An integral number, or a string that parses as one.
    Integer,
    /// An RFC 3339 timestamp or a plain `YYYY-MM-DD` date.
    Date,
}

/// Declarative description of one payload field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub positive: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            positive: false,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            positive: false,
        }
    }

    /// Additionally require a numeric value strictly greater than zero.
    pub const fn positive(mut self) -> Self {
        self.positive = true;
        self
    }

    /// Cast a present, non-null value to its canonical JSON form.
    ///
    /// Returns `None` when the value does not satisfy the spec.
    pub(crate) fn cast(&self, value: &Value) -> Option<Value> {
        let cast = match self.kind {
            FieldKind::Text => match value {
                Value::String(s) => Some(Value::String(s.clone())),
                Value::Number(n) => Some(Value::String(n.to_string())),
                _ => None,
            },
            FieldKind::Email => match value {
                Value::String(s) if s.validate_email() => Some(Value::String(s.clone())),
                _ => None,
            },
            FieldKind::Number => as_f64(value).and_then(Number::from_f64).map(Value::Number),
            FieldKind::Integer => as_integer(value).map(Value::from),
            FieldKind::Date => match value {
                Value::String(s) => parse_date(s).map(|d| Value::String(d.to_rfc3339())),
                _ => None,
            },
        }?;

        if self.positive && !is_positive(&cast) {
            return None;
        }
        Some(cast)
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn is_positive(value: &Value) -> bool {
    value.as_f64().map(|n| n > 0.0).unwrap_or(false)
}

/// Parse the date formats accepted on the wire.
///
/// Timestamps without an offset, and bare dates, are taken as UTC.
pub(crate) fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn text_accepts_numbers_as_text() {
        let spec = FieldSpec::required("age", FieldKind::Text);
        assert_eq!(spec.cast(&json!(31)), Some(json!("31")));
        assert_eq!(spec.cast(&json!("31")), Some(json!("31")));
        assert_eq!(spec.cast(&json!(true)), None);
    }

    #[test]
    fn email_must_be_well_formed() {
        let spec = FieldSpec::required("email", FieldKind::Email);
        assert!(spec.cast(&json!("ana@gym.com")).is_some());
        assert!(spec.cast(&json!("ana.gym.com")).is_none());
        assert!(spec.cast(&json!(42)).is_none());
    }

    #[test]
    fn positive_numbers_reject_zero_and_negatives() {
        let spec = FieldSpec::required("price", FieldKind::Number).positive();
        assert_eq!(spec.cast(&json!("129.9")), Some(json!(129.9)));
        assert!(spec.cast(&json!(0)).is_none());
        assert!(spec.cast(&json!(-5)).is_none());
        assert!(spec.cast(&json!("abc")).is_none());
    }

    #[test]
    fn integers_reject_fractions() {
        let spec = FieldSpec::required("plan_id", FieldKind::Integer);
        assert_eq!(spec.cast(&json!("7")), Some(json!(7)));
        assert_eq!(spec.cast(&json!(7.0)), Some(json!(7)));
        assert!(spec.cast(&json!(7.5)).is_none());
    }

    #[test]
    fn dates_accept_timestamps_and_plain_dates() {
        assert_eq!(
            parse_date("2024-03-15"),
            Some(Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(
            parse_date("2024-03-15T10:30:00-03:00"),
            Some(Utc.with_ymd_and_hms(2024, 3, 15, 13, 30, 0).unwrap())
        );
        assert_eq!(
            parse_date("2024-03-15T10:30:00"),
            Some(Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap())
        );
        assert_eq!(parse_date("15/03/2024"), None);
        assert_eq!(parse_date("2024-02-30"), None);
    }
}
