pub mod enums;
pub mod profile;
pub mod direct_message;
pub mod tweet;
pub mod search;
pub mod trend;

pub use enums::*;
pub use profile::*;
pub use direct_message::*;
pub use tweet::*;
pub use search::*;
pub use trend::*;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::ApiError;

/// `Tue Jul 13 17:38:21 +0000 2010`, used by the REST endpoints.
pub(crate) const REST_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";
/// `Tue, 13 Jul 2010 17:38:21 +0000`, used by the search endpoint.
pub(crate) const SEARCH_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

// Field readers shared by the from_json implementations. Only ids are
// mandatory; everything else falls back to an empty value.

pub(crate) fn str_field(json: &Value, key: &str) -> String {
    json.get(key).and_then(|v| v.as_str()).unwrap_or("").to_string()
}

pub(crate) fn opt_str_field(json: &Value, key: &str) -> Option<String> {
    json.get(key).and_then(|v| v.as_str()).filter(|s| !s.is_empty()).map(String::from)
}

pub(crate) fn bool_field(json: &Value, key: &str) -> bool {
    json.get(key).and_then(|v| v.as_bool()).unwrap_or(false)
}

pub(crate) fn opt_i64_field(json: &Value, key: &str) -> Option<i64> {
    match json.get(key)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

pub(crate) fn i64_field(json: &Value, key: &str) -> i64 {
    opt_i64_field(json, key).unwrap_or(0)
}

pub(crate) fn id_field(json: &Value, key: &str) -> Result<i64, ApiError> {
    opt_i64_field(json, key).ok_or_else(|| ApiError::MalformedResponse(format!("missing or invalid `{key}`")))
}

pub(crate) fn date_field(json: &Value, key: &str, format: &str) -> Option<DateTime<Utc>> {
    let raw = json.get(key)?.as_str()?;
    DateTime::parse_from_str(raw, format).ok().map(|d| d.with_timezone(&Utc))
}

pub(crate) fn array_field<'a>(json: &'a Value, key: &str) -> &'a [Value] {
    json.get(key).and_then(|v| v.as_array()).map(Vec::as_slice).unwrap_or(&[])
}

pub(crate) fn as_array<'a>(json: &'a Value, what: &str) -> Result<&'a Vec<Value>, ApiError> {
    json.as_array().ok_or_else(|| ApiError::MalformedResponse(format!("expected an array of {what}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn ids_accept_numbers_and_strings() {
        assert_eq!(id_field(&json!({"id": 42}), "id").unwrap(), 42);
        assert_eq!(id_field(&json!({"id": "42"}), "id").unwrap(), 42);
        assert!(matches!(id_field(&json!({"id": "abc"}), "id"), Err(ApiError::MalformedResponse(_))));
        assert!(matches!(id_field(&json!({}), "id"), Err(ApiError::MalformedResponse(_))));
    }

    #[test]
    fn both_date_formats_parse() {
        let expected = Utc.with_ymd_and_hms(2010, 7, 13, 17, 38, 21).unwrap();
        let rest = json!({"created_at": "Tue Jul 13 17:38:21 +0000 2010"});
        let search = json!({"created_at": "Tue, 13 Jul 2010 17:38:21 +0000"});

        assert_eq!(date_field(&rest, "created_at", REST_DATE_FORMAT), Some(expected));
        assert_eq!(date_field(&search, "created_at", SEARCH_DATE_FORMAT), Some(expected));
        assert_eq!(date_field(&rest, "created_at", SEARCH_DATE_FORMAT), None);
    }
}
