use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{error::ApiError, types::*};

/// A tweet as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Tweet {
    pub id: i64,
    pub text: String,
    pub created_at: Option<DateTime<Utc>>,
    pub from_user: String,
    pub from_user_id: i64,
    pub to_user_id: Option<i64>,
    pub profile_image_url: Option<String>,
    pub language_code: Option<String>,
    pub source: Option<String>
}

impl Tweet {
    pub fn from_json(json: &Value) -> Result<Self, ApiError> {
        Ok(Self {
            id: id_field(json, "id_str").or_else(|_| id_field(json, "id"))?,
            text: str_field(json, "text"),
            created_at: date_field(json, "created_at", SEARCH_DATE_FORMAT)
                .or_else(|| date_field(json, "created_at", REST_DATE_FORMAT)),
            from_user: str_field(json, "from_user"),
            from_user_id: i64_field(json, "from_user_id"),
            to_user_id: opt_i64_field(json, "to_user_id"),
            profile_image_url: opt_str_field(json, "profile_image_url"),
            language_code: opt_str_field(json, "iso_language_code"),
            source: opt_str_field(json, "source")
        })
    }
}
