use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{error::ApiError, types::*};

/// A user as embedded in direct messages.
#[derive(Debug, Clone, PartialEq)]
pub struct TwitterProfile {
    pub id: i64,
    pub screen_name: String,
    pub name: String,
    pub url: Option<String>,
    pub profile_image_url: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub followers_count: i64,
    pub friends_count: i64,
    pub statuses_count: i64,
    pub protected: bool,
    pub verified: bool
}

impl TwitterProfile {
    pub fn new(id: i64, screen_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            screen_name: screen_name.into(),
            name: name.into(),
            url: None,
            profile_image_url: None,
            description: None,
            location: None,
            created_at: None,
            followers_count: 0,
            friends_count: 0,
            statuses_count: 0,
            protected: false,
            verified: false
        }
    }

    pub fn from_json(json: &Value) -> Result<Self, ApiError> {
        Ok(Self {
            url: opt_str_field(json, "url"),
            profile_image_url: opt_str_field(json, "profile_image_url"),
            description: opt_str_field(json, "description"),
            location: opt_str_field(json, "location"),
            created_at: date_field(json, "created_at", REST_DATE_FORMAT),
            followers_count: i64_field(json, "followers_count"),
            friends_count: i64_field(json, "friends_count"),
            statuses_count: i64_field(json, "statuses_count"),
            protected: bool_field(json, "protected"),
            verified: bool_field(json, "verified"),
            ..Self::new(id_field(json, "id")?, str_field(json, "screen_name"), str_field(json, "name"))
        })
    }

    pub fn profile_url(&self) -> String {
        format!("https://twitter.com/{}", self.screen_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_profile_fields() {
        let profile = TwitterProfile::from_json(&json!({
            "id": 13579,
            "screen_name": "kdonald",
            "name": "Keith Donald",
            "url": "http://www.springsource.org",
            "location": "Melbourne, FL",
            "description": "",
            "followers_count": 95,
            "protected": false,
            "verified": true,
            "created_at": "Thu Jul 02 20:49:31 +0000 2009"
        }))
        .unwrap();

        assert_eq!(profile.id, 13579);
        assert_eq!(profile.screen_name, "kdonald");
        assert_eq!(profile.name, "Keith Donald");
        assert_eq!(profile.url.as_deref(), Some("http://www.springsource.org"));
        assert_eq!(profile.description, None);
        assert_eq!(profile.followers_count, 95);
        assert!(profile.verified);
        assert!(profile.created_at.is_some());
        assert_eq!(profile.profile_url(), "https://twitter.com/kdonald");
    }

    #[test]
    fn profile_without_id_is_malformed() {
        assert!(TwitterProfile::from_json(&json!({"screen_name": "nobody"})).is_err());
    }
}
