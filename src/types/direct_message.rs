use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{error::ApiError, types::*};

#[derive(Debug, Clone, PartialEq)]
pub struct DirectMessage {
    pub id: i64,
    pub text: String,
    pub sender: TwitterProfile,
    pub recipient: TwitterProfile,
    pub created_at: Option<DateTime<Utc>>
}

impl DirectMessage {
    pub fn from_json(json: &Value) -> Result<Self, ApiError> {
        Ok(Self {
            id: id_field(json, "id")?,
            text: str_field(json, "text"),
            sender: participant(json, "sender", "sender_id", "sender_screen_name")?,
            recipient: participant(json, "recipient", "recipient_id", "recipient_screen_name")?,
            created_at: date_field(json, "created_at", REST_DATE_FORMAT)
        })
    }

    pub fn list_from_json(json: &Value) -> Result<Vec<Self>, ApiError> {
        as_array(json, "direct messages")?.iter().map(Self::from_json).collect()
    }
}

// Trimmed payloads drop the embedded user objects and only carry the flat id fields.
fn participant(json: &Value, key: &str, id_key: &str, screen_name_key: &str) -> Result<TwitterProfile, ApiError> {
    match json.get(key) {
        Some(user) if user.is_object() => TwitterProfile::from_json(user),
        _ => Ok(TwitterProfile::new(id_field(json, id_key)?, str_field(json, screen_name_key), "")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn maps_message_with_embedded_users() {
        let message = DirectMessage::from_json(&json!({
            "id": 23456,
            "text": "Back at ya",
            "created_at": "Tue Jul 13 17:38:21 +0000 2010",
            "sender": {"id": 13579, "screen_name": "kdonald", "name": "Keith Donald"},
            "recipient": {"id": 24680, "screen_name": "rclarkson", "name": "Roy Clarkson"}
        }))
        .unwrap();

        assert_eq!(message.id, 23456);
        assert_eq!(message.text, "Back at ya");
        assert_eq!(message.sender.id, 13579);
        assert_eq!(message.sender.screen_name, "kdonald");
        assert_eq!(message.recipient.id, 24680);
        assert_eq!(message.recipient.screen_name, "rclarkson");
        assert_eq!(message.created_at, Some(Utc.with_ymd_and_hms(2010, 7, 13, 17, 38, 21).unwrap()));
    }

    #[test]
    fn falls_back_to_flat_ids() {
        let message = DirectMessage::from_json(&json!({
            "id": "1",
            "text": "hi",
            "sender_id": 2,
            "sender_screen_name": "alice",
            "recipient_id": 3,
            "recipient_screen_name": "bob"
        }))
        .unwrap();

        assert_eq!(message.sender, TwitterProfile::new(2, "alice", ""));
        assert_eq!(message.recipient.id, 3);
        assert_eq!(message.created_at, None);
    }

    #[test]
    fn list_requires_an_array() {
        assert!(DirectMessage::list_from_json(&json!({"id": 1})).is_err());
        assert!(DirectMessage::list_from_json(&json!([])).unwrap().is_empty());
    }
}
