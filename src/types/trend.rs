use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

use crate::{error::ApiError, types::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trend {
    pub name: String,
    pub query: String
}

impl Trend {
    pub fn new(name: impl Into<String>, query: impl Into<String>) -> Self {
        Self { name: name.into(), query: query.into() }
    }

    pub fn from_json(json: &Value) -> Self {
        Self::new(str_field(json, "name"), str_field(json, "query"))
    }
}

/// The trending topics for a single point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trends {
    pub time: DateTime<Utc>,
    pub trends: Vec<Trend>
}

impl Trends {
    pub fn new(time: DateTime<Utc>, trends: Vec<Trend>) -> Self {
        Self { time, trends }
    }

    /// Parses a daily or weekly payload, `{"trends": {"<time>": [...], ...}, "as_of": ...}`.
    ///
    /// Daily keys carry an hour (`2010-10-16 13:00`), weekly keys only a date.
    /// The result is ordered most recent first.
    pub fn list_from_json(json: &Value) -> Result<Vec<Self>, ApiError> {
        let buckets = json
            .get("trends")
            .and_then(|v| v.as_object())
            .ok_or_else(|| ApiError::MalformedResponse("expected a `trends` object".to_string()))?;

        let mut list = buckets
            .iter()
            .map(|(key, trends)| -> Result<Self, ApiError> {
                let time = parse_bucket_time(key)?;
                let trends = trends
                    .as_array()
                    .ok_or_else(|| ApiError::MalformedResponse(format!("trends for `{key}` are not an array")))?;
                Ok(Self::new(time, trends.iter().map(Trend::from_json).collect()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        list.sort_by(|a, b| b.time.cmp(&a.time));
        Ok(list)
    }

    /// Parses a local trends payload: an array whose first entry holds the trends.
    pub fn local_from_json(json: &Value) -> Result<Self, ApiError> {
        let entry = as_array(json, "local trends")?
            .first()
            .ok_or_else(|| ApiError::MalformedResponse("empty local trends response".to_string()))?;

        let time = entry
            .get("as_of")
            .and_then(|v| v.as_str())
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|d| d.with_timezone(&Utc))
            .ok_or_else(|| ApiError::MalformedResponse("missing or invalid `as_of`".to_string()))?;

        Ok(Self::new(time, array_field(entry, "trends").iter().map(Trend::from_json).collect()))
    }
}

fn parse_bucket_time(key: &str) -> Result<DateTime<Utc>, ApiError> {
    NaiveDateTime::parse_from_str(key, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(&format!("{key} 00:00"), "%Y-%m-%d %H:%M"))
        .map(|t| t.and_utc())
        .map_err(|_| ApiError::MalformedResponse(format!("unrecognised trend time `{key}`")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn daily_trends_are_sorted_newest_first() {
        let list = Trends::list_from_json(&json!({
            "as_of": 1287240000,
            "trends": {
                "2010-10-16 12:00": [{"name": "#earlier", "query": "#earlier"}],
                "2010-10-16 13:00": [
                    {"name": "#spring", "query": "#spring"},
                    {"name": "Roo", "query": "Roo"}
                ]
            }
        }))
        .unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].time, Utc.with_ymd_and_hms(2010, 10, 16, 13, 0, 0).unwrap());
        assert_eq!(list[0].trends, vec![Trend::new("#spring", "#spring"), Trend::new("Roo", "Roo")]);
        assert_eq!(list[1].trends[0].name, "#earlier");
    }

    #[test]
    fn weekly_keys_are_plain_dates() {
        let list = Trends::list_from_json(&json!({
            "trends": {
                "2010-10-15": [{"name": "a", "query": "a"}],
                "2010-10-17": [{"name": "b", "query": "b"}]
            }
        }))
        .unwrap();
        assert_eq!(list[0].time, Utc.with_ymd_and_hms(2010, 10, 17, 0, 0, 0).unwrap());
    }

    #[test]
    fn bad_bucket_key_is_malformed() {
        let result = Trends::list_from_json(&json!({"trends": {"yesterday": []}}));
        assert!(matches!(result, Err(ApiError::MalformedResponse(_))));
    }

    #[test]
    fn non_array_bucket_is_malformed() {
        let result = Trends::list_from_json(&json!({"trends": {"2010-10-16 13:00": {"name": "#spring"}}}));
        assert!(matches!(result, Err(ApiError::MalformedResponse(_))));
    }

    #[test]
    fn local_trends_take_first_entry() {
        let trends = Trends::local_from_json(&json!([{
            "as_of": "2010-10-16T19:00:00Z",
            "locations": [{"name": "Worldwide", "woeid": 1}],
            "trends": [{"name": "Cool Stuff", "query": "Cool+Stuff"}]
        }]))
        .unwrap();

        assert_eq!(trends.time, Utc.with_ymd_and_hms(2010, 10, 16, 19, 0, 0).unwrap());
        assert_eq!(trends.trends, vec![Trend::new("Cool Stuff", "Cool+Stuff")]);
        assert!(Trends::local_from_json(&json!([])).is_err());
    }
}
