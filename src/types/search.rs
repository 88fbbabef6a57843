use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{error::ApiError, types::*};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub tweets: Vec<Tweet>,
    pub max_id: i64,
    pub since_id: i64,
    pub last_page: bool
}

impl SearchResults {
    pub fn from_json(json: &Value) -> Result<Self, ApiError> {
        if !json.is_object() {
            return Err(ApiError::MalformedResponse("expected a search results object".to_string()));
        }

        Ok(Self {
            tweets: array_field(json, "results").iter().map(Tweet::from_json).collect::<Result<_, _>>()?,
            max_id: i64_field(json, "max_id"),
            since_id: i64_field(json, "since_id"),
            last_page: json.get("next_page").is_none_or(Value::is_null)
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavedSearch {
    pub id: i64,
    pub name: String,
    pub query: String,
    pub position: i32,
    pub created_at: Option<DateTime<Utc>>
}

impl SavedSearch {
    pub fn from_json(json: &Value) -> Result<Self, ApiError> {
        Ok(Self {
            id: id_field(json, "id")?,
            name: str_field(json, "name"),
            query: str_field(json, "query"),
            position: opt_i64_field(json, "position").and_then(|p| i32::try_from(p).ok()).unwrap_or(0),
            created_at: date_field(json, "created_at", REST_DATE_FORMAT)
        })
    }

    pub fn list_from_json(json: &Value) -> Result<Vec<Self>, ApiError> {
        as_array(json, "saved searches")?.iter().map(Self::from_json).collect()
    }
}

/// Restricts a search to tweets posted near a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCode {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: u32,
    pub unit: DistanceUnit
}

impl GeoCode {
    pub fn new(latitude: f64, longitude: f64, radius: u32, unit: DistanceUnit) -> Self {
        Self { latitude, longitude, radius, unit }
    }
}

impl fmt::Display for GeoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}{}", self.latitude, self.longitude, self.radius, self.unit.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchParameters {
    pub query: String,
    pub page: u32,
    pub page_size: u32,
    pub since_id: Option<i64>,
    pub max_id: Option<i64>,
    pub geocode: Option<GeoCode>,
    pub result_type: Option<ResultType>
}

impl SearchParameters {
    pub const DEFAULT_PAGE_SIZE: u32 = 50;

    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            page_size: Self::DEFAULT_PAGE_SIZE,
            since_id: None,
            max_id: None,
            geocode: None,
            result_type: None
        }
    }

    pub fn page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    pub fn since_id(mut self, since_id: i64) -> Self {
        self.since_id = Some(since_id);
        self
    }

    pub fn max_id(mut self, max_id: i64) -> Self {
        self.max_id = Some(max_id);
        self
    }

    pub fn geocode(mut self, geocode: GeoCode) -> Self {
        self.geocode = Some(geocode);
        self
    }

    pub fn result_type(mut self, result_type: ResultType) -> Self {
        self.result_type = Some(result_type);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn last_page_follows_next_page() {
        let more = SearchResults::from_json(&json!({
            "results": [{"id": 1, "text": "a"}, {"id": 2, "text": "b"}],
            "max_id": 2,
            "since_id": 0,
            "next_page": "?page=2&max_id=2&q=spring"
        }))
        .unwrap();
        assert_eq!(more.tweets.len(), 2);
        assert_eq!(more.max_id, 2);
        assert!(!more.last_page);

        let done = SearchResults::from_json(&json!({"results": [], "max_id": 0, "since_id": 0})).unwrap();
        assert!(done.tweets.is_empty());
        assert!(done.last_page);
    }

    #[test]
    fn maps_saved_search() {
        let search = SavedSearch::from_json(&json!({
            "id": 26897775,
            "name": "#springsocial",
            "query": "#springsocial",
            "position": null,
            "created_at": "Thu Nov 04 14:26:04 +0000 2010"
        }))
        .unwrap();

        assert_eq!(search.id, 26897775);
        assert_eq!(search.query, "#springsocial");
        assert_eq!(search.position, 0);
        assert!(search.created_at.is_some());
    }

    #[test]
    fn out_of_range_position_falls_back_to_zero() {
        let search = SavedSearch::from_json(&json!({"id": 1, "position": 4294967299i64})).unwrap();
        assert_eq!(search.position, 0);

        let search = SavedSearch::from_json(&json!({"id": 1, "position": "7"})).unwrap();
        assert_eq!(search.position, 7);
    }

    #[test]
    fn geocode_renders_radius_with_unit() {
        assert_eq!(GeoCode::new(37.781157, -122.398720, 1, DistanceUnit::Miles).to_string(), "37.781157,-122.39872,1mi");
        assert_eq!(GeoCode::new(51.5, 0.0, 25, DistanceUnit::Kilometers).to_string(), "51.5,0,25km");
    }
}
