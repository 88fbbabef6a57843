#![allow(dead_code)]

use rustic_twitter::{AsyncClient, ClientConfig};
use wiremock::{Match, MockServer, Request, ResponseTemplate};

pub const TOKEN: &str = "test-access-token";

/// Matches the raw query string exactly, including parameter order.
pub struct QueryIs(pub &'static str);

impl Match for QueryIs {
    fn matches(&self, request: &Request) -> bool {
        request.url.query().unwrap_or("") == self.0
    }
}

pub fn config(server: &MockServer) -> ClientConfig {
    ClientConfig::new(format!("{}/1", server.uri()), server.uri()).expect("mock server uri is a valid base")
}

pub fn client(server: &MockServer) -> AsyncClient {
    AsyncClient::with_config(config(server), Some(TOKEN.to_string())).expect("client builds")
}

pub fn anonymous_client(server: &MockServer) -> AsyncClient {
    AsyncClient::with_config(config(server), None).expect("client builds")
}

pub fn json_response(fixture: &str) -> ResponseTemplate {
    let body = match fixture {
        "messages" => include_str!("../fixtures/messages.json"),
        "direct_message" => include_str!("../fixtures/direct_message.json"),
        "search" => include_str!("../fixtures/search.json"),
        "saved_searches" => include_str!("../fixtures/saved_searches.json"),
        "saved_search" => include_str!("../fixtures/saved_search.json"),
        "daily_trends" => include_str!("../fixtures/daily_trends.json"),
        "local_trends" => include_str!("../fixtures/local_trends.json"),
        other => panic!("unknown fixture {other}"),
    };
    ResponseTemplate::new(200).set_body_raw(body, "application/json")
}
