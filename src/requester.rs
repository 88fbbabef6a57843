use std::collections::HashMap;

use http::Method;
use reqwest::{Body, Client, Response as ReqwestResponse, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{config::ClientConfig, error::ApiError, query::{FormBody, UrlBuilder}};

pub struct RequestOptions {
    pub method: Method,
    pub headers: HashMap<String, String>,
    pub body: Option<Body>,
}

impl RequestOptions {
    pub fn new(method: Method, headers: HashMap<String, String>, body: Option<Body>) -> Self {
        Self { method, headers, body }
    }

    pub fn form(method: Method, mut headers: HashMap<String, String>, form: &FormBody) -> Self {
        headers.insert("Content-Type".to_string(), FormBody::CONTENT_TYPE.to_string());
        Self { method, headers, body: Some(Body::from(form.encode())) }
    }
}

#[derive(Debug, Clone)]
pub struct Requester {
    client: Client,
    api_base_url: Url,
    search_base_url: Url,
}

impl Requester {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.clone(),
            search_base_url: config.search_base_url.clone(),
        })
    }

    pub fn api_url(&self, path: &str) -> Result<UrlBuilder, ApiError> {
        UrlBuilder::new(&self.api_base_url, path)
    }

    pub fn search_url(&self, path: &str) -> Result<UrlBuilder, ApiError> {
        UrlBuilder::new(&self.search_base_url, path)
    }

    /// Sends the request and maps any non-success status to an [`ApiError`].
    pub async fn request_resp_async(
        &self,
        url: impl Into<String>,
        options: RequestOptions,
    ) -> Result<ReqwestResponse, ApiError> {
        let url = url.into();
        let authorized = options.headers.keys().any(|k| k.eq_ignore_ascii_case("authorization"));
        debug!(method = %options.method, %url, authorized, "sending request");

        let mut req = self.client.request(options.method.clone(), &url);

        for (key, value) in options.headers.iter() {
            req = req.header(key, value);
        }

        if let Some(body) = options.body {
            req = req.body(body);
        }

        let res = req.send().await?;
        let status = res.status();

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let err = ApiError::from_response(status, &body);
            warn!(method = %options.method, %url, status = status.as_u16(), error = %err, "request failed");
            return Err(err);
        }

        Ok(res)
    }

    pub async fn request_async(
        &self,
        url: impl Into<String>,
        options: RequestOptions,
    ) -> Result<Value, ApiError> {
        let text = self.request_resp_async(url, options).await?.text().await?;
        let json: Value = serde_json::from_str(&text)?;
        Ok(json)
    }
}
