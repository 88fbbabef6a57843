use std::{env, time::Duration};

use reqwest::Url;

use crate::error::ApiError;

pub const DEFAULT_API_URL: &str = "https://api.twitter.com/1/";
pub const DEFAULT_SEARCH_URL: &str = "https://search.twitter.com/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: Url,
    pub search_base_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_base_url: impl AsRef<str>, search_base_url: impl AsRef<str>) -> Result<Self, ApiError> {
        Ok(Self {
            api_base_url: parse_base_url(api_base_url.as_ref())?,
            search_base_url: parse_base_url(search_base_url.as_ref())?,
            user_agent: default_user_agent(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Builds a config from `TWITTER_API_URL`, `TWITTER_SEARCH_URL`,
    /// `TWITTER_USER_AGENT` and `TWITTER_TIMEOUT_SECS`, using defaults for
    /// anything unset.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let mut config = Self::new(
            lookup("TWITTER_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            lookup("TWITTER_SEARCH_URL").unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string()),
        )?;

        if let Some(user_agent) = lookup("TWITTER_USER_AGENT") {
            config.user_agent = user_agent;
        }

        if let Some(secs) = lookup("TWITTER_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| ApiError::InvalidConfig(format!("TWITTER_TIMEOUT_SECS is not a number: {secs}")))?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_URL).expect("default api url is valid"),
            search_base_url: Url::parse(DEFAULT_SEARCH_URL).expect("default search url is valid"),
            user_agent: default_user_agent(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

fn default_user_agent() -> String {
    format!("rustic-twitter/{}", env!("CARGO_PKG_VERSION"))
}

// Url::join drops the last segment unless the base ends with a slash.
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let raw = raw.trim();
    let normalized = if raw.ends_with('/') { raw.to_string() } else { format!("{raw}/") };
    let url = Url::parse(&normalized).map_err(|err| ApiError::InvalidConfig(format!("{raw}: {err}")))?;
    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidConfig(format!("{raw} cannot be used as a base url")));
    }
    Ok(url)
}
