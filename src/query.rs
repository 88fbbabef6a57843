use reqwest::Url;

use crate::error::ApiError;

/// Builds an endpoint URL, keeping query parameters in the order they were added.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    url: Url,
    params: Vec<(String, String)>,
}

impl UrlBuilder {
    pub fn new(base: &Url, path: &str) -> Result<Self, ApiError> {
        let url = base
            .join(path)
            .map_err(|err| ApiError::InvalidConfig(format!("cannot join {path} onto {base}: {err}")))?;
        Ok(Self { url, params: Vec::new() })
    }

    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    pub fn param_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    pub fn build(self) -> String {
        if self.params.is_empty() {
            return self.url.to_string();
        }
        let mut url = self.url.to_string();
        url.push('?');
        url.push_str(&encode_pairs(&self.params, false));
        url
    }
}

/// An `application/x-www-form-urlencoded` request body.
#[derive(Debug, Clone, Default)]
pub struct FormBody {
    params: Vec<(String, String)>,
}

impl FormBody {
    pub const CONTENT_TYPE: &'static str = "application/x-www-form-urlencoded";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    pub fn encode(&self) -> String {
        encode_pairs(&self.params, true)
    }
}

fn encode_pairs(params: &[(String, String)], plus_for_space: bool) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k, plus_for_space), encode(v, plus_for_space)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode(raw: &str, plus_for_space: bool) -> String {
    let encoded = urlencoding::encode(raw);
    if plus_for_space { encoded.replace("%20", "+") } else { encoded.into_owned() }
}

/// Paging for timeline style endpoints.
///
/// Ids of zero or less are treated as unset, matching how the API treats them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u32,
    pub page_size: u32,
    pub since_id: Option<i64>,
    pub max_id: Option<i64>,
}

impl PageParams {
    pub const DEFAULT_PAGE_SIZE: u32 = 20;

    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size, since_id: None, max_id: None }
    }

    pub fn since_id(mut self, since_id: i64) -> Self {
        self.since_id = Some(since_id);
        self
    }

    pub fn max_id(mut self, max_id: i64) -> Self {
        self.max_id = Some(max_id);
        self
    }

    pub(crate) fn apply(&self, builder: UrlBuilder) -> UrlBuilder {
        builder
            .param("page", self.page)
            .param("count", self.page_size)
            .param_opt("since_id", self.since_id.filter(|id| *id > 0))
            .param_opt("max_id", self.max_id.filter(|id| *id > 0))
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.twitter.com/1/").unwrap()
    }

    #[test]
    fn default_paging() {
        let url = PageParams::default().apply(UrlBuilder::new(&base(), "direct_messages.json").unwrap()).build();
        assert_eq!(url, "https://api.twitter.com/1/direct_messages.json?page=1&count=20");
    }

    #[test]
    fn paging_with_ids() {
        let params = PageParams::new(3, 12).since_id(112233).max_id(332211);
        let url = params.apply(UrlBuilder::new(&base(), "direct_messages.json").unwrap()).build();
        assert_eq!(
            url,
            "https://api.twitter.com/1/direct_messages.json?page=3&count=12&since_id=112233&max_id=332211"
        );
    }

    #[test]
    fn non_positive_ids_are_left_out() {
        let params = PageParams::new(2, 5).since_id(0).max_id(-4);
        let url = params.apply(UrlBuilder::new(&base(), "direct_messages/sent.json").unwrap()).build();
        assert_eq!(url, "https://api.twitter.com/1/direct_messages/sent.json?page=2&count=5");
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let url = UrlBuilder::new(&base(), "search.json").unwrap().param("q", "#spring social").build();
        assert_eq!(url, "https://api.twitter.com/1/search.json?q=%23spring%20social");
    }

    #[test]
    fn form_body_uses_plus_for_spaces() {
        let body = FormBody::new().field("screen_name", "habuma").field("text", "Hello there!");
        assert_eq!(body.encode(), "screen_name=habuma&text=Hello+there%21");
    }
}
