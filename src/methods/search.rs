use std::sync::Arc;

use chrono::NaiveDate;
use http::Method;

use crate::{client::HeaderProvider, error::ApiError, methods::authorized_headers, query::*, requester::*, types::*};

/// Search, saved searches and trends.
///
/// Searching and trends are anonymous; saved searches belong to the
/// authenticated user.
#[derive(Clone)]
pub struct SearchMethods {
    requester: Arc<Requester>,
    header_provider: Arc<dyn HeaderProvider>
}

impl SearchMethods {
    pub fn new(requester: Arc<Requester>, header_provider: Arc<dyn HeaderProvider>) -> Self {
        Self { requester, header_provider }
    }

    /// The first 50 tweets matching `query`.
    pub async fn search(&self, query: impl Into<String>) -> Result<SearchResults, ApiError> {
        self.search_with(&SearchParameters::new(query)).await
    }

    pub async fn search_page(&self, query: impl Into<String>, page: u32, page_size: u32) -> Result<SearchResults, ApiError> {
        self.search_with(&SearchParameters::new(query).page(page, page_size)).await
    }

    pub async fn search_with(&self, params: &SearchParameters) -> Result<SearchResults, ApiError> {
        let url = self
            .requester
            .search_url("search.json")?
            .param("q", &params.query)
            .param("rpp", params.page_size)
            .param("page", params.page)
            .param_opt("since_id", params.since_id.filter(|id| *id > 0))
            .param_opt("max_id", params.max_id.filter(|id| *id > 0))
            .param_opt("geocode", params.geocode)
            .param_opt("result_type", params.result_type.map(|t| t.as_str()))
            .build();

        let headers = self.header_provider.get_headers().await;
        let json = self.requester.request_async(url, RequestOptions::new(Method::GET, headers, None)).await?;
        SearchResults::from_json(&json)
    }

    pub async fn fetch_saved_searches(&self) -> Result<Vec<SavedSearch>, ApiError> {
        let headers = authorized_headers(self.header_provider.as_ref()).await?;
        let url = self.requester.api_url("saved_searches.json")?.build();

        let json = self.requester.request_async(url, RequestOptions::new(Method::GET, headers, None)).await?;
        SavedSearch::list_from_json(&json)
    }

    pub async fn fetch_saved_search(&self, id: i64) -> Result<SavedSearch, ApiError> {
        let headers = authorized_headers(self.header_provider.as_ref()).await?;
        let url = self.requester.api_url(&format!("saved_searches/show/{}.json", id))?.build();

        let json = self.requester.request_async(url, RequestOptions::new(Method::GET, headers, None)).await?;
        SavedSearch::from_json(&json)
    }

    pub async fn create_saved_search(&self, query: impl Into<String>) -> Result<SavedSearch, ApiError> {
        let headers = authorized_headers(self.header_provider.as_ref()).await?;
        let url = self.requester.api_url("saved_searches/create.json")?.build();
        let form = FormBody::new().field("query", query.into());

        let json = self.requester.request_async(url, RequestOptions::form(Method::POST, headers, &form)).await?;
        SavedSearch::from_json(&json)
    }

    pub async fn delete_saved_search(&self, id: i64) -> Result<(), ApiError> {
        let headers = authorized_headers(self.header_provider.as_ref()).await?;
        let url = self.requester.api_url(&format!("saved_searches/destroy/{}.json", id))?.build();

        self.requester.request_resp_async(url, RequestOptions::new(Method::DELETE, headers, None)).await?;
        Ok(())
    }

    /// Top trending topics for each hour of the past day, newest first.
    pub async fn fetch_daily_trends(&self) -> Result<Vec<Trends>, ApiError> {
        self.fetch_daily_trends_with(false, None).await
    }

    pub async fn fetch_daily_trends_with(&self, exclude_hashtags: bool, start_date: Option<NaiveDate>) -> Result<Vec<Trends>, ApiError> {
        self.fetch_trend_list("trends/daily.json", exclude_hashtags, start_date).await
    }

    /// Top trending topics for each day of the past week, newest first.
    pub async fn fetch_weekly_trends(&self) -> Result<Vec<Trends>, ApiError> {
        self.fetch_weekly_trends_with(false, None).await
    }

    pub async fn fetch_weekly_trends_with(&self, exclude_hashtags: bool, start_date: Option<NaiveDate>) -> Result<Vec<Trends>, ApiError> {
        self.fetch_trend_list("trends/weekly.json", exclude_hashtags, start_date).await
    }

    /// Top trending topics for a "Where On Earth" location id.
    pub async fn fetch_local_trends(&self, where_on_earth_id: i64) -> Result<Trends, ApiError> {
        self.fetch_local_trends_with(where_on_earth_id, false).await
    }

    pub async fn fetch_local_trends_with(&self, where_on_earth_id: i64, exclude_hashtags: bool) -> Result<Trends, ApiError> {
        let url = self
            .requester
            .api_url(&format!("trends/{}.json", where_on_earth_id))?
            .param_opt("exclude", exclude_hashtags.then_some("hashtags"))
            .build();

        let headers = self.header_provider.get_headers().await;
        let json = self.requester.request_async(url, RequestOptions::new(Method::GET, headers, None)).await?;
        Trends::local_from_json(&json)
    }

    async fn fetch_trend_list(&self, path: &str, exclude_hashtags: bool, start_date: Option<NaiveDate>) -> Result<Vec<Trends>, ApiError> {
        let url = self
            .requester
            .api_url(path)?
            .param_opt("exclude", exclude_hashtags.then_some("hashtags"))
            .param_opt("date", start_date.map(|d| d.format("%Y-%m-%d")))
            .build();

        let headers = self.header_provider.get_headers().await;
        let json = self.requester.request_async(url, RequestOptions::new(Method::GET, headers, None)).await?;
        Trends::list_from_json(&json)
    }
}
