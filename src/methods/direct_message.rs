use std::sync::Arc;

use http::Method;

use crate::{client::HeaderProvider, error::ApiError, methods::authorized_headers, query::*, requester::*, types::*};

#[derive(Clone)]
pub struct DirectMessageMethods {
    requester: Arc<Requester>,
    header_provider: Arc<dyn HeaderProvider>
}

impl DirectMessageMethods {
    pub fn new(requester: Arc<Requester>, header_provider: Arc<dyn HeaderProvider>) -> Self {
        Self { requester, header_provider }
    }

    /// The first 20 messages sent to the authenticated user.
    pub async fn fetch_received(&self) -> Result<Vec<DirectMessage>, ApiError> {
        self.fetch_received_with(PageParams::default()).await
    }

    pub async fn fetch_received_with(&self, params: PageParams) -> Result<Vec<DirectMessage>, ApiError> {
        self.fetch_list("direct_messages.json", params).await
    }

    /// The first 20 messages sent by the authenticated user.
    pub async fn fetch_sent(&self) -> Result<Vec<DirectMessage>, ApiError> {
        self.fetch_sent_with(PageParams::default()).await
    }

    pub async fn fetch_sent_with(&self, params: PageParams) -> Result<Vec<DirectMessage>, ApiError> {
        self.fetch_list("direct_messages/sent.json", params).await
    }

    pub async fn fetch_message(&self, id: i64) -> Result<DirectMessage, ApiError> {
        let headers = authorized_headers(self.header_provider.as_ref()).await?;
        let url = self.requester.api_url(&format!("direct_messages/show/{}.json", id))?.build();

        let json = self.requester.request_async(url, RequestOptions::new(Method::GET, headers, None)).await?;
        DirectMessage::from_json(&json)
    }

    pub async fn send_to_screen_name(&self, screen_name: impl Into<String>, text: impl Into<String>) -> Result<DirectMessage, ApiError> {
        self.send(FormBody::new().field("screen_name", screen_name.into()).field("text", text.into())).await
    }

    pub async fn send_to_user_id(&self, user_id: i64, text: impl Into<String>) -> Result<DirectMessage, ApiError> {
        self.send(FormBody::new().field("user_id", user_id).field("text", text.into())).await
    }

    /// Deletes a message and returns it as it was before deletion.
    pub async fn delete_message(&self, id: i64) -> Result<DirectMessage, ApiError> {
        let headers = authorized_headers(self.header_provider.as_ref()).await?;
        let url = self.requester.api_url(&format!("direct_messages/destroy/{}.json", id))?.build();

        let json = self.requester.request_async(url, RequestOptions::new(Method::DELETE, headers, None)).await?;
        DirectMessage::from_json(&json)
    }

    async fn fetch_list(&self, path: &str, params: PageParams) -> Result<Vec<DirectMessage>, ApiError> {
        let headers = authorized_headers(self.header_provider.as_ref()).await?;
        let url = params.apply(self.requester.api_url(path)?).build();

        let json = self.requester.request_async(url, RequestOptions::new(Method::GET, headers, None)).await?;
        DirectMessage::list_from_json(&json)
    }

    async fn send(&self, form: FormBody) -> Result<DirectMessage, ApiError> {
        let headers = authorized_headers(self.header_provider.as_ref()).await?;
        let url = self.requester.api_url("direct_messages/new.json")?.build();

        let json = self.requester.request_async(url, RequestOptions::form(Method::POST, headers, &form)).await?;
        DirectMessage::from_json(&json)
    }
}
