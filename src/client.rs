use std::{collections::HashMap, env, sync::Arc};
use tokio::sync::RwLock;

use crate::{config::ClientConfig, error::ApiError, methods::*, requester::*};

#[async_trait::async_trait]
pub trait HeaderProvider: Send + Sync {
    async fn get_headers(&self) -> HashMap<String, String>;

    async fn is_authorized(&self) -> bool;
}

/// Holds the access token shared by every method group of a client.
#[derive(Debug, Default)]
pub struct Session {
    token: RwLock<Option<String>>,
}

impl Session {
    pub fn new(token: Option<String>) -> Self {
        Self { token: RwLock::new(usable_token(token)) }
    }

    pub async fn replace_token(&self, token: Option<String>) {
        *self.token.write().await = usable_token(token);
    }
}

// Blank tokens would only produce a bare `Bearer` header.
fn usable_token(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}

#[async_trait::async_trait]
impl HeaderProvider for Session {
    async fn get_headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        if let Some(token) = self.token.read().await.as_ref() {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }

        headers
    }

    async fn is_authorized(&self) -> bool {
        self.token.read().await.is_some()
    }
}

pub struct AsyncClient {
    session: Arc<Session>,
    direct_messages: DirectMessageMethods,
    search: SearchMethods,
}

impl AsyncClient {
    pub fn new(token: Option<String>) -> Result<Self, ApiError> {
        Self::with_config(ClientConfig::default(), token)
    }

    pub fn with_config(config: ClientConfig, token: Option<String>) -> Result<Self, ApiError> {
        let requester = Arc::new(Requester::new(&config)?);
        let session = Arc::new(Session::new(token));
        let header_provider = session.clone() as Arc<dyn HeaderProvider>;

        Ok(Self {
            direct_messages: DirectMessageMethods::new(requester.clone(), header_provider.clone()),
            search: SearchMethods::new(requester.clone(), header_provider),
            session,
        })
    }

    /// Configures the client from the environment; the token comes from `TWITTER_ACCESS_TOKEN`.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        Self::with_config(ClientConfig::from_lookup(&lookup)?, lookup("TWITTER_ACCESS_TOKEN"))
    }

    pub fn direct_messages(&self) -> &DirectMessageMethods {
        &self.direct_messages
    }

    pub fn search(&self) -> &SearchMethods {
        &self.search
    }

    /// Replaces the access token; a blank token leaves the client anonymous.
    pub async fn set_token(&self, token: impl Into<String>) {
        self.session.replace_token(Some(token.into())).await;
    }

    pub async fn clear_token(&self) {
        self.session.replace_token(None).await;
    }

    pub async fn is_authorized(&self) -> bool {
        self.session.is_authorized().await
    }
}
