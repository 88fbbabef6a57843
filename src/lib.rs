//! Async bindings for the Twitter REST API: direct messages, search, saved
//! searches and trends.
//!
//! ```no_run
//! # async fn run() -> Result<(), rustic_twitter::ApiError> {
//! let client = rustic_twitter::AsyncClient::new(Some("ACCESS_TOKEN".to_string()))?;
//! let inbox = client.direct_messages().fetch_received().await?;
//! let results = client.search().search("#rust").await?;
//! println!("{} messages, {} tweets", inbox.len(), results.tweets.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod methods;
pub mod query;
pub mod types;
pub(crate) mod requester;

pub use client::{AsyncClient, HeaderProvider, Session};
pub use config::ClientConfig;
pub use error::ApiError;
pub use query::PageParams;
