pub mod direct_message;
pub mod search;

pub use direct_message::DirectMessageMethods;
pub use search::SearchMethods;

use std::collections::HashMap;

use crate::{client::HeaderProvider, error::ApiError};

/// Headers for an endpoint that needs a user context. Fails before anything
/// goes over the wire when the client has no token.
pub(crate) async fn authorized_headers(header_provider: &dyn HeaderProvider) -> Result<HashMap<String, String>, ApiError> {
    if !header_provider.is_authorized().await {
        return Err(ApiError::MissingAuthorization);
    }
    Ok(header_provider.get_headers().await)
}
