use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Authorization is required for this operation")]
    MissingAuthorization,
    #[error("Not authorized: {0}")]
    NotAuthorized(String),
    #[error("Invalid authorization: {0}")]
    InvalidAuthorization(String),
    #[error("Authorization has been revoked")]
    RevokedAuthorization,
    #[error("Message too long: {0}")]
    MessageTooLong(String),
    #[error("Duplicate status: {0}")]
    DuplicateStatus(String),
    #[error("Invalid message recipient: {0}")]
    InvalidMessageRecipient(String),
    #[error("Operation not permitted: {0}")]
    OperationNotPermitted(String),
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),
    #[error("Client error {status}: {message}")]
    ClientError { status: u16, message: String },
    #[error("Internal server error: {0}")]
    InternalServerError(String),
    #[error("Server is down: {0}")]
    ServerDown(String),
    #[error("Server is overloaded: {0}")]
    ServerOverloaded(String),
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedResponse(err.to_string())
    }
}

impl ApiError {
    /// HTTP status of the response this error was mapped from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
            ApiError::NotAuthorized(_) | ApiError::InvalidAuthorization(_) | ApiError::RevokedAuthorization => Some(401),
            ApiError::MessageTooLong(_)
            | ApiError::DuplicateStatus(_)
            | ApiError::InvalidMessageRecipient(_)
            | ApiError::OperationNotPermitted(_) => Some(403),
            ApiError::ResourceNotFound(_) => Some(404),
            ApiError::InternalServerError(_) => Some(500),
            ApiError::ServerDown(_) => Some(502),
            ApiError::ServerOverloaded(_) => Some(503),
            ApiError::ClientError { status, .. }
            | ApiError::ServerError { status, .. }
            | ApiError::UnexpectedStatus { status, .. } => Some(*status),
            // rate limiting is reported as both 420 and 429, so the code is not recoverable
            _ => None,
        }
    }

    pub fn is_not_authorized(&self) -> bool {
        matches!(
            self,
            ApiError::MissingAuthorization
                | ApiError::NotAuthorized(_)
                | ApiError::InvalidAuthorization(_)
                | ApiError::RevokedAuthorization
        )
    }

    /// Translates a non-success response into the matching error.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = error_text(body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string());
        let code = status.as_u16();

        match code {
            400 if message.contains("Rate limit exceeded") => ApiError::RateLimitExceeded(message),
            401 => match message.as_str() {
                "Could not authenticate you." => ApiError::MissingAuthorization,
                "Could not authenticate with OAuth." => ApiError::RevokedAuthorization,
                "Invalid / expired Token" => ApiError::InvalidAuthorization(message),
                _ => ApiError::NotAuthorized(message),
            },
            403 => {
                if message.contains("over 140 characters") || message.contains("too long") {
                    ApiError::MessageTooLong(message)
                } else if message.contains("You already said that") || message.contains("Status is a duplicate") {
                    ApiError::DuplicateStatus(message)
                } else if message.contains("not following you") || message.contains("cannot send messages") {
                    ApiError::InvalidMessageRecipient(message)
                } else {
                    ApiError::OperationNotPermitted(message)
                }
            }
            404 => ApiError::ResourceNotFound(message),
            420 | 429 => ApiError::RateLimitExceeded(message),
            400..=499 => ApiError::ClientError { status: code, message },
            500 => ApiError::InternalServerError(message),
            502 => ApiError::ServerDown(message),
            503 => ApiError::ServerOverloaded(message),
            501..=599 => ApiError::ServerError { status: code, message },
            _ => ApiError::UnexpectedStatus { status: code, body: body.to_string() },
        }
    }
}

/// Pulls the human readable error out of an error payload.
///
/// The API reports errors either as `{"error": "..."}`, `{"errors": "..."}`
/// or `{"errors": [{"message": "...", "code": n}]}`. Non-JSON bodies are used as is.
fn error_text(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return Some(body.to_string());
    };

    if let Some(text) = json.get("error").and_then(|v| v.as_str()) {
        return Some(text.to_string());
    }

    match json.get("errors") {
        Some(Value::String(text)) => Some(text.clone()),
        Some(Value::Array(errors)) => errors
            .first()
            .and_then(|e| e.get("message"))
            .and_then(|v| v.as_str())
            .map(String::from),
        _ => Some(body.to_string()),
    }
}
