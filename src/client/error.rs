use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Every failure a Reddit call can produce. Each variant is a single cause.
#[derive(Debug, Error)]
pub enum RedditError {
    /// The request could not be built (bad base URL or path).
    #[error("Failed to construct request: {0}")]
    Construction(String),

    /// The request never got a response.
    #[error("Network error: {0}")]
    Network(#[source] ReqwestError),

    /// The response body could not be read to the end.
    #[error("Failed to read response body: {0}")]
    Io(#[source] ReqwestError),

    /// The body is not JSON, has an unexpected top-level shape, or does not
    /// match the type it is decoded into.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Reddit answered with an `error` field (404, 403, invalid_grant...).
    #[error("Reddit API error {code}{}", .message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    ApiHttp {
        code: String,
        message: Option<String>,
    },

    /// Reddit answered with a populated `json.errors` list.
    #[error("Reddit API rejected the request: [{code}] {description}")]
    ApiValidation { code: String, description: String },

    /// The token endpoint answered without a usable access token.
    #[error("Authentication failed: {0}")]
    Authentication(String),
}

impl From<serde_json::Error> for RedditError {
    fn from(err: serde_json::Error) -> Self {
        RedditError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for RedditError {
    fn from(err: url::ParseError) -> Self {
        RedditError::Construction(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RedditError>;
