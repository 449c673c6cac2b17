use axum::http::StatusCode;
use slack_morphism::errors::SlackClientError;
use thiserror::Error;

/// Failures talking to Slack: delivering to a `response_url` or calling the Web API.
#[derive(Debug, Error)]
pub enum SlackError {
    #[error("Failed to parse Slack event: {0}")]
    ParseError(String),

    #[error("Failed to access Slack API: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Slack client error: {0}")]
    GeneralError(String),
}

impl From<SlackClientError> for SlackError {
    fn from(error: SlackClientError) -> Self {
        SlackError::ApiError(error.to_string())
    }
}

impl From<reqwest::Error> for SlackError {
    fn from(error: reqwest::Error) -> Self {
        SlackError::HttpError(error.to_string())
    }
}

/// Failures of the news gateway, normalized away from any provider's own error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewsError {
    #[error("invalid news section: {0}")]
    InvalidSection(String),

    #[error("upstream news request failed: {0}")]
    Upstream(String),
}

impl From<reqwest::Error> for NewsError {
    fn from(error: reqwest::Error) -> Self {
        NewsError::Upstream(error.to_string())
    }
}

/// Rejections raised while an inbound request is still being acknowledged.
///
/// These never produce a Slack message, only a status code with an empty body.
#[derive(Debug, Error)]
pub enum InboundError {
    #[error("invalid verification token")]
    Unauthorized,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("malformed request body: {0}")]
    Malformed(String),
}

impl InboundError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            InboundError::Unauthorized => StatusCode::UNAUTHORIZED,
            InboundError::BadRequest(_) => StatusCode::BAD_REQUEST,
            InboundError::Malformed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
