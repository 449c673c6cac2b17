//! Slack API client module
//!
//! Delivers deferred replies to `response_url`s and checks the bot token
//! against the Web API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use slack_morphism::hyper_tokio::{SlackClientHyperConnector, SlackHyperClient};
use slack_morphism::{SlackApiToken, SlackApiTokenValue};
use tracing::warn;
use url::Url;

use super::response_builder::ResponseMessage;
use crate::errors::SlackError;

/// Posts a rendered message to the deferred response target of a request.
#[async_trait]
pub trait MessageDelivery: Send + Sync {
    /// Make one delivery attempt. Callers log failures; nothing retries.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not a usable URL, the request fails,
    /// or Slack answers with a non-success status.
    async fn deliver(&self, response_url: &str, message: &ResponseMessage)
    -> Result<(), SlackError>;
}

/// Slack client holding the bot token and a shared HTTP client.
pub struct SlackClient {
    token: SlackApiToken,
    http: Client,
}

impl SlackClient {
    #[must_use]
    pub fn new(bot_token: String) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            token: SlackApiToken::new(SlackApiTokenValue::new(bot_token)),
            http,
        }
    }

    /// Calls `auth.test` and returns the bot's user id.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP connector cannot be built or Slack rejects the token.
    pub async fn verify_bot_token(&self) -> Result<String, SlackError> {
        let connector = SlackClientHyperConnector::new().map_err(|e| {
            SlackError::GeneralError(format!("Slack HTTP connector not initialized: {e}"))
        })?;
        let client = SlackHyperClient::new(connector);
        let session = client.open_session(&self.token);

        let test_resp = session.auth_test().await?;
        Ok(test_resp.user_id.0)
    }
}

/// Only absolute http(s) URLs are accepted as delivery targets.
///
/// # Errors
///
/// Returns [`SlackError::ParseError`] for anything else.
pub fn parse_response_url(response_url: &str) -> Result<Url, SlackError> {
    let url = Url::parse(response_url)
        .map_err(|e| SlackError::ParseError(format!("invalid response_url {response_url:?}: {e}")))?;
    match url.scheme() {
        "https" | "http" => Ok(url),
        other => Err(SlackError::ParseError(format!(
            "unsupported response_url scheme {other:?}"
        ))),
    }
}

#[async_trait]
impl MessageDelivery for SlackClient {
    async fn deliver(
        &self,
        response_url: &str,
        message: &ResponseMessage,
    ) -> Result<(), SlackError> {
        let target = parse_response_url(response_url)?;
        let resp = self.http.post(target).json(message).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            warn!(
                "response_url POST failed: status={} body={}",
                status, body_text
            );
            return Err(SlackError::ApiError(format!(
                "response_url POST failed with status {status}"
            )));
        }

        Ok(())
    }
}
