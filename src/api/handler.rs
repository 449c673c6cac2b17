//! HTTP surface: shared state, routes and the mapping of rejections to status codes.

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};

use super::{interactive_handler, slash_handler};
use crate::bot::NewsBot;
use crate::core::config::AppConfig;
use crate::errors::InboundError;

/// State shared by every handler. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub bot: Arc<NewsBot>,
    pub verification_token: Arc<str>,
    pub slash_command: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(bot: Arc<NewsBot>, config: &AppConfig) -> Self {
        Self {
            bot,
            verification_token: Arc::from(config.slack_verification_token.as_str()),
            slash_command: Arc::from(config.slash_command.as_str()),
        }
    }
}

/// Build the router for `/`, `/receive` and `/receive/help`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/receive", post(slash_handler::handle_slash_command))
        .route(
            "/receive/help",
            post(interactive_handler::handle_help_interaction),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "newsbot is running"
}

impl IntoResponse for InboundError {
    fn into_response(self) -> Response {
        self.status_code().into_response()
    }
}

/// The acknowledgment Slack expects: 200 and nothing else.
pub(crate) fn ack() -> StatusCode {
    StatusCode::OK
}
