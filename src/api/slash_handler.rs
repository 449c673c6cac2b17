//! Handler for the `/news` slash command.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::{error, info, warn};

use super::handler::{AppState, ack};
use super::verify::verify_token;
use crate::core::models::ResponseTarget;
use crate::errors::InboundError;
use crate::slack::command_parser::parse_form_data;

/// Verify a slash command, acknowledge it, and hand the text to a detached task.
///
/// # Errors
///
/// - 500 if the body is not a decodable form
/// - 401 if the verification token does not match
/// - 400 if the command is not the one this bot is registered for
#[tracing::instrument(level = "info", skip_all)]
pub async fn handle_slash_command(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, InboundError> {
    let body = std::str::from_utf8(&body).map_err(|e| {
        error!("Slash command body is not UTF-8: {}", e);
        InboundError::Malformed(e.to_string())
    })?;

    let event = parse_form_data(body).map_err(|e| {
        error!("Error parsing slash command: {}", e);
        InboundError::Malformed(e)
    })?;

    if !verify_token(&event.token, &state.verification_token) {
        return Err(InboundError::Unauthorized);
    }

    if event.command != *state.slash_command {
        warn!("Unexpected slash command: {}", event.command);
        return Err(InboundError::BadRequest(format!(
            "unexpected command {}",
            event.command
        )));
    }

    info!(
        channel_id = %event.channel_id,
        user_id = %event.user_id,
        "Accepted slash command"
    );

    let target = ResponseTarget {
        channel_id: event.channel_id,
        response_url: event.response_url,
    };
    state.bot.dispatch_text(target, &event.text);

    Ok(ack())
}
