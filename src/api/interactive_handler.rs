//! Handler for interactions with the help menu.
//!
//! Expects a `block_actions` payload carrying the user's pick from the
//! section select rendered by the help reply.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::{info, warn};

use super::handler::{AppState, ack};
use super::verify::verify_token;
use crate::core::models::ResponseTarget;
use crate::core::router::{Command, normalize_section};
use crate::errors::InboundError;
use crate::slack::interaction::parse_interaction_payload;

/// Verify a help-menu interaction, acknowledge it, and fetch the picked section
/// in a detached task.
///
/// # Errors
///
/// - 400 if the form or its `payload` JSON cannot be parsed
/// - 401 if the verification token does not match
/// - 400 unless exactly one selection action is present
#[tracing::instrument(level = "info", skip_all)]
pub async fn handle_help_interaction(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, InboundError> {
    let body = std::str::from_utf8(&body).map_err(|e| {
        warn!("Interactive body is not UTF-8: {}", e);
        InboundError::BadRequest(e.to_string())
    })?;

    let interaction = parse_interaction_payload(body).map_err(|e| {
        warn!("Error parsing interactive request: {}", e);
        InboundError::BadRequest(e)
    })?;

    if !verify_token(&interaction.token, &state.verification_token) {
        return Err(InboundError::Unauthorized);
    }

    let selected = interaction.single_selection().map_err(|e| {
        warn!("Unexpected actions in interaction: {}", e);
        InboundError::BadRequest(e)
    })?;

    let section = normalize_section(selected);
    info!(
        channel_id = %interaction.channel_id(),
        section = %section,
        "Accepted help menu selection"
    );

    let target = ResponseTarget {
        channel_id: interaction.channel_id().to_string(),
        response_url: interaction.response_url.clone(),
    };
    state.bot.dispatch(target, Command::TopStories { section });

    Ok(ack())
}
