//! Response-related utilities for Slack interactions.
//!
//! Messages posted to a `response_url` share one JSON shape: a visibility,
//! a fallback `text` used for notifications, and optional Block Kit `blocks`.

use serde::Serialize;
use serde_json::Value;

/// Who gets to see a message posted through a `response_url`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Only the user who triggered the command.
    Ephemeral,
    /// Everyone in the channel.
    InChannel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseMessage {
    pub response_type: ResponseType,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Value>,
}

impl ResponseMessage {
    /// A plain-text message only the requesting user can see.
    ///
    /// # Examples
    ///
    /// ```
    /// use newsbot::slack::response_builder::{ResponseMessage, ResponseType};
    ///
    /// let message = ResponseMessage::ephemeral_text("This message is only visible to you");
    /// assert_eq!(message.response_type, ResponseType::Ephemeral);
    /// assert!(message.blocks.is_empty());
    /// ```
    #[must_use]
    pub fn ephemeral_text(text: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::Ephemeral,
            text: text.into(),
            blocks: Vec::new(),
        }
    }

    /// A Block Kit message only the requesting user can see. `fallback` is what
    /// notifications and clients without block support display.
    #[must_use]
    pub fn ephemeral_blocks(fallback: impl Into<String>, blocks: Vec<Value>) -> Self {
        Self {
            response_type: ResponseType::Ephemeral,
            text: fallback.into(),
            blocks,
        }
    }
}
