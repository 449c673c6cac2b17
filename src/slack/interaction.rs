//! Block Kit interaction callbacks (`block_actions`).
//!
//! Slack posts these as a form body with a single `payload` field holding the
//! JSON document modelled here. Only the fields the bot reads are kept.

use serde::Deserialize;

use super::command_parser::parse_form_pairs;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InteractionCallback {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub response_url: String,
    #[serde(default)]
    pub container: InteractionContainer,
    #[serde(default)]
    pub channel: Option<InteractionChannel>,
    #[serde(default)]
    pub actions: Vec<BlockAction>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InteractionContainer {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub channel_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InteractionChannel {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockAction {
    #[serde(default)]
    pub action_id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub selected_option: Option<SelectedOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectedOption {
    pub value: String,
}

impl InteractionCallback {
    /// Channel the interaction happened in, preferring the container's view of it.
    #[must_use]
    pub fn channel_id(&self) -> &str {
        self.container
            .channel_id
            .as_deref()
            .or_else(|| self.channel.as_ref().map(|c| c.id.as_str()))
            .unwrap_or_default()
    }

    /// The value picked in the one select menu this callback is about.
    ///
    /// # Errors
    ///
    /// Returns an error message unless there is exactly one action and it carries a
    /// selected option.
    pub fn single_selection(&self) -> Result<&str, String> {
        match self.actions.as_slice() {
            [action] => action
                .selected_option
                .as_ref()
                .map(|o| o.value.as_str())
                .ok_or_else(|| format!("action {:?} has no selected option", action.action_id)),
            actions => Err(format!("expected exactly one action, got {}", actions.len())),
        }
    }
}

/// Pull the `payload` field out of a form body and deserialize it.
///
/// # Errors
///
/// Returns an error message if the form does not decode, the field is missing,
/// or the JSON does not match an interaction callback.
pub fn parse_interaction_payload(form_body: &str) -> Result<InteractionCallback, String> {
    let mut fields = parse_form_pairs(form_body)?;
    let payload = fields
        .remove("payload")
        .ok_or_else(|| "Missing payload field".to_string())?;
    serde_json::from_str(&payload).map_err(|e| format!("Invalid JSON payload: {e}"))
}
