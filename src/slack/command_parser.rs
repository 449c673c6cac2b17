use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Structure representing a Slack slash command event.
/// This contains the fields Slack sends when a user invokes a slash command.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct SlackCommandEvent {
    pub token: String,
    pub team_id: String,
    pub team_domain: String,
    pub channel_id: String,
    pub channel_name: String,
    pub user_id: String,
    pub user_name: String,
    pub command: String,
    pub text: String,
    pub response_url: String,
    pub trigger_id: String,
}

/// Decodes one `application/x-www-form-urlencoded` component.
///
/// `+` is turned into a space before percent-decoding so that an encoded
/// `%2B` survives as a literal plus sign.
///
/// # Errors
///
/// Returns an error message if the decoded bytes are not valid UTF-8.
///
/// # Examples
///
/// ```
/// use newsbot::slack::command_parser::decode_url_component;
///
/// assert_eq!(decode_url_component("hello%20world").unwrap(), "hello world");
/// assert_eq!(decode_url_component("hello+world").unwrap(), "hello world");
/// assert_eq!(decode_url_component("1%2B1").unwrap(), "1+1");
/// ```
pub fn decode_url_component(input: &str) -> Result<String, String> {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| format!("Failed to decode URL component: {e}"))
}

/// Splits a form body into decoded key/value pairs. Later duplicates win.
///
/// # Errors
///
/// Returns an error message if any key or value fails to decode.
pub fn parse_form_pairs(form_data: &str) -> Result<HashMap<String, String>, String> {
    let mut map = HashMap::new();

    for pair in form_data.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_url_component(raw_key).map_err(|e| format!("Failed to decode key: {e}"))?;
        let value =
            decode_url_component(raw_value).map_err(|e| format!("Failed to decode value: {e}"))?;
        map.insert(key, value);
    }

    Ok(map)
}

/// Parses URL-encoded form data into a [`SlackCommandEvent`].
///
/// Missing fields default to empty strings; the caller decides which of them matter.
///
/// # Errors
///
/// Returns an error message if the body contains an undecodable component.
///
/// # Examples
///
/// ```
/// use newsbot::slack::command_parser::parse_form_data;
///
/// let form_data = "token=abc123&team_id=T123&team_domain=example&\
///                  channel_id=C123&channel_name=general&user_id=U123&\
///                  user_name=username&command=%2Fnews&text=stories+arts&\
///                  response_url=https%3A%2F%2Fhooks.slack.com%2F&\
///                  trigger_id=123.456";
///
/// let event = parse_form_data(form_data).unwrap();
/// assert_eq!(event.command, "/news");
/// assert_eq!(event.text, "stories arts");
/// ```
pub fn parse_form_data(form_data: &str) -> Result<SlackCommandEvent, String> {
    let mut map = parse_form_pairs(form_data)?;
    let mut take = |name: &str| map.remove(name).unwrap_or_default();

    Ok(SlackCommandEvent {
        token: take("token"),
        team_id: take("team_id"),
        team_domain: take("team_domain"),
        channel_id: take("channel_id"),
        channel_name: take("channel_name"),
        user_id: take("user_id"),
        user_name: take("user_name"),
        command: take("command"),
        text: take("text"),
        response_url: take("response_url"),
        trigger_id: take("trigger_id"),
    })
}
