//! Block Kit rendering for top-stories, help and error replies.

use serde_json::{Value, json};

use crate::core::models::Article;
use crate::errors::NewsError;

pub const TOP_STORIES_HEADER: &str = "Here are the top stories 🗞";
pub const HELP_HEADER: &str = "How to use";
pub const HELP_PROMPT: &str = "Choose a news section";
pub const SECTION_SELECT_ACTION_ID: &str = "news_section";

pub const INVALID_SECTION_MESSAGE: &str = "⚠️ That's not a valid news section! Try requesting `/news help` to learn how to use this app!";
pub const GENERIC_FAILURE_MESSAGE: &str =
    "⚠️ Oops, something went wrong on our side. Try again later!";

/// Sections offered in the help menu as `(label, value)`.
pub const HELP_MENU_SECTIONS: [(&str, &str); 3] = [
    ("General", "home"),
    ("Arts", "arts"),
    ("Politics", "politics"),
];

/// Escape the three characters Slack treats as control sequences in mrkdwn.
#[must_use]
pub fn escape_mrkdwn(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Percent-encode the characters that would end a `<url|text>` link early.
#[must_use]
pub fn escape_link_url(url: &str) -> String {
    url.replace('<', "%3C")
        .replace('>', "%3E")
        .replace('|', "%7C")
}

fn header_block(text: &str) -> Value {
    json!({
        "type": "header",
        "text": { "type": "plain_text", "text": text, "emoji": true }
    })
}

fn divider_block() -> Value {
    json!({ "type": "divider" })
}

fn article_block(article: &Article) -> Value {
    json!({
        "type": "section",
        "text": {
            "type": "mrkdwn",
            "text": format!(
                "<{}|{}>\n{}",
                escape_link_url(&article.url),
                escape_mrkdwn(&article.title),
                escape_mrkdwn(&article.abstract_text)
            )
        }
    })
}

/// Header followed by a linked section and a divider per article.
#[must_use]
pub fn render_top_stories(articles: &[Article]) -> Vec<Value> {
    let mut blocks = Vec::with_capacity(1 + articles.len() * 2);
    blocks.push(header_block(TOP_STORIES_HEADER));
    for article in articles {
        blocks.push(article_block(article));
        blocks.push(divider_block());
    }
    blocks
}

/// Header, divider and a section-picker menu.
#[must_use]
pub fn render_help() -> Vec<Value> {
    let options: Vec<Value> = HELP_MENU_SECTIONS
        .iter()
        .map(|(label, value)| {
            json!({
                "text": { "type": "plain_text", "text": label },
                "value": value
            })
        })
        .collect();

    vec![
        header_block(HELP_HEADER),
        divider_block(),
        json!({
            "type": "section",
            "text": { "type": "mrkdwn", "text": HELP_PROMPT },
            "accessory": {
                "type": "static_select",
                "action_id": SECTION_SELECT_ACTION_ID,
                "placeholder": { "type": "plain_text", "text": "Select a section" },
                "options": options
            }
        }),
    ]
}

/// User-facing text for a failed fetch. Details of upstream failures stay in the logs.
#[must_use]
pub fn error_message(error: &NewsError) -> &'static str {
    match error {
        NewsError::InvalidSection(_) => INVALID_SECTION_MESSAGE,
        NewsError::Upstream(_) => GENERIC_FAILURE_MESSAGE,
    }
}
