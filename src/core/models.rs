use serde::{Deserialize, Serialize};

/// A single news item, ready to be rendered into a Slack block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub url: String,
    pub published_at: Option<String>,
}

impl Article {
    /// An article needs at least a title and a link to be worth showing.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.title.trim().is_empty() && !self.url.trim().is_empty()
    }
}

/// Where the deferred reply for one inbound request goes.
///
/// Copied out of the request before the handler returns so the detached task
/// owns everything it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTarget {
    pub channel_id: String,
    pub response_url: String,
}
