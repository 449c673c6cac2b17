//! New York Times Top Stories API adapter.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{info, warn};

use super::{NewsSource, retain_well_formed};
use crate::core::models::Article;
use crate::errors::NewsError;

pub const NYT_API_BASE_URL: &str = "https://api.nytimes.com";

const SECTIONS: [(&str, &str); 18] = [
    ("home", "Home"),
    ("arts", "Arts"),
    ("automobile", "Automobile"),
    ("books", "Books"),
    ("business", "Business"),
    ("fashion", "Fashion"),
    ("food", "Food"),
    ("health", "Health"),
    ("movies", "Movies"),
    ("politics", "Politics"),
    ("realestate", "Real Estate"),
    ("science", "Science"),
    ("sports", "Sports"),
    ("technology", "Technology"),
    ("theater", "Theater"),
    ("travel", "Travel"),
    ("us", "U.S."),
    ("world", "World"),
];

const SECTION_IDS: [&str; 18] = [
    "home",
    "arts",
    "automobile",
    "books",
    "business",
    "fashion",
    "food",
    "health",
    "movies",
    "politics",
    "realestate",
    "science",
    "sports",
    "technology",
    "theater",
    "travel",
    "us",
    "world",
];

#[derive(Debug, Deserialize)]
struct TopStoriesResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    results: Vec<NytStory>,
}

#[derive(Debug, Deserialize)]
struct NytStory {
    title: Option<String>,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
    url: Option<String>,
    short_url: Option<String>,
    published_date: Option<String>,
}

impl From<NytStory> for Article {
    fn from(story: NytStory) -> Self {
        let url = story
            .short_url
            .filter(|u| !u.trim().is_empty())
            .or(story.url)
            .unwrap_or_default();

        Article {
            title: story.title.unwrap_or_default(),
            abstract_text: story.abstract_text.unwrap_or_default(),
            url,
            published_at: story.published_date.as_deref().and_then(format_published_date),
        }
    }
}

/// Format an RFC 3339 timestamp as e.g. `January 02, 2006` in local time.
#[must_use]
pub fn format_published_date(raw: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|d| d.with_timezone(&Local).format("%B %d, %Y").to_string())
}

/// Client for the NYT Top Stories API.
pub struct NyTimes {
    api_key: String,
    base_url: String,
    http: Client,
}

impl NyTimes {
    /// Build a client. `timeout` bounds each upstream request; `None` keeps the
    /// HTTP client's default.
    #[must_use]
    pub fn new(api_key: String, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build NYT HTTP client, using defaults: {}", e);
            Client::new()
        });

        Self {
            api_key,
            base_url: NYT_API_BASE_URL.to_string(),
            http,
        }
    }

    /// Point the client at another host, e.g. a mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn is_supported(section: &str) -> bool {
        SECTION_IDS.contains(&section)
    }
}

#[async_trait]
impl NewsSource for NyTimes {
    async fn top_stories(&self, section: &str, top_n: usize) -> Result<Vec<Article>, NewsError> {
        if !Self::is_supported(section) {
            return Err(NewsError::InvalidSection(section.to_string()));
        }

        let endpoint = format!("{}/svc/topstories/v2/{}.json", self.base_url, section);
        let resp = self
            .http
            .get(endpoint)
            .query(&[("api-key", self.api_key.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(NewsError::InvalidSection(section.to_string()));
        }
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            return Err(NewsError::Upstream(format!(
                "top stories request failed: status={status} body={body}"
            )));
        }

        let payload: TopStoriesResponse = resp.json().await?;
        if payload.status != "OK" {
            return Err(NewsError::Upstream(format!(
                "top stories response status was {:?}",
                payload.status
            )));
        }

        let received = payload.results.len();
        let articles = retain_well_formed(payload.results.into_iter().map(Article::from), top_n);
        info!(
            section = %section,
            received,
            returned = articles.len(),
            "Fetched NYT top stories"
        );

        Ok(articles)
    }

    fn supported_sections(&self) -> &[&'static str] {
        &SECTION_IDS
    }

    fn user_friendly_section(&self, section: &str) -> Option<&str> {
        SECTIONS
            .iter()
            .find(|(id, _)| *id == section)
            .map(|(_, label)| *label)
    }
}
