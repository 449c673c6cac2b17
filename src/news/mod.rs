//! News gateway: the capability the bot needs from a news provider, and the
//! New York Times adapter that implements it.

pub mod nytimes;

use async_trait::async_trait;

use crate::core::models::Article;
use crate::errors::NewsError;

pub use nytimes::NyTimes;

/// Anything that can hand back top stories for a named section.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch up to `top_n` well-formed articles for `section`, in upstream order.
    ///
    /// # Errors
    ///
    /// [`NewsError::InvalidSection`] when the section is not recognized,
    /// [`NewsError::Upstream`] for every other failure.
    async fn top_stories(&self, section: &str, top_n: usize) -> Result<Vec<Article>, NewsError>;

    /// Recognized section identifiers, in display order.
    fn supported_sections(&self) -> &[&'static str];

    /// Display label for a section identifier, if the provider knows one.
    fn user_friendly_section(&self, section: &str) -> Option<&str>;
}

/// Drop articles without a title or link, keeping upstream order, and cap the result.
///
/// Filtering happens before the cap, so a malformed item never takes one of the
/// `top_n` slots: up to `top_n` well-formed articles are returned even when some
/// of the first `top_n` upstream items are unusable.
#[must_use]
pub fn retain_well_formed<I>(articles: I, top_n: usize) -> Vec<Article>
where
    I: IntoIterator<Item = Article>,
{
    articles
        .into_iter()
        .filter(Article::is_well_formed)
        .take(top_n)
        .collect()
}
