//! News article types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single news item returned by the news search API.
///
/// Every field is optional on the wire. An article qualifies for caption
/// generation only when both title and description are present and
/// non-empty; the workflow enforces that, not this type.
///
/// # Examples
///
/// ```
/// use daumier_core::NewsArticle;
///
/// let article = NewsArticle {
///     title: Some("Cricket final tonight".to_string()),
///     description: Some("The stadium is sold out".to_string()),
///     link: None,
///     published_at: None,
/// };
///
/// assert!(article.is_captionable());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NewsArticle {
    /// Article headline
    pub title: Option<String>,
    /// Article summary text
    pub description: Option<String>,
    /// Canonical URL of the article
    pub link: Option<String>,
    /// Publication timestamp, when the upstream supplied a parseable one
    pub published_at: Option<DateTime<Utc>>,
}

impl NewsArticle {
    /// Returns true when both title and description are present and non-blank.
    pub fn is_captionable(&self) -> bool {
        let filled = |field: &Option<String>| {
            field
                .as_deref()
                .map(|s| !s.trim().is_empty())
                .unwrap_or(false)
        };
        filled(&self.title) && filled(&self.description)
    }
}
