//! News search API client.

use chrono::{NaiveDateTime, TimeZone, Utc};
use daumier_core::{Credentials, NewsArticle};
use daumier_error::{NewsError, NewsErrorKind};
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Production base URL for the news search API.
const NEWS_API_BASE: &str = "https://newsdata.io";

/// Maximum number of articles returned to callers.
///
/// This is a caller-facing contract, not an implementation detail: callers
/// may rely on "at most 10".
const MAX_ARTICLES: usize = 10;

/// Timestamp format the news API uses for `pubDate`.
const PUB_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Client for the news search API.
///
/// Fetches latest headlines scoped to India in English. Upstream payloads
/// with a missing or non-array `results` field are normalized to an empty
/// list: "no results" and "malformed results" both mean nothing usable
/// came back.
pub struct NewsClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for NewsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl NewsClient {
    /// Creates a client against the production news API.
    pub fn new(credentials: &Credentials) -> Self {
        Self::with_base_url(credentials, NEWS_API_BASE)
    }

    /// Creates a client against an explicit base URL, for tests.
    pub fn with_base_url(credentials: &Credentials, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: credentials.news_api_key().to_string(),
            base_url: base_url.into(),
        }
    }

    /// Fetches up to [`MAX_ARTICLES`] latest articles for the given topic.
    ///
    /// A blank or whitespace-only topic omits the topic filter entirely, so
    /// general regional news is returned instead of an empty-result search.
    #[instrument(skip(self))]
    pub async fn fetch(&self, topic: &str) -> Result<Vec<NewsArticle>, NewsError> {
        let url = format!("{}/api/1/latest", self.base_url);
        let size = MAX_ARTICLES.to_string();

        let mut query: Vec<(&str, &str)> = vec![
            ("apikey", self.api_key.as_str()),
            ("country", "in"),
            ("language", "en"),
            ("size", size.as_str()),
        ];
        let topic = topic.trim();
        if !topic.is_empty() {
            query.push(("q", topic));
        }

        debug!(url = %url, topic = %topic, "News API GET");

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| NewsError::new(NewsErrorKind::RequestFailed(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::new(NewsErrorKind::Status {
                status_code: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("unknown").to_string(),
            }));
        }

        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "News API body was not JSON, treating as no results");
                return Ok(Vec::new());
            }
        };

        let articles = match body.get("results").and_then(Value::as_array) {
            Some(results) => results.iter().map(article_from_value).collect(),
            None => {
                debug!("News API payload had no results array");
                Vec::new()
            }
        };

        let mut articles: Vec<NewsArticle> = articles;
        articles.truncate(MAX_ARTICLES);
        debug!(count = articles.len(), "News articles fetched");
        Ok(articles)
    }
}

/// Maps one upstream article object into a [`NewsArticle`], tolerating
/// missing or null fields.
fn article_from_value(value: &Value) -> NewsArticle {
    let text = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    let published_at = value
        .get("pubDate")
        .and_then(Value::as_str)
        .and_then(|raw| NaiveDateTime::parse_from_str(raw, PUB_DATE_FORMAT).ok())
        .map(|naive| Utc.from_utc_datetime(&naive));

    NewsArticle {
        title: text("title"),
        description: text("description"),
        link: text("link"),
        published_at,
    }
}
