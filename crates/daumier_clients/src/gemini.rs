//! Generative caption client for the Gemini REST API.

use daumier_core::Credentials;
use daumier_error::{CaptionError, CaptionErrorKind};
use serde_json::{json, Value};
use tracing::{debug, instrument};

/// Production base URL for the Gemini API.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Client for single-turn caption generation.
///
/// This component's job ends at "raw text out": it builds the prompt,
/// submits it, and extracts the first text fragment of the first
/// candidate. Structural validation of that text is the caption parser's
/// concern ([`crate::parse_caption`]).
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Creates a client against the production Gemini API.
    pub fn new(credentials: &Credentials) -> Self {
        Self::with_base_url(credentials, GEMINI_API_BASE)
    }

    /// Creates a client against an explicit base URL, for tests.
    pub fn with_base_url(credentials: &Credentials, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: credentials.gemini_api_key().to_string(),
            model: credentials.gemini_model().to_string(),
            base_url: base_url.into(),
        }
    }

    /// Requests a caption for the article and returns the model's raw text.
    ///
    /// Returns `Ok(None)` when the response carries no candidate text;
    /// "no caption produced" is an expected outcome the orchestrator
    /// decides how to react to, not an error.
    #[instrument(skip(self, title, description, template_ids))]
    pub async fn generate(
        &self,
        title: &str,
        description: &str,
        template_ids: &[u64],
    ) -> Result<Option<String>, CaptionError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let prompt = build_prompt(title, description, template_ids);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        debug!(url = %url, model = %self.model, "Gemini API POST");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| CaptionError::new(CaptionErrorKind::RequestFailed(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CaptionError::new(CaptionErrorKind::Status {
                status_code: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("unknown").to_string(),
            }));
        }

        let payload: Value = response.json().await.map_err(|e| {
            CaptionError::new(CaptionErrorKind::RequestFailed(format!(
                "failed to parse model response: {}",
                e
            )))
        })?;

        let text = extract_candidate_text(&payload);
        if text.is_none() {
            debug!("Gemini response carried no candidate text");
        }
        Ok(text)
    }
}

/// Builds the single-turn caption prompt.
fn build_prompt(title: &str, description: &str, template_ids: &[u64]) -> String {
    let ids = template_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "You write meme captions for news stories.\n\
         News title: {title}\n\
         News description: {description}\n\
         Write a funny caption relevant to this news and pick one meme \
         template id from this exact list: {ids}\n\
         Respond with nothing but a JSON object of the shape \
         {{\"image\": number, \"topText\": string, \"bottomText\": string}}."
    )
}

/// Pulls `candidates[0].content.parts[0].text` out of the response payload.
fn extract_candidate_text(payload: &Value) -> Option<String> {
    payload
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(str::to_string)
}
