//! Meme rendering client.

use daumier_core::{CaptionDraft, Credentials, MemeResult};
use daumier_error::{RenderError, RenderErrorKind};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Production base URL for the rendering service.
const IMGFLIP_API_BASE: &str = "https://api.imgflip.com";

#[derive(Debug, Deserialize)]
struct RenderResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<RenderData>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct RenderData {
    #[serde(default)]
    url: Option<String>,
}

/// Client for the meme rendering API.
///
/// Submits a template id and the two caption texts as a form-encoded
/// request and returns the rendered image URL. Rendering is delegated
/// entirely to the external service; no image manipulation happens here.
pub struct RenderClient {
    client: reqwest::Client,
    username: String,
    password: String,
    base_url: String,
}

impl std::fmt::Debug for RenderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderClient")
            .field("username", &self.username)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl RenderClient {
    /// Creates a client against the production rendering service.
    pub fn new(credentials: &Credentials) -> Self {
        Self::with_base_url(credentials, IMGFLIP_API_BASE)
    }

    /// Creates a client against an explicit base URL, for tests.
    pub fn with_base_url(credentials: &Credentials, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            username: credentials.imgflip_username().to_string(),
            password: credentials.imgflip_password().to_string(),
            base_url: base_url.into(),
        }
    }

    /// Renders a meme from a caption draft.
    pub async fn render_draft(&self, draft: &CaptionDraft) -> Result<MemeResult, RenderError> {
        self.render(draft.template_id, &draft.top_text, &draft.bottom_text)
            .await
    }

    /// Renders a meme from a template id and the two caption texts.
    ///
    /// A success response without a URL is a valid-but-empty outcome, not
    /// an error. An explicit `success: false` carries the service's own
    /// error message verbatim.
    #[instrument(skip(self, top_text, bottom_text))]
    pub async fn render(
        &self,
        template_id: u64,
        top_text: &str,
        bottom_text: &str,
    ) -> Result<MemeResult, RenderError> {
        let url = format!("{}/caption_image", self.base_url);
        let template_id = template_id.to_string();
        let form = [
            ("template_id", template_id.as_str()),
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
            ("text0", top_text),
            ("text1", bottom_text),
        ];

        debug!(url = %url, template_id = %template_id, "Render API POST");

        let response = self
            .client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| RenderError::new(RenderErrorKind::RequestFailed(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RenderError::new(RenderErrorKind::Status {
                status_code: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("unknown").to_string(),
            }));
        }

        let body: RenderResponse = response.json().await.map_err(|e| {
            RenderError::new(RenderErrorKind::RequestFailed(format!(
                "failed to parse render response: {}",
                e
            )))
        })?;

        if !body.success {
            return Err(RenderError::new(RenderErrorKind::Rejected(
                body.error_message
                    .unwrap_or_else(|| "unknown render failure".to_string()),
            )));
        }

        let url = body.data.unwrap_or_default().url;
        debug!(url = ?url, "Meme rendered");
        Ok(MemeResult { url })
    }
}
