//! Meme template catalog client.

use daumier_core::TemplateRef;
use daumier_error::{TemplateError, TemplateErrorKind};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

/// Production base URL for the rendering service.
const IMGFLIP_API_BASE: &str = "https://api.imgflip.com";

/// Maximum number of catalog entries returned to callers.
const MAX_TEMPLATES: usize = 100;

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<CatalogData>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct CatalogData {
    #[serde(default)]
    memes: Vec<Value>,
}

/// Client for the meme template catalog.
///
/// The catalog endpoint is unauthenticated. Entries come back in whatever
/// order the upstream serves them (assumed popularity-ranked) and are not
/// re-sorted here.
pub struct TemplateClient {
    client: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for TemplateClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Default for TemplateClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateClient {
    /// Creates a client against the production rendering service.
    pub fn new() -> Self {
        Self::with_base_url(IMGFLIP_API_BASE)
    }

    /// Creates a client against an explicit base URL, for tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches the template catalog, keeping id and name of the first
    /// [`MAX_TEMPLATES`] entries.
    #[instrument(skip(self))]
    pub async fn fetch(&self) -> Result<Vec<TemplateRef>, TemplateError> {
        let url = format!("{}/get_memes", self.base_url);
        debug!(url = %url, "Template catalog GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TemplateError::new(TemplateErrorKind::RequestFailed(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TemplateError::new(TemplateErrorKind::Status {
                status_code: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("unknown").to_string(),
            }));
        }

        let body: CatalogResponse = response.json().await.map_err(|e| {
            TemplateError::new(TemplateErrorKind::RequestFailed(format!(
                "failed to parse catalog response: {}",
                e
            )))
        })?;

        if !body.success {
            return Err(TemplateError::new(TemplateErrorKind::Rejected(
                body.error_message
                    .unwrap_or_else(|| "unknown catalog failure".to_string()),
            )));
        }

        let templates: Vec<TemplateRef> = body
            .data
            .unwrap_or_default()
            .memes
            .iter()
            .filter_map(template_from_value)
            .take(MAX_TEMPLATES)
            .collect();

        debug!(count = templates.len(), "Templates fetched");
        Ok(templates)
    }
}

/// Maps one catalog entry into a [`TemplateRef`].
///
/// The service serves ids as numeric strings; accept either a JSON number
/// or a numeric string and drop entries with neither.
fn template_from_value(value: &Value) -> Option<TemplateRef> {
    let id = match value.get("id")? {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.parse().ok()?,
        _ => return None,
    };
    let name = value.get("name")?.as_str()?.to_string();
    Some(TemplateRef { id, name })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn template_from_value_accepts_string_ids() {
        let value = json!({ "id": "181913649", "name": "Drake Hotline Bling" });
        let template = template_from_value(&value).unwrap();
        assert_eq!(template.id, 181913649);
        assert_eq!(template.name, "Drake Hotline Bling");
    }

    #[test]
    fn template_from_value_accepts_numeric_ids() {
        let value = json!({ "id": 87, "name": "Grumpy Cat" });
        assert_eq!(template_from_value(&value).unwrap().id, 87);
    }

    #[test]
    fn template_from_value_drops_invalid_entries() {
        assert!(template_from_value(&json!({ "id": "not-a-number", "name": "x" })).is_none());
        assert!(template_from_value(&json!({ "name": "no id" })).is_none());
        assert!(template_from_value(&json!({ "id": "42" })).is_none());
    }
}
