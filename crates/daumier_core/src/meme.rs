//! Rendered meme types.

use crate::CaptionDraft;
use serde::{Deserialize, Serialize};

/// Final rendered artifact from the captioning service.
///
/// Only produced after the rendering service reports success. The service
/// may omit the URL despite reporting success; that is a valid-but-empty
/// outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemeResult {
    /// URL of the rendered meme image, when the service supplied one
    pub url: Option<String>,
}

/// Composite result of one end-to-end news-to-meme workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsMeme {
    /// Title of the selected article
    pub article_title: String,
    /// Description of the selected article
    pub article_description: String,
    /// The caption the model produced
    pub caption: CaptionDraft,
    /// URL of the rendered meme image
    pub url: Option<String>,
}
