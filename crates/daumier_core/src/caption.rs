//! Caption draft types.

use serde::{Deserialize, Serialize};

/// The generative model's proposed meme content.
///
/// Produced only by the caption parser after defensive validation of the
/// model's raw text output. The template id is whatever the model chose;
/// membership in the offered id set is not re-verified here.
///
/// # Examples
///
/// ```
/// use daumier_core::CaptionDraft;
///
/// let draft = CaptionDraft {
///     template_id: 87,
///     top_text: "When the match starts".to_string(),
///     bottom_text: "And the rain starts too".to_string(),
/// };
///
/// assert_eq!(draft.template_id, 87);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionDraft {
    /// Template id selected by the model
    pub template_id: u64,
    /// Text overlaid at the top of the meme
    pub top_text: String,
    /// Text overlaid at the bottom of the meme
    pub bottom_text: String,
}
