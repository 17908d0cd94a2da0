//! Meme template types.

use serde::{Deserialize, Serialize};

/// A meme template offered by the rendering service.
///
/// The rendering service serves template ids as numeric strings; the
/// catalog client coerces them to integers before constructing this type,
/// so `id` is always a positive integer the service recognizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRef {
    /// Numeric template identifier
    pub id: u64,
    /// Display name of the template
    pub name: String,
}
