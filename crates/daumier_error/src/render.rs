//! Meme rendering error types.

/// Meme rendering error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RenderErrorKind {
    /// Transport-level failure reaching the rendering API
    #[display("Meme render request failed: {}", _0)]
    RequestFailed(String),
    /// Non-success HTTP status from the rendering API
    #[display("Meme render error {}: {}", status_code, status_text)]
    Status {
        /// HTTP status code
        status_code: u16,
        /// HTTP status text
        status_text: String,
    },
    /// The rendering service reported success: false, message carried verbatim
    #[display("Meme render rejected: {}", _0)]
    Rejected(String),
}

/// Meme rendering error with source location tracking.
///
/// # Examples
///
/// ```
/// use daumier_error::{RenderError, RenderErrorKind};
///
/// let err = RenderError::new(RenderErrorKind::Rejected("No template found".to_string()));
/// assert!(format!("{}", err).contains("No template found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Render Error: {} at line {} in {}", kind, line, file)]
pub struct RenderError {
    /// The kind of error that occurred
    pub kind: RenderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RenderError {
    /// Create a new RenderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RenderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
