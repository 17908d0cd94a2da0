//! Caption generation error types.

/// Caption generation error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CaptionErrorKind {
    /// Transport-level failure reaching the generative model API
    #[display("Caption generation request failed: {}", _0)]
    RequestFailed(String),
    /// Non-success HTTP status from the generative model API
    #[display("Caption generation error {}: {}", status_code, status_text)]
    Status {
        /// HTTP status code
        status_code: u16,
        /// HTTP status text
        status_text: String,
    },
}

/// Caption generation error with source location tracking.
///
/// Note that malformed model output is *not* an error: the caption parser
/// collapses every unusable payload into a "no caption" result instead.
/// This type only covers transport and status failures.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Caption Error: {} at line {} in {}", kind, line, file)]
pub struct CaptionError {
    /// The kind of error that occurred
    pub kind: CaptionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CaptionError {
    /// Create a new CaptionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CaptionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
