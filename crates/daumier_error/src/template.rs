//! Template catalog error types.

/// Template catalog error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TemplateErrorKind {
    /// Transport-level failure reaching the catalog API
    #[display("Template catalog request failed: {}", _0)]
    RequestFailed(String),
    /// Non-success HTTP status from the catalog API
    #[display("Template catalog error {}: {}", status_code, status_text)]
    Status {
        /// HTTP status code
        status_code: u16,
        /// HTTP status text
        status_text: String,
    },
    /// The catalog payload reported success: false
    #[display("Template catalog rejected the request: {}", _0)]
    Rejected(String),
}

/// Template catalog error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Template Error: {} at line {} in {}", kind, line, file)]
pub struct TemplateError {
    /// The kind of error that occurred
    pub kind: TemplateErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TemplateError {
    /// Create a new TemplateError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TemplateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
