//! News search API error types.

/// News-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum NewsErrorKind {
    /// Transport-level failure reaching the news API
    #[display("News API request failed: {}", _0)]
    RequestFailed(String),
    /// Non-success HTTP status from the news API
    #[display("News API error {}: {}", status_code, status_text)]
    Status {
        /// HTTP status code
        status_code: u16,
        /// HTTP status text
        status_text: String,
    },
}

/// News error with source location tracking.
///
/// # Examples
///
/// ```
/// use daumier_error::{NewsError, NewsErrorKind};
///
/// let err = NewsError::new(NewsErrorKind::Status {
///     status_code: 401,
///     status_text: "Unauthorized".to_string(),
/// });
/// assert!(format!("{}", err).contains("401"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("News Error: {} at line {} in {}", kind, line, file)]
pub struct NewsError {
    /// The kind of error that occurred
    pub kind: NewsErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl NewsError {
    /// Create a new NewsError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NewsErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
