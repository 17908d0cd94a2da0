//! Workflow orchestration error types.

/// Workflow-level error conditions.
///
/// These carry the caller-facing failure messages for the composite
/// news-to-meme operation. Inner client failures are wrapped in `Failed`
/// with the workflow prefix, preserving the inner message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum WorkflowErrorKind {
    /// The news fetch returned an empty article list
    #[display("No news articles found")]
    NoArticles,
    /// The requested index is out of range or the article lacks title/description
    #[display("Selected article missing title or description")]
    UnusableArticle,
    /// The generative model produced no parseable caption
    #[display("Failed to generate meme caption")]
    NoCaption,
    /// An inner step failed; the inner message is preserved verbatim
    #[display("Failed to generate news meme: {}", _0)]
    Failed(String),
}

/// Workflow error with source location tracking.
///
/// # Examples
///
/// ```
/// use daumier_error::{WorkflowError, WorkflowErrorKind};
///
/// let err = WorkflowError::new(WorkflowErrorKind::NoArticles);
/// assert!(format!("{}", err).contains("No news articles found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Workflow Error: {} at line {} in {}", kind, line, file)]
pub struct WorkflowError {
    /// The kind of error that occurred
    pub kind: WorkflowErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl WorkflowError {
    /// Create a new WorkflowError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: WorkflowErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
