//! Workflow request types.

use serde::{Deserialize, Serialize};

/// One end-to-end workflow invocation.
///
/// # Examples
///
/// ```
/// use daumier_core::WorkflowRequest;
///
/// let request = WorkflowRequest {
///     topic: Some("cricket".to_string()),
///     article_index: None,
/// };
///
/// assert_eq!(request.index(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRequest {
    /// Optional free-text topic; blank means general regional news
    pub topic: Option<String>,
    /// Which fetched article to caption; defaults to the first
    pub article_index: Option<usize>,
}

impl WorkflowRequest {
    /// The effective article index (default 0).
    pub fn index(&self) -> usize {
        self.article_index.unwrap_or(0)
    }
}
