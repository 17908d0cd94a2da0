//! End-to-end news meme tool.

use crate::tools::McpTool;
use crate::{McpError, McpResult};
use async_trait::async_trait;
use daumier_core::WorkflowRequest;
use daumier_workflow::{ops, NewsMemeWorkflow};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// Tool running the full news-to-meme workflow in one call.
pub struct GenerateNewsMemeTool {
    workflow: Arc<NewsMemeWorkflow>,
}

impl GenerateNewsMemeTool {
    /// Creates a new end-to-end workflow tool.
    pub fn new(workflow: Arc<NewsMemeWorkflow>) -> Self {
        Self { workflow }
    }
}

#[async_trait]
impl McpTool for GenerateNewsMemeTool {
    fn name(&self) -> &str {
        "generate_news_meme"
    }

    fn description(&self) -> &str {
        "Fetch news, pick an article, generate a caption and render the meme, all in one call."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "Optional topic to search news for"
                },
                "articleIndex": {
                    "type": "integer",
                    "description": "Which fetched article to use (default 0)",
                    "default": 0,
                    "minimum": 0
                }
            }
        })
    }

    async fn execute(&self, input: Value) -> McpResult<Value> {
        // A present-but-unusable index is a caller mistake, not "default to 0".
        let article_index = match input.get("articleIndex") {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.as_u64().ok_or_else(|| {
                McpError::InvalidInput(
                    "'articleIndex' must be a non-negative integer".to_string(),
                )
            })? as usize),
        };

        let request = WorkflowRequest {
            topic: input
                .get("topic")
                .and_then(Value::as_str)
                .map(str::to_string),
            article_index,
        };

        debug!(topic = ?request.topic, index = request.index(), "generate_news_meme tool called");

        Ok(ops::generate_news_meme(&self.workflow, &request).await)
    }
}
