//! News fetch tool.

use crate::tools::McpTool;
use crate::McpResult;
use async_trait::async_trait;
use daumier_workflow::{ops, NewsMemeWorkflow};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// Tool exposing the latest Indian news headlines.
pub struct FetchNewsTool {
    workflow: Arc<NewsMemeWorkflow>,
}

impl FetchNewsTool {
    /// Creates a new news fetch tool.
    pub fn new(workflow: Arc<NewsMemeWorkflow>) -> Self {
        Self { workflow }
    }
}

#[async_trait]
impl McpTool for FetchNewsTool {
    fn name(&self) -> &str {
        "fetch_indian_news"
    }

    fn description(&self) -> &str {
        "Fetch the latest Indian news articles, optionally filtered by a topic. Returns at most 10 articles."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "Optional topic to search for (e.g. 'cricket'). Blank returns general news."
                }
            }
        })
    }

    async fn execute(&self, input: Value) -> McpResult<Value> {
        let topic = input.get("topic").and_then(Value::as_str);
        debug!(topic = ?topic, "fetch_indian_news tool called");

        Ok(ops::fetch_indian_news(&self.workflow, topic).await)
    }
}
