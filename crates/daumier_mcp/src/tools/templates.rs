//! Template catalog tool.

use crate::tools::McpTool;
use crate::McpResult;
use async_trait::async_trait;
use daumier_workflow::{ops, NewsMemeWorkflow};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// Tool listing the meme templates the rendering service offers.
pub struct GetTemplatesTool {
    workflow: Arc<NewsMemeWorkflow>,
}

impl GetTemplatesTool {
    /// Creates a new template catalog tool.
    pub fn new(workflow: Arc<NewsMemeWorkflow>) -> Self {
        Self { workflow }
    }
}

#[async_trait]
impl McpTool for GetTemplatesTool {
    fn name(&self) -> &str {
        "get_meme_templates"
    }

    fn description(&self) -> &str {
        "List available meme templates from the rendering service. Returns at most 100 entries in popularity order."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _input: Value) -> McpResult<Value> {
        debug!("get_meme_templates tool called");

        Ok(ops::get_meme_templates(&self.workflow).await)
    }
}
