//! Meme rendering tool.

use crate::tools::{as_template_id, require_str, McpTool};
use crate::{McpError, McpResult};
use async_trait::async_trait;
use daumier_workflow::{ops, NewsMemeWorkflow};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// Tool rendering a meme image from a template and caption texts.
pub struct CreateMemeTool {
    workflow: Arc<NewsMemeWorkflow>,
}

impl CreateMemeTool {
    /// Creates a new meme rendering tool.
    pub fn new(workflow: Arc<NewsMemeWorkflow>) -> Self {
        Self { workflow }
    }
}

#[async_trait]
impl McpTool for CreateMemeTool {
    fn name(&self) -> &str {
        "create_meme"
    }

    fn description(&self) -> &str {
        "Render a meme image from a template id and top/bottom caption texts. Returns the image URL."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "templateId": {
                    "type": "number",
                    "description": "Meme template id"
                },
                "topText": {
                    "type": "string",
                    "description": "Text overlaid at the top"
                },
                "bottomText": {
                    "type": "string",
                    "description": "Text overlaid at the bottom"
                }
            },
            "required": ["templateId", "topText", "bottomText"]
        })
    }

    async fn execute(&self, input: Value) -> McpResult<Value> {
        let template_id = input
            .get("templateId")
            .and_then(as_template_id)
            .ok_or_else(|| McpError::InvalidInput("Missing 'templateId' field".to_string()))?;
        let top_text = require_str(&input, "topText")?;
        let bottom_text = require_str(&input, "bottomText")?;

        debug!(template_id, "create_meme tool called");

        Ok(ops::create_meme(&self.workflow, template_id, top_text, bottom_text).await)
    }
}
