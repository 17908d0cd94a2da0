//! Caption generation tool.

use crate::tools::{as_template_id, require_str, McpTool};
use crate::{McpError, McpResult};
use async_trait::async_trait;
use daumier_workflow::{ops, NewsMemeWorkflow};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// Tool generating a meme caption for a news article.
pub struct GenerateCaptionTool {
    workflow: Arc<NewsMemeWorkflow>,
}

impl GenerateCaptionTool {
    /// Creates a new caption generation tool.
    pub fn new(workflow: Arc<NewsMemeWorkflow>) -> Self {
        Self { workflow }
    }
}

#[async_trait]
impl McpTool for GenerateCaptionTool {
    fn name(&self) -> &str {
        "generate_meme_caption"
    }

    fn description(&self) -> &str {
        "Generate a meme caption for a news article using the generative model. \
         The model picks a template from the supplied id list."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "News article title"
                },
                "description": {
                    "type": "string",
                    "description": "News article description"
                },
                "availableTemplates": {
                    "type": "array",
                    "items": { "type": "number" },
                    "description": "Template ids the model may choose from"
                }
            },
            "required": ["title", "description", "availableTemplates"]
        })
    }

    async fn execute(&self, input: Value) -> McpResult<Value> {
        let title = require_str(&input, "title")?;
        let description = require_str(&input, "description")?;
        let templates = input
            .get("availableTemplates")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                McpError::InvalidInput("Missing 'availableTemplates' field".to_string())
            })?;
        let template_ids: Vec<u64> = templates.iter().filter_map(as_template_id).collect();

        debug!(title = %title, templates = template_ids.len(), "generate_meme_caption tool called");

        Ok(ops::generate_meme_caption(&self.workflow, title, description, &template_ids).await)
    }
}
