//! Tool implementations for the MCP server.

mod caption;
mod meme;
mod news;
mod news_meme;
mod server_info;
mod templates;

pub use caption::GenerateCaptionTool;
pub use meme::CreateMemeTool;
pub use news::FetchNewsTool;
pub use news_meme::GenerateNewsMemeTool;
pub use server_info::ServerInfoTool;
pub use templates::GetTemplatesTool;

use crate::{McpError, McpResult};
use async_trait::async_trait;
use daumier_workflow::NewsMemeWorkflow;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Trait for MCP tools.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Returns the tool name.
    fn name(&self) -> &str;

    /// Returns the tool description for the LLM.
    fn description(&self) -> &str;

    /// Returns the input schema as JSON Schema.
    fn input_schema(&self) -> Value;

    /// Executes the tool with the given input.
    async fn execute(&self, input: Value) -> McpResult<Value>;
}

/// Registry for managing MCP tools.
#[derive(Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn McpTool>>,
    order: Vec<String>,
}

impl ToolRegistry {
    /// Creates an empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Creates a registry exposing the five news-meme operations plus
    /// server info, all backed by the given workflow.
    pub fn for_workflow(workflow: Arc<NewsMemeWorkflow>) -> Self {
        let mut registry = Self::new();

        registry.register(Arc::new(FetchNewsTool::new(workflow.clone())));
        registry.register(Arc::new(GetTemplatesTool::new(workflow.clone())));
        registry.register(Arc::new(GenerateCaptionTool::new(workflow.clone())));
        registry.register(Arc::new(CreateMemeTool::new(workflow.clone())));
        registry.register(Arc::new(GenerateNewsMemeTool::new(workflow)));
        registry.register(Arc::new(ServerInfoTool));

        tracing::info!("ToolRegistry initialized with {} tools", registry.len());
        registry
    }

    /// Registers a tool.
    pub fn register(&mut self, tool: Arc<dyn McpTool>) {
        self.order.push(tool.name().to_string());
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Gets a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn McpTool>> {
        self.tools.get(name).cloned()
    }

    /// Lists all registered tools in registration order.
    pub fn list(&self) -> Vec<Arc<dyn McpTool>> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name).cloned())
            .collect()
    }

    /// Executes a tool by name.
    pub async fn execute(&self, name: &str, input: Value) -> McpResult<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| McpError::ToolNotFound(name.to_string()))?;

        tool.execute(input).await
    }

    /// Gets the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Pulls a required string argument out of tool input.
pub(crate) fn require_str<'a>(input: &'a Value, field: &str) -> McpResult<&'a str> {
    input
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| McpError::InvalidInput(format!("Missing '{}' field", field)))
}

/// Coerces a JSON value to a template id, accepting a number or a numeric
/// string.
pub(crate) fn as_template_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
