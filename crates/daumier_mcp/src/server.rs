//! MCP server implementation.
//!
//! Speaks JSON-RPC 2.0 over newline-delimited stdio, the framing MCP
//! clients use for local servers. Each request line gets at most one
//! response line; notifications get none.

use crate::tools::ToolRegistry;
use crate::{McpError, McpResult};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, instrument, warn};

/// MCP protocol revision this server implements.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// MCP server for Daumier.
pub struct McpServer {
    name: String,
    version: String,
    tools: ToolRegistry,
}

impl McpServer {
    /// Creates a new server builder.
    pub fn builder() -> McpServerBuilder {
        McpServerBuilder::default()
    }

    /// Runs the server using stdio transport until stdin closes.
    #[instrument(skip(self))]
    pub async fn run_stdio(self) -> McpResult<()> {
        info!(
            name = %self.name,
            version = %self.version,
            tools = self.tools.len(),
            "MCP server ready on stdio"
        );

        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        self.serve(stdin, &mut stdout).await
    }

    /// Drives the request loop over arbitrary reader/writer pairs.
    ///
    /// Split out from [`run_stdio`](Self::run_stdio) so tests can feed
    /// scripted input and capture output.
    pub async fn serve<R, W>(self, reader: BufReader<R>, writer: &mut W) -> McpResult<()>
    where
        R: tokio::io::AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| McpError::TransportError(e.to_string()))?
        {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(line).await {
                write_message(writer, &response).await?;
            }
        }

        info!("MCP client disconnected, shutting down");
        Ok(())
    }

    /// Handles one raw input line, returning the response to write, if any.
    async fn handle_line(&self, line: &str) -> Option<Value> {
        let message: Value = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "failed to parse JSON-RPC message");
                return Some(error_response(
                    Value::Null,
                    PARSE_ERROR,
                    &format!("Parse error: {e}"),
                ));
            }
        };

        let id = message.get("id").cloned();
        let params = message.get("params").cloned().unwrap_or(Value::Null);
        let method = match message.get("method").and_then(Value::as_str) {
            Some(method) => method.to_string(),
            None => {
                // An id-bearing message without a method is a malformed
                // request; anything else gets no reply.
                return id.map(|id| {
                    warn!("request carried an id but no method");
                    error_response(id, INVALID_REQUEST, "Invalid request: missing method")
                });
            }
        };

        debug!(method = %method, "handling request");

        // Notifications carry no id and expect no reply.
        let id = match id {
            Some(id) => id,
            None => {
                if method == "notifications/initialized" {
                    info!("MCP client initialized");
                }
                return None;
            }
        };

        Some(match method.as_str() {
            "initialize" => self.handle_initialize(id),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tools_call(id, params).await,
            "ping" => success_response(id, json!({})),
            other => {
                warn!(method = %other, "unknown method");
                error_response(id, METHOD_NOT_FOUND, &format!("Method not found: {other}"))
            }
        })
    }

    fn handle_initialize(&self, id: Value) -> Value {
        success_response(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": self.name,
                    "version": self.version,
                }
            }),
        )
    }

    fn handle_tools_list(&self, id: Value) -> Value {
        let tools: Vec<Value> = self
            .tools
            .list()
            .iter()
            .map(|tool| {
                json!({
                    "name": tool.name(),
                    "description": tool.description(),
                    "inputSchema": tool.input_schema(),
                })
            })
            .collect();

        success_response(id, json!({ "tools": tools }))
    }

    async fn handle_tools_call(&self, id: Value, params: Value) -> Value {
        let name = match params.get("name").and_then(Value::as_str) {
            Some(name) => name,
            None => {
                return error_response(id, INVALID_PARAMS, "Missing tool name");
            }
        };
        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        match self.tools.execute(name, arguments).await {
            Ok(output) => success_response(
                id,
                json!({
                    "content": [{ "type": "text", "text": output.to_string() }],
                    "isError": false,
                }),
            ),
            Err(McpError::ToolNotFound(name)) => {
                error_response(id, INVALID_PARAMS, &format!("Unknown tool: {name}"))
            }
            Err(e) => {
                warn!(tool = %name, error = %e, "tool execution failed");
                success_response(
                    id,
                    json!({
                        "content": [{ "type": "text", "text": e.to_string() }],
                        "isError": true,
                    }),
                )
            }
        }
    }
}

/// Builder for MCP server.
#[derive(Default)]
pub struct McpServerBuilder {
    name: Option<String>,
    version: Option<String>,
    tools: Option<ToolRegistry>,
}

impl McpServerBuilder {
    /// Sets the server name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the server version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the tool registry.
    pub fn tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Builds the server.
    pub fn build(self) -> McpResult<McpServer> {
        Ok(McpServer {
            name: self.name.unwrap_or_else(|| "daumier".to_string()),
            version: self
                .version
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            tools: self.tools.unwrap_or_default(),
        })
    }
}

const PARSE_ERROR: i64 = -32700;
const INVALID_REQUEST: i64 = -32600;
const METHOD_NOT_FOUND: i64 = -32601;
const INVALID_PARAMS: i64 = -32602;

fn success_response(id: Value, result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

fn error_response(id: Value, code: i64, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": code, "message": message }
    })
}

async fn write_message<W: AsyncWrite + Unpin>(writer: &mut W, message: &Value) -> McpResult<()> {
    let mut payload = message.to_string();
    payload.push('\n');
    writer
        .write_all(payload.as_bytes())
        .await
        .map_err(|e| McpError::TransportError(e.to_string()))?;
    writer
        .flush()
        .await
        .map_err(|e| McpError::TransportError(e.to_string()))
}
