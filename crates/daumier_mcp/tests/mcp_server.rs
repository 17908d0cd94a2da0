//! Tests for the stdio JSON-RPC server against scripted input.

use daumier_clients::{GeminiClient, NewsClient, RenderClient, TemplateClient};
use daumier_core::Credentials;
use daumier_mcp::{McpServer, ToolRegistry, PROTOCOL_VERSION};
use daumier_workflow::NewsMemeWorkflow;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::io::BufReader;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn workflow_against(server: &MockServer) -> Arc<NewsMemeWorkflow> {
    let credentials = Credentials::from_parts("news-key", "gemini-key", "user", "pass");
    Arc::new(NewsMemeWorkflow::with_clients(
        NewsClient::with_base_url(&credentials, server.uri()),
        TemplateClient::with_base_url(server.uri()),
        GeminiClient::with_base_url(&credentials, server.uri()),
        RenderClient::with_base_url(&credentials, server.uri()),
    ))
}

fn server_for(workflow: Arc<NewsMemeWorkflow>) -> McpServer {
    McpServer::builder()
        .name("daumier")
        .version("0.0.0-test")
        .tools(ToolRegistry::for_workflow(workflow))
        .build()
        .unwrap()
}

/// Runs the server over scripted input lines and returns the parsed
/// response lines.
async fn exchange(server: McpServer, input: &str) -> Vec<Value> {
    let mut output = Vec::new();
    server
        .serve(BufReader::new(input.as_bytes()), &mut output)
        .await
        .unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

async fn idle_workflow() -> (MockServer, Arc<NewsMemeWorkflow>) {
    let server = MockServer::start().await;
    let workflow = workflow_against(&server);
    (server, workflow)
}

#[tokio::test]
async fn initialize_reports_protocol_and_server_info() {
    let (_mock, workflow) = idle_workflow().await;
    let responses = exchange(
        server_for(workflow),
        "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"initialize\",\"params\":{}}\n",
    )
    .await;

    assert_eq!(responses.len(), 1);
    let result = &responses[0]["result"];
    assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
    assert_eq!(result["serverInfo"]["name"], "daumier");
    assert!(result["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn initialized_notification_gets_no_reply() {
    let (_mock, workflow) = idle_workflow().await;
    let responses = exchange(
        server_for(workflow),
        "{\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}\n\
         {\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"ping\"}\n",
    )
    .await;

    // Only the ping produces output.
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], 2);
    assert!(responses[0]["result"].is_object());
}

#[tokio::test]
async fn tools_list_names_all_six_tools() {
    let (_mock, workflow) = idle_workflow().await;
    let responses = exchange(
        server_for(workflow),
        "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"tools/list\"}\n",
    )
    .await;

    let tools = responses[0]["result"]["tools"].as_array().unwrap();
    let names: Vec<&str> = tools
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "fetch_indian_news",
            "get_meme_templates",
            "generate_meme_caption",
            "create_meme",
            "generate_news_meme",
            "get_server_info",
        ]
    );
    for tool in tools {
        assert!(tool["inputSchema"]["type"] == "object");
        assert!(!tool["description"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn malformed_line_reports_a_parse_error() {
    let (_mock, workflow) = idle_workflow().await;
    let responses = exchange(server_for(workflow), "this is not json\n").await;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["error"]["code"], -32700);
    assert!(responses[0]["id"].is_null());
}

#[tokio::test]
async fn id_bearing_request_without_method_reports_invalid_request() {
    let (_mock, workflow) = idle_workflow().await;
    let responses = exchange(
        server_for(workflow),
        "{\"jsonrpc\":\"2.0\",\"id\":9}\n",
    )
    .await;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], 9);
    assert_eq!(responses[0]["error"]["code"], -32600);
}

#[tokio::test]
async fn unknown_method_reports_method_not_found() {
    let (_mock, workflow) = idle_workflow().await;
    let responses = exchange(
        server_for(workflow),
        "{\"jsonrpc\":\"2.0\",\"id\":7,\"method\":\"resources/list\"}\n",
    )
    .await;

    assert_eq!(responses[0]["error"]["code"], -32601);
    assert!(responses[0]["error"]["message"]
        .as_str()
        .unwrap()
        .contains("resources/list"));
}

#[tokio::test]
async fn unknown_tool_call_reports_invalid_params() {
    let (_mock, workflow) = idle_workflow().await;
    let request = json!({
        "jsonrpc": "2.0",
        "id": 3,
        "method": "tools/call",
        "params": { "name": "no_such_tool", "arguments": {} }
    });
    let responses = exchange(server_for(workflow), &format!("{request}\n")).await;

    assert_eq!(responses[0]["error"]["code"], -32602);
    assert!(responses[0]["error"]["message"]
        .as_str()
        .unwrap()
        .contains("no_such_tool"));
}

#[tokio::test]
async fn missing_tool_argument_comes_back_as_tool_error_content() {
    let (_mock, workflow) = idle_workflow().await;
    let request = json!({
        "jsonrpc": "2.0",
        "id": 4,
        "method": "tools/call",
        "params": { "name": "create_meme", "arguments": { "templateId": 5 } }
    });
    let responses = exchange(server_for(workflow), &format!("{request}\n")).await;

    let result = &responses[0]["result"];
    assert_eq!(result["isError"], true);
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("topText"));
}

#[tokio::test]
async fn negative_article_index_comes_back_as_tool_error_content() {
    let (_mock, workflow) = idle_workflow().await;
    let request = json!({
        "jsonrpc": "2.0",
        "id": 10,
        "method": "tools/call",
        "params": { "name": "generate_news_meme", "arguments": { "articleIndex": -1 } }
    });
    let responses = exchange(server_for(workflow), &format!("{request}\n")).await;

    let result = &responses[0]["result"];
    assert_eq!(result["isError"], true);
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("articleIndex"));
}

#[tokio::test]
async fn server_info_tool_reports_version() {
    let (_mock, workflow) = idle_workflow().await;
    let request = json!({
        "jsonrpc": "2.0",
        "id": 5,
        "method": "tools/call",
        "params": { "name": "get_server_info", "arguments": {} }
    });
    let responses = exchange(server_for(workflow), &format!("{request}\n")).await;

    let result = &responses[0]["result"];
    assert_eq!(result["isError"], false);
    let text = result["content"][0]["text"].as_str().unwrap();
    let info: Value = serde_json::from_str(text).unwrap();
    assert_eq!(info["name"], "Daumier MCP Server");
    assert_eq!(info["capabilities"]["tools"], true);
}

#[tokio::test]
async fn news_tool_returns_the_operation_envelope() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/1/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "title": "Monsoon arrives early", "description": "Heavy rain expected" }
            ]
        })))
        .mount(&mock)
        .await;
    let workflow = workflow_against(&mock);

    let request = json!({
        "jsonrpc": "2.0",
        "id": 6,
        "method": "tools/call",
        "params": { "name": "fetch_indian_news", "arguments": { "topic": "weather" } }
    });
    let responses = exchange(server_for(workflow), &format!("{request}\n")).await;

    let result = &responses[0]["result"];
    assert_eq!(result["isError"], false);
    let envelope: Value =
        serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["count"], 1);
    assert_eq!(envelope["articles"][0]["title"], "Monsoon arrives early");
}

#[tokio::test]
async fn upstream_failure_stays_a_logical_envelope_not_a_transport_error() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get_memes"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock)
        .await;
    let workflow = workflow_against(&mock);

    let request = json!({
        "jsonrpc": "2.0",
        "id": 8,
        "method": "tools/call",
        "params": { "name": "get_meme_templates", "arguments": {} }
    });
    let responses = exchange(server_for(workflow), &format!("{request}\n")).await;

    let result = &responses[0]["result"];
    assert_eq!(result["isError"], false);
    let envelope: Value =
        serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(envelope["success"], false);
    assert!(envelope["error"].as_str().unwrap().contains("503"));
}
