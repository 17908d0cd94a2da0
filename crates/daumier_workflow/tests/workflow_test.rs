//! End-to-end workflow tests against mock upstream services.

use daumier_clients::{GeminiClient, NewsClient, RenderClient, TemplateClient};
use daumier_core::{Credentials, WorkflowRequest};
use daumier_error::WorkflowErrorKind;
use daumier_workflow::{ops, NewsMemeWorkflow};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> Credentials {
    Credentials::from_parts("news-key", "gemini-key", "user", "pass")
}

/// All four clients pointed at the same mock server; the upstream paths
/// never collide.
fn workflow_against(server: &MockServer) -> NewsMemeWorkflow {
    let credentials = credentials();
    NewsMemeWorkflow::with_clients(
        NewsClient::with_base_url(&credentials, server.uri()),
        TemplateClient::with_base_url(server.uri()),
        GeminiClient::with_base_url(&credentials, server.uri()),
        RenderClient::with_base_url(&credentials, server.uri()),
    )
}

async fn mount_news(server: &MockServer, articles: Value) {
    Mock::given(method("GET"))
        .and(path("/api/1/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": articles })))
        .mount(server)
        .await;
}

async fn mount_templates(server: &MockServer, count: u64) {
    let memes: Vec<Value> = (1..=count)
        .map(|i| json!({ "id": i.to_string(), "name": format!("Template {}", i) }))
        .collect();
    Mock::given(method("GET"))
        .and(path("/get_memes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "memes": memes }
        })))
        .mount(server)
        .await;
}

async fn mount_gemini_text(server: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        })))
        .mount(server)
        .await;
}

async fn mount_render(server: &MockServer, url: &str) {
    Mock::given(method("POST"))
        .and(path("/caption_image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "url": url }
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn full_workflow_produces_a_news_meme() {
    let server = MockServer::start().await;

    mount_news(
        &server,
        json!([
            { "title": "Cricket final tonight", "description": "Stadium sold out", "link": "https://example.com/1" },
            { "title": "Second story", "description": "Details" },
            { "title": "Third story", "description": "More details" }
        ]),
    )
    .await;
    mount_templates(&server, 50).await;
    mount_gemini_text(
        &server,
        "```json\n{\"image\": 87, \"topText\": \"When the final starts\", \"bottomText\": \"And it rains\"}\n```",
    )
    .await;
    mount_render(&server, "https://i.example.com/meme.jpg").await;

    let workflow = workflow_against(&server);
    let request = WorkflowRequest {
        topic: Some("cricket".to_string()),
        article_index: Some(0),
    };
    let meme = workflow.run(&request).await.unwrap();

    assert_eq!(meme.article_title, "Cricket final tonight");
    assert_eq!(meme.article_description, "Stadium sold out");
    assert_eq!(meme.caption.template_id, 87);
    assert_eq!(meme.caption.top_text, "When the final starts");
    assert_eq!(meme.url.as_deref(), Some("https://i.example.com/meme.jpg"));
}

#[tokio::test]
async fn topic_is_forwarded_to_the_news_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/latest"))
        .and(query_param("q", "cricket"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let workflow = workflow_against(&server);
    let request = WorkflowRequest {
        topic: Some("cricket".to_string()),
        article_index: None,
    };
    let err = workflow.run(&request).await.unwrap_err();
    assert_eq!(err.kind, WorkflowErrorKind::NoArticles);
}

#[tokio::test]
async fn empty_article_list_fails_with_no_articles() {
    let server = MockServer::start().await;
    mount_news(&server, json!([])).await;

    let workflow = workflow_against(&server);
    let err = workflow.run(&WorkflowRequest::default()).await.unwrap_err();
    assert_eq!(err.kind, WorkflowErrorKind::NoArticles);
    assert!(format!("{}", err).contains("No news articles found"));
}

#[tokio::test]
async fn out_of_range_index_reports_unusable_article() {
    let server = MockServer::start().await;
    mount_news(
        &server,
        json!([{ "title": "Only story", "description": "text" }]),
    )
    .await;

    let workflow = workflow_against(&server);
    let request = WorkflowRequest {
        topic: None,
        article_index: Some(5),
    };
    let err = workflow.run(&request).await.unwrap_err();
    assert_eq!(err.kind, WorkflowErrorKind::UnusableArticle);
    assert!(format!("{}", err).contains("Selected article missing title or description"));
}

#[tokio::test]
async fn article_without_description_reports_unusable_article() {
    let server = MockServer::start().await;
    mount_news(&server, json!([{ "title": "Headline only" }])).await;

    let workflow = workflow_against(&server);
    let err = workflow.run(&WorkflowRequest::default()).await.unwrap_err();
    assert_eq!(err.kind, WorkflowErrorKind::UnusableArticle);
}

#[tokio::test]
async fn prose_model_output_fails_with_no_caption() {
    let server = MockServer::start().await;
    mount_news(
        &server,
        json!([{ "title": "Story", "description": "text" }]),
    )
    .await;
    mount_templates(&server, 5).await;
    mount_gemini_text(&server, "Here is a fun caption idea for you!").await;

    let workflow = workflow_against(&server);
    let err = workflow.run(&WorkflowRequest::default()).await.unwrap_err();
    assert_eq!(err.kind, WorkflowErrorKind::NoCaption);
    assert!(format!("{}", err).contains("Failed to generate meme caption"));
}

#[tokio::test]
async fn inner_step_failures_are_wrapped_with_the_workflow_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/1/latest"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let workflow = workflow_against(&server);
    let err = workflow.run(&WorkflowRequest::default()).await.unwrap_err();
    let message = format!("{}", err.kind);
    assert!(message.contains("Failed to generate news meme"));
    assert!(message.contains("500"));
    // The wrapped message carries the inner kind only, not its source location.
    assert!(!message.contains("at line"));
}

#[tokio::test]
async fn ops_layer_wraps_results_in_the_envelope() {
    let server = MockServer::start().await;
    mount_news(
        &server,
        json!([{ "title": "Story", "description": "text" }]),
    )
    .await;
    mount_templates(&server, 3).await;
    mount_gemini_text(
        &server,
        "{\"image\": 2, \"topText\": \"top\", \"bottomText\": \"bottom\"}",
    )
    .await;
    mount_render(&server, "https://i.example.com/out.jpg").await;

    let workflow = workflow_against(&server);

    let news = ops::fetch_indian_news(&workflow, None).await;
    assert_eq!(news["success"], true);
    assert_eq!(news["count"], 1);

    let templates = ops::get_meme_templates(&workflow).await;
    assert_eq!(templates["success"], true);
    assert_eq!(templates["count"], 3);

    let meme = ops::generate_news_meme(&workflow, &WorkflowRequest::default()).await;
    assert_eq!(meme["success"], true);
    assert_eq!(meme["article"]["title"], "Story");
    assert_eq!(meme["caption"]["templateId"], 2);
    assert_eq!(meme["url"], "https://i.example.com/out.jpg");
}

#[tokio::test]
async fn ops_layer_reports_logical_failures_in_the_envelope() {
    let server = MockServer::start().await;
    mount_news(&server, json!([])).await;

    let workflow = workflow_against(&server);
    let envelope = ops::generate_news_meme(&workflow, &WorkflowRequest::default()).await;
    assert_eq!(envelope["success"], false);
    assert!(envelope["error"]
        .as_str()
        .unwrap()
        .contains("No news articles found"));
}
