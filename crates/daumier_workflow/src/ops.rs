//! Shared operation layer for the transport front-ends.
//!
//! The five exposed operations live here once, producing the uniform
//! response envelope. The MCP and REST front-ends are thin adapters that
//! translate their protocol's request shape into these calls; logical
//! failures always come back as a well-formed envelope with an `error`
//! message, never as a transport fault.

use crate::NewsMemeWorkflow;
use daumier_core::WorkflowRequest;
use serde_json::{json, Value};
use tracing::warn;

/// Builds a success envelope around an operation payload.
///
/// # Examples
///
/// ```
/// use daumier_workflow::ops::success;
/// use serde_json::json;
///
/// let envelope = success(json!({ "count": 2 }));
/// assert_eq!(envelope["success"], true);
/// assert_eq!(envelope["count"], 2);
/// ```
pub fn success(payload: Value) -> Value {
    let mut envelope = json!({ "success": true });
    if let (Some(envelope), Some(payload)) = (envelope.as_object_mut(), payload.as_object()) {
        for (key, value) in payload {
            envelope.insert(key.clone(), value.clone());
        }
    }
    envelope
}

/// Builds a failure envelope carrying a human-readable message.
pub fn failure(message: impl std::fmt::Display) -> Value {
    json!({ "success": false, "error": message.to_string() })
}

/// Fetches latest Indian news, optionally filtered by topic.
pub async fn fetch_indian_news(workflow: &NewsMemeWorkflow, topic: Option<&str>) -> Value {
    match workflow.fetch_news(topic).await {
        Ok(articles) => success(json!({
            "count": articles.len(),
            "articles": articles,
        })),
        Err(e) => {
            // Source location stays in the log; callers get the bare message.
            warn!(error = %e, "fetch_indian_news failed");
            failure(e.kind)
        }
    }
}

/// Lists available meme templates.
pub async fn get_meme_templates(workflow: &NewsMemeWorkflow) -> Value {
    match workflow.fetch_templates().await {
        Ok(templates) => success(json!({
            "count": templates.len(),
            "templates": templates,
        })),
        Err(e) => {
            warn!(error = %e, "get_meme_templates failed");
            failure(e.kind)
        }
    }
}

/// Generates a validated caption for the given article text.
pub async fn generate_meme_caption(
    workflow: &NewsMemeWorkflow,
    title: &str,
    description: &str,
    available_templates: &[u64],
) -> Value {
    match workflow
        .generate_caption(title, description, available_templates)
        .await
    {
        Ok(Some(caption)) => success(json!({ "caption": caption })),
        Ok(None) => failure("Failed to generate meme caption"),
        Err(e) => {
            warn!(error = %e, "generate_meme_caption failed");
            failure(e.kind)
        }
    }
}

/// Renders a meme from a template id and the two caption texts.
pub async fn create_meme(
    workflow: &NewsMemeWorkflow,
    template_id: u64,
    top_text: &str,
    bottom_text: &str,
) -> Value {
    match workflow.render_meme(template_id, top_text, bottom_text).await {
        Ok(meme) => success(json!({ "url": meme.url })),
        Err(e) => {
            warn!(error = %e, "create_meme failed");
            failure(e.kind)
        }
    }
}

/// Runs the full news-to-meme workflow.
pub async fn generate_news_meme(workflow: &NewsMemeWorkflow, request: &WorkflowRequest) -> Value {
    match workflow.run(request).await {
        Ok(meme) => success(json!({
            "article": {
                "title": meme.article_title,
                "description": meme.article_description,
            },
            "caption": meme.caption,
            "url": meme.url,
        })),
        Err(e) => {
            warn!(error = %e, "generate_news_meme failed");
            failure(e.kind)
        }
    }
}

/// Describes the five exposed operations, for listing endpoints.
pub fn catalog() -> Value {
    json!([
        {
            "name": "fetch_indian_news",
            "description": "Fetch latest Indian news articles, optionally filtered by topic",
            "parameters": ["topic (optional)"]
        },
        {
            "name": "get_meme_templates",
            "description": "List available meme templates from the rendering service",
            "parameters": []
        },
        {
            "name": "generate_meme_caption",
            "description": "Generate a meme caption for a news article",
            "parameters": ["title", "description", "availableTemplates"]
        },
        {
            "name": "create_meme",
            "description": "Render a meme image from a template and caption texts",
            "parameters": ["templateId", "topText", "bottomText"]
        },
        {
            "name": "generate_news_meme",
            "description": "Run the full news-to-meme workflow",
            "parameters": ["topic (optional)", "articleIndex (optional, default 0)"]
        }
    ])
}
