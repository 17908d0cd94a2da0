//! Route handlers for the REST facade.
//!
//! Every operation handler is a thin adapter: it lifts the HTTP request
//! shape into the shared operation layer and returns the envelope as JSON.
//! Logical failures come back as `{ "success": false, "error": ... }` with
//! a 200 status; HTTP error statuses are reserved for malformed requests.

use crate::error::ApiError;
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use daumier_core::WorkflowRequest;
use daumier_workflow::{ops, NewsMemeWorkflow};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared state for the route handlers.
#[derive(Clone)]
pub struct AppState {
    /// The workflow every operation runs against.
    pub workflow: Arc<NewsMemeWorkflow>,
}

/// Builds the application router.
pub fn router(workflow: Arc<NewsMemeWorkflow>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/tools", get(tools))
        .route("/api/news", get(fetch_news))
        .route("/api/templates", get(get_templates))
        .route("/api/caption", post(generate_caption))
        .route("/api/meme", post(create_meme))
        .route("/api/news-meme", post(generate_news_meme))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { workflow })
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn tools() -> Json<Value> {
    Json(json!({ "tools": ops::catalog() }))
}

#[derive(Debug, Deserialize)]
struct NewsQuery {
    topic: Option<String>,
}

async fn fetch_news(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> Json<Value> {
    Json(ops::fetch_indian_news(&state.workflow, query.topic.as_deref()).await)
}

async fn get_templates(State(state): State<AppState>) -> Json<Value> {
    Json(ops::get_meme_templates(&state.workflow).await)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionRequest {
    title: String,
    description: String,
    available_templates: Vec<u64>,
}

async fn generate_caption(
    State(state): State<AppState>,
    Json(request): Json<CaptionRequest>,
) -> Result<Json<Value>, ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::invalid_request("title must not be blank"));
    }
    if request.description.trim().is_empty() {
        return Err(ApiError::invalid_request("description must not be blank"));
    }

    Ok(Json(
        ops::generate_meme_caption(
            &state.workflow,
            &request.title,
            &request.description,
            &request.available_templates,
        )
        .await,
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MemeRequest {
    template_id: u64,
    top_text: String,
    bottom_text: String,
}

async fn create_meme(
    State(state): State<AppState>,
    Json(request): Json<MemeRequest>,
) -> Json<Value> {
    Json(
        ops::create_meme(
            &state.workflow,
            request.template_id,
            &request.top_text,
            &request.bottom_text,
        )
        .await,
    )
}

async fn generate_news_meme(
    State(state): State<AppState>,
    Json(request): Json<WorkflowRequest>,
) -> Json<Value> {
    Json(ops::generate_news_meme(&state.workflow, &request).await)
}
