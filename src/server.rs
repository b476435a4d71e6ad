//! HTTP surface exposed to the UI.
//!
//! Routes:
//! - `POST /api/ai/route` — classify a brief into an assistant persona.
//! - `POST /api/ai/generate?assistant=<persona>` — draft under a persona.
//! - `POST /api/ai/draft` — full two-phase pipeline.
//! - `GET|POST /api/emails` — list and send through the gateway.
//!
//! Non-POST requests to the POST routes get a 405 from the router. Core
//! errors are mapped to statuses by taxonomy: validation 400/422, domain
//! 400, transport and contract failures 502.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;

use crate::ai::{AiOrchestrator, AssistantPersona};
use crate::error::OpError;
use crate::mail::{ComposeDraft, EmailGateway};

#[derive(Clone)]
pub struct AppState {
    orchestrator: Arc<AiOrchestrator>,
    gateway: EmailGateway,
}

impl AppState {
    pub fn new(orchestrator: AiOrchestrator, gateway: EmailGateway) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            gateway,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/api/ai/route", post(handle_route))
        .route("/api/ai/generate", post(handle_generate))
        .route("/api/ai/draft", post(handle_draft))
        .route("/api/emails", get(handle_list_emails).post(handle_send_email))
        .with_state(state)
}

/// Serve the surface from a pre-bound listener.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("mailsmith listening on {addr}");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

#[derive(Deserialize)]
struct PromptBody {
    prompt: Option<String>,
}

#[derive(Deserialize)]
struct GenerateQuery {
    assistant: Option<String>,
}

/// A missing, unparseable, or empty-prompt body all count as "no prompt".
fn extract_prompt(body: Result<Json<PromptBody>, JsonRejection>) -> Option<String> {
    let Ok(Json(body)) = body else {
        return None;
    };
    let prompt = body.prompt?;
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn missing_prompt() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": "Missing prompt" })),
    )
        .into_response()
}

fn ai_error(err: &OpError) -> Response {
    let status = match err {
        OpError::Validation { .. } | OpError::Domain(_) => StatusCode::BAD_REQUEST,
        OpError::Transport(_) | OpError::Contract(_) => StatusCode::BAD_GATEWAY,
    };
    (status, Json(serde_json::json!({ "error": err.to_string() }))).into_response()
}

fn envelope_error(err: &OpError) -> Response {
    let status = match err {
        OpError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        OpError::Domain(_) => StatusCode::BAD_REQUEST,
        OpError::Transport(_) | OpError::Contract(_) => StatusCode::BAD_GATEWAY,
    };
    let mut body = serde_json::json!({ "success": false, "error": err.to_string() });
    if let Some(errors) = err.validation_errors() {
        body["validationErrors"] = serde_json::to_value(errors).unwrap_or_default();
    }
    (status, Json(body)).into_response()
}

async fn handle_health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn handle_route(
    State(state): State<AppState>,
    body: Result<Json<PromptBody>, JsonRejection>,
) -> Response {
    let Some(prompt) = extract_prompt(body) else {
        return missing_prompt();
    };
    match state.orchestrator.classifier().classify(&prompt).await {
        Ok(persona) => Json(serde_json::json!({ "assistant": persona.as_str() })).into_response(),
        Err(err) => {
            tracing::warn!("classification failed: {err}");
            ai_error(&err)
        }
    }
}

async fn handle_generate(
    State(state): State<AppState>,
    Query(query): Query<GenerateQuery>,
    body: Result<Json<PromptBody>, JsonRejection>,
) -> Response {
    let Some(prompt) = extract_prompt(body) else {
        return missing_prompt();
    };
    let persona = match query.assistant.as_deref().unwrap_or("").parse::<AssistantPersona>() {
        Ok(persona) => persona,
        Err(err) => return ai_error(&err),
    };
    match state.orchestrator.drafter().draft(persona, &prompt).await {
        Ok(drafted) => Json(serde_json::json!({
            "subject": drafted.subject,
            "body": drafted.body,
        }))
        .into_response(),
        Err(err) => {
            tracing::warn!("drafting failed: {err}");
            ai_error(&err)
        }
    }
}

async fn handle_draft(
    State(state): State<AppState>,
    body: Result<Json<PromptBody>, JsonRejection>,
) -> Response {
    let Some(prompt) = extract_prompt(body) else {
        return missing_prompt();
    };
    match state.orchestrator.handle_generate(&prompt).await {
        Ok(generated) => Json(generated).into_response(),
        Err(err) => {
            tracing::warn!("generation failed: {err}");
            ai_error(&err)
        }
    }
}

async fn handle_list_emails(State(state): State<AppState>) -> Response {
    match state.gateway.list().await {
        Ok(emails) => {
            Json(serde_json::json!({ "success": true, "data": emails })).into_response()
        }
        Err(err) => envelope_error(&err),
    }
}

async fn handle_send_email(
    State(state): State<AppState>,
    body: Result<Json<ComposeDraft>, JsonRejection>,
) -> Response {
    let draft = match body {
        Ok(Json(draft)) => draft,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "success": false, "error": "Invalid request body" })),
            )
                .into_response();
        }
    };
    match state.gateway.send(&draft).await {
        Ok(record) => Json(serde_json::json!({ "success": true, "data": record })).into_response(),
        Err(err) => envelope_error(&err),
    }
}
