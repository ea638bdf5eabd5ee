//! Axum route handlers for the Session API.

use std::future::Future;
use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::presentation::{render, SessionView};
use crate::session::machine::{Rejection, TriggerOutcome, MISSING_INPUTS_MESSAGE};
use crate::session::state::ActiveView;
use crate::session::Session;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Either field may be omitted to leave that input unchanged.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInputsRequest {
    pub resume_text: Option<String>,
    pub job_description_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetViewRequest {
    pub view: ActiveView,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerResponse {
    pub outcome: &'static str,
    pub session: SessionView,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionView> {
    Json(render(&state.session.snapshot().await))
}

/// PUT /api/v1/session/inputs
pub async fn handle_update_inputs(
    State(state): State<AppState>,
    Json(request): Json<UpdateInputsRequest>,
) -> Json<SessionView> {
    let snapshot = state
        .session
        .update_inputs(request.resume_text, request.job_description_text)
        .await;
    Json(render(&snapshot))
}

/// PUT /api/v1/session/view
pub async fn handle_set_view(
    State(state): State<AppState>,
    Json(request): Json<SetViewRequest>,
) -> Json<SessionView> {
    Json(render(&state.session.set_active_view(request.view).await))
}

/// POST /api/v1/session/analyze
///
/// Missing inputs are a 400 here; the other triggers ignore them silently.
pub async fn handle_analyze(
    State(state): State<AppState>,
) -> Result<Json<TriggerResponse>, AppError> {
    let outcome = run_detached(&state, |session| async move {
        session.trigger_analyze().await
    })
    .await?;
    if outcome == TriggerOutcome::Rejected(Rejection::MissingInputs) {
        return Err(AppError::Validation(MISSING_INPUTS_MESSAGE.to_string()));
    }
    respond(&state, outcome).await
}

/// POST /api/v1/session/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
) -> Result<Json<TriggerResponse>, AppError> {
    let outcome = run_detached(&state, |session| async move {
        session.trigger_cover_letter().await
    })
    .await?;
    respond(&state, outcome).await
}

/// POST /api/v1/session/questions
pub async fn handle_questions(
    State(state): State<AppState>,
) -> Result<Json<TriggerResponse>, AppError> {
    let outcome = run_detached(&state, |session| async move {
        session.trigger_questions().await
    })
    .await?;
    respond(&state, outcome).await
}

/// Runs a trigger on its own task. If the client goes away mid-call the
/// request future is dropped, but the remote call still settles and the
/// session leaves Busy.
async fn run_detached<F, Fut>(state: &AppState, trigger: F) -> Result<TriggerOutcome, AppError>
where
    F: FnOnce(Arc<Session>) -> Fut,
    Fut: Future<Output = TriggerOutcome> + Send + 'static,
{
    tokio::spawn(trigger(state.session.clone()))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("trigger task failed: {e}")))
}

async fn respond(
    state: &AppState,
    outcome: TriggerOutcome,
) -> Result<Json<TriggerResponse>, AppError> {
    match outcome {
        TriggerOutcome::Failed(e) => Err(AppError::Generation(e)),
        TriggerOutcome::Rejected(Rejection::Busy) => Err(AppError::Busy),
        _ => Ok(Json(TriggerResponse {
            outcome: outcome.label(),
            session: render(&state.session.snapshot().await),
        })),
    }
}
