//! Session Routes
//!
//! Drive the in-memory app session.
//!
//! - GET /api/v1/state - Current app state
//! - POST /api/v1/actions - Apply an action
//! - POST /api/v1/state/reset - Back to the initial state

use axum::{extract::State, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::ActionResponse;
use crate::api::error::ApiResult;
use crate::api::routes::sentiment::check_length;
use crate::api::state::ApiState;
use crate::state::{Action, AppState};

/// GET /api/v1/state
pub async fn get_state(State(state): State<Arc<ApiState>>) -> Json<AppState> {
    let session = state.session.lock().await;
    Json(session.state().clone())
}

/// POST /api/v1/actions
///
/// Applies the action and returns the new state plus the effects the
/// client should perform. Rejected actions leave the state unchanged.
pub async fn apply_action(
    State(state): State<Arc<ApiState>>,
    Json(action): Json<Action>,
) -> ApiResult<Json<ActionResponse>> {
    if let Action::JournalInput { text } = &action {
        check_length(text)?;
    }

    let mut session = state.session.lock().await;
    let effects = session.dispatch(action)?;

    Ok(Json(ActionResponse {
        state: session.state().clone(),
        effects,
        applied_at: Utc::now(),
    }))
}

/// POST /api/v1/state/reset
pub async fn reset_state(State(state): State<Arc<ApiState>>) -> Json<AppState> {
    let mut session = state.session.lock().await;
    session.reset();
    Json(session.state().clone())
}
