//! Action entry point
//!
//! The single data endpoint: `POST /?action=<name>` with a JSON body.
//! A request without an `action` parameter, or naming an unknown action,
//! is rejected before any data-store access.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use spektr_service::{dispatch, Action, ActionReply, ServiceError};

use crate::response::ApiError;
use crate::state::AppState;

/// Query parameters of the action endpoint
#[derive(Debug, Deserialize)]
pub struct ActionParams {
    action: Option<String>,
}

/// Handle an action request
///
/// POST /?action=<name>
pub async fn handle_action(
    State(state): State<AppState>,
    Query(params): Query<ActionParams>,
    body: Option<Json<Value>>,
) -> Result<Json<ActionReply>, ApiError> {
    let name = params.action.ok_or(ServiceError::UnknownAction)?;
    let Json(payload) = body.unwrap_or_else(|| Json(Value::Object(serde_json::Map::new())));

    let action = Action::from_parts(&name, payload)?;
    let reply = dispatch(state.service_context(), action).await?;

    Ok(Json(reply))
}
