//! Processing handlers.

use axum::{extract::State, Json};
use datacore::{Input, Operation, ProcessRecord};
use serde::Deserialize;
use serde_json::Value;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request body for `POST /api/process`.
#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    /// The value to process. A JSON string is text; anything else is structured.
    pub data: Option<Value>,
    /// Operation tag; `analyze` when omitted.
    pub operation: Option<String>,
}

/// Run one operation over the request's data.
pub async fn process(
    State(state): State<AppState>,
    Json(request): Json<ProcessRequest>,
) -> Result<Json<ProcessRecord>, ApiError> {
    let data = request
        .data
        .ok_or_else(|| ApiError::BadRequest("Missing 'data' field".to_string()))?;

    let operation = request
        .operation
        .unwrap_or_else(|| Operation::default().as_str().to_string());

    tracing::info!(%operation, "process request");

    let input = Input::from_value(data);
    Ok(Json(state.processor.process(&input, &operation)))
}

/// List the supported operation tags.
pub async fn list_operations() -> Json<Vec<Operation>> {
    Json(Operation::ALL.to_vec())
}
