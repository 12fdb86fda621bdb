//! NLP overlay handler.

use axum::{extract::State, Json};
use datacore::NlpReport;
use serde::Deserialize;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request body for `POST /api/nlp`.
#[derive(Debug, Deserialize)]
pub struct NlpRequest {
    pub text: Option<String>,
}

/// Every NLP view of the request text.
pub async fn nlp_report(
    State(state): State<AppState>,
    Json(request): Json<NlpRequest>,
) -> Result<Json<NlpReport>, ApiError> {
    let text = request
        .text
        .ok_or_else(|| ApiError::BadRequest("Missing 'text' field".to_string()))?;

    tracing::info!(length = text.len(), "nlp request");

    Ok(Json(state.nlp.analyze(&text)))
}
