//! Transcript normalization API routes.

use crate::api::error::{ApiError, ApiResult};
use crate::api::ApiState;
use crate::normalizer::Normalizer;
use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};

/// Request body for normalization.
#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    /// Raw chat export as pasted by the user
    pub text: String,
    /// Export format override: "line", "discord", or "auto"
    pub format: Option<String>,
}

/// Response body for normalization.
#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    /// Normalized transcript, one message per line
    pub text: String,
    /// Number of messages that survived cleanup
    pub lines: usize,
    /// Export format that was applied
    pub format: String,
}

/// Create the normalize router.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/", post(normalize_text))
        .with_state(state)
}

/// POST /normalize - Clean a raw chat export into one line per message.
async fn normalize_text(
    State(state): State<ApiState>,
    Json(request): Json<NormalizeRequest>,
) -> ApiResult<Json<NormalizeResponse>> {
    let format = request.format.as_deref().unwrap_or(&state.default_format);

    let normalizer = Normalizer::for_format(Some(format), &request.text)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    let text = normalizer.run(&request.text);

    if text.is_empty() {
        return Err(ApiError::unprocessable(
            "Transcript contained no usable content",
        ));
    }

    let lines = text.lines().count();
    Ok(Json(NormalizeResponse {
        text,
        lines,
        format: normalizer.format().to_string(),
    }))
}
