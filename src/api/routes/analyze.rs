//! Analysis relay API routes.

use crate::api::error::{ApiError, ApiResult};
use crate::api::ApiState;
use crate::normalizer::Normalizer;
use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

/// Request body for analysis.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw chat export as pasted by the user
    pub text: String,
    /// Export format override: "line", "discord", or "auto"
    pub format: Option<String>,
}

/// Create the analyze router.
pub fn router(state: ApiState) -> Router {
    Router::new().route("/", post(analyze_text)).with_state(state)
}

/// POST /analyze - Normalize a raw chat export and relay it to the configured
/// analysis service, returning the service's JSON reply.
async fn analyze_text(
    State(state): State<ApiState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<Value>> {
    let client = state.analysis.as_ref().ok_or_else(|| {
        ApiError::service_unavailable("No analysis endpoint configured")
    })?;

    let format = request.format.as_deref().unwrap_or(&state.default_format);

    let normalizer = Normalizer::for_format(Some(format), &request.text)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
    let text = normalizer.run(&request.text);

    if text.is_empty() {
        return Err(ApiError::unprocessable(
            "Transcript contained no usable content",
        ));
    }

    info!("Relaying {} normalized lines for analysis", text.lines().count());

    let reply = client
        .analyze(&text)
        .await
        .map_err(|e| ApiError::bad_gateway(format!("Could not reach analysis service: {}", e)))?;

    Ok(Json(reply))
}
