use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};

use crate::error::ApiError;
use crate::models::demo_models::{DemoCallPayload, DemoCallResponse, DemoRequest};
use crate::utils::validation::{phone_key, validate_demo_request};
use crate::{AppState, CallBackend};

pub const PLACEHOLDER_MESSAGE: &str = "Placeholder — Retell API not yet connected";
pub const PLACEHOLDER_PREFIX: &str = "placeholder_";

pub async fn request_demo_call(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<DemoCallResponse>, ApiError> {
    let request = validate_demo_request(DemoCallPayload::from_body(&body)).map_err(|e| {
        tracing::debug!("Rejected demo request: {}", e);
        e
    })?;

    let response = match &state.call_backend {
        CallBackend::Placeholder => placeholder_call(&request),
        CallBackend::Retell(client) => {
            // Only real calls count against the per-number quota.
            if state.demo_call_limiter.check_key(&phone_key(&request.phone)).is_err() {
                tracing::warn!("Demo call rate limit exceeded for scenario {}", request.scenario);
                return Err(ApiError::RateLimited);
            }
            let call_id = client.create_phone_call(&request).await?;
            tracing::info!("Demo call {} started for scenario {}", call_id, request.scenario);
            DemoCallResponse {
                success: true,
                message: None,
                call_id,
            }
        }
    };
    Ok(Json(response))
}

fn placeholder_call(request: &DemoRequest) -> DemoCallResponse {
    tracing::info!(
        name = %request.name,
        phone = %request.phone,
        email = %request.email,
        scenario = %request.scenario,
        "Demo call requested"
    );
    DemoCallResponse {
        success: true,
        message: Some(PLACEHOLDER_MESSAGE.to_string()),
        call_id: format!("{}{}", PLACEHOLDER_PREFIX, chrono::Utc::now().timestamp_millis()),
    }
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn health_check() -> &'static str {
    "OK"
}
