use gloo_net::http::Request;
use serde_json::Value;

use crate::config;
use crate::state::demo::{DemoPayload, SubmitOutcome};

/// A 2xx answer only counts once its body parses as JSON.
fn outcome_from_body(body: &str) -> SubmitOutcome {
    match serde_json::from_str::<Value>(body) {
        Ok(_) => SubmitOutcome::Accepted,
        Err(e) => {
            log::warn!("Demo response was not JSON: {}", e);
            SubmitOutcome::Failed
        }
    }
}

/// Posts a demo request. Any transport failure, non-2xx status or unreadable
/// body is a failure.
pub async fn request_demo_call(payload: &DemoPayload) -> SubmitOutcome {
    let url = format!("{}/api/call", config::get_backend_url());
    let request = match Request::post(&url).json(payload) {
        Ok(request) => request,
        Err(e) => {
            log::error!("Failed to serialize demo request: {}", e);
            return SubmitOutcome::Failed;
        }
    };
    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            log::error!("Demo request failed: {}", e);
            return SubmitOutcome::Failed;
        }
    };
    if !response.ok() {
        log::warn!("Demo request rejected with status {}", response.status());
        return SubmitOutcome::Failed;
    }
    match response.text().await {
        Ok(body) => outcome_from_body(&body),
        Err(e) => {
            log::error!("Failed to read demo response: {}", e);
            SubmitOutcome::Failed
        }
    }
}
