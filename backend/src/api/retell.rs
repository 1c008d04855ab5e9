use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::RetellConfig;
use crate::models::demo_models::DemoRequest;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum RetellError {
    #[error("request to calling service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("calling service returned {status}: {body}")]
    Status { status: u16, body: String },
}

#[derive(Debug, Serialize)]
struct CallMetadata<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct CreatePhoneCallPayload<'a> {
    agent_id: &'a str,
    customer_number: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    from_number: Option<&'a str>,
    metadata: CallMetadata<'a>,
}

#[derive(Debug, Deserialize)]
struct CreatePhoneCallResponse {
    call_id: String,
}

/// Thin client for the outbound phone-call API.
#[derive(Debug, Clone)]
pub struct RetellClient {
    client: Client,
    config: RetellConfig,
}

impl RetellClient {
    pub fn new(config: RetellConfig) -> Result<Self, RetellError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    /// Places a call to the requester with the agent for their scenario and
    /// returns the call id the service assigned.
    pub async fn create_phone_call(&self, request: &DemoRequest) -> Result<String, RetellError> {
        let payload = CreatePhoneCallPayload {
            agent_id: self.config.agent_for(request.scenario),
            customer_number: &request.phone,
            from_number: self.config.from_number.as_deref(),
            metadata: CallMetadata {
                name: &request.name,
                email: &request.email,
            },
        };

        let response = self
            .client
            .post(format!("{}/v2/create-phone-call", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RetellError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let call: CreatePhoneCallResponse = response.json().await?;
        tracing::debug!("Calling service accepted call {}", call.call_id);
        Ok(call.call_id)
    }
}
