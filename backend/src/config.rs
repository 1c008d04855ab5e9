use std::num::NonZeroU32;
use std::path::PathBuf;

use axum::http::HeaderValue;
use nonzero_ext::nonzero;
use thiserror::Error;

use crate::models::demo_models::Scenario;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";
pub const DEFAULT_RETELL_BASE_URL: &str = "https://api.retellai.com";

pub fn default_demo_calls_per_hour() -> NonZeroU32 {
    nonzero!(5u32)
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be set when RETELL_API_KEY is set")]
    MissingAgentId { var: &'static str },
    #[error("{var} has an invalid value: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// Credentials and agent routing for the outbound calling service.
#[derive(Debug, Clone)]
pub struct RetellConfig {
    pub api_key: String,
    pub base_url: String,
    pub from_number: Option<String>,
    pub customer_service_agent: String,
    pub lead_qualification_agent: String,
    pub appointment_setting_agent: String,
}

impl RetellConfig {
    pub fn agent_for(&self, scenario: Scenario) -> &str {
        match scenario {
            Scenario::CustomerService => &self.customer_service_agent,
            Scenario::LeadQualification => &self.lead_qualification_agent,
            Scenario::AppointmentSetting => &self.appointment_setting_agent,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub environment: Environment,
    pub frontend_origin: HeaderValue,
    pub static_dir: PathBuf,
    /// `None` keeps the endpoint in placeholder mode.
    pub retell: Option<RetellConfig>,
    pub demo_calls_per_hour: NonZeroU32,
    pub sentry_dsn: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let environment = match get("ENVIRONMENT").as_deref() {
            None | Some("development") => Environment::Development,
            Some(_) => Environment::Production,
        };

        let frontend_url = get("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());
        let frontend_origin = HeaderValue::from_str(&frontend_url).map_err(|_| ConfigError::Invalid {
            var: "FRONTEND_URL",
            value: frontend_url.clone(),
        })?;

        let static_dir = get("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let demo_calls_per_hour = match get("DEMO_CALLS_PER_HOUR") {
            Some(value) => value
                .parse::<u32>()
                .ok()
                .and_then(NonZeroU32::new)
                .ok_or(ConfigError::Invalid { var: "DEMO_CALLS_PER_HOUR", value })?,
            None => default_demo_calls_per_hour(),
        };

        let retell = match get("RETELL_API_KEY") {
            Some(api_key) => {
                let agent = |var: &'static str| get(var).ok_or(ConfigError::MissingAgentId { var });
                Some(RetellConfig {
                    api_key,
                    base_url: get("RETELL_BASE_URL")
                        .unwrap_or_else(|| DEFAULT_RETELL_BASE_URL.to_string())
                        .trim_end_matches('/')
                        .to_string(),
                    from_number: get("RETELL_FROM_NUMBER"),
                    customer_service_agent: agent("RETELL_AGENT_CUSTOMER_SERVICE")?,
                    lead_qualification_agent: agent("RETELL_AGENT_LEAD_QUALIFICATION")?,
                    appointment_setting_agent: agent("RETELL_AGENT_APPOINTMENT_SETTING")?,
                })
            }
            None => None,
        };

        Ok(Self {
            port,
            environment,
            frontend_origin,
            static_dir,
            retell,
            demo_calls_per_hour,
            sentry_dsn: get("SENTRY_DSN"),
        })
    }
}
