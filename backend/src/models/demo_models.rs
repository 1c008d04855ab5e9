use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Call purpose a demo requester picks on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    CustomerService,
    LeadQualification,
    AppointmentSetting,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::CustomerService,
        Scenario::LeadQualification,
        Scenario::AppointmentSetting,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::CustomerService => "customer-service",
            Scenario::LeadQualification => "lead-qualification",
            Scenario::AppointmentSetting => "appointment-setting",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw `POST /api/call` body. Every field is optional here so that missing,
/// null, empty or non-string values can all be reported the same way.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DemoCallPayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub scenario: Option<String>,
}

impl DemoCallPayload {
    /// Lenient parse: anything that isn't a JSON object yields an empty payload.
    pub fn from_body(body: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(_) => return Self::default(),
        };
        let field = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            name: field("name"),
            phone: field("phone"),
            email: field("email"),
            scenario: field("scenario"),
        }
    }
}

/// A demo request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub scenario: Scenario,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoCallResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub call_id: String,
}
