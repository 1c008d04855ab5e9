//! Two-step "book a demo" form.
//!
//! Step one picks a scenario, step two collects contact details. Submitting
//! replaces the form with exactly one result panel until the visitor goes
//! back or retries. Entered values survive every transition.

use serde::Serialize;

use super::validation::{email_ok, name_ok, phone_ok, EMAIL_ERROR, NAME_ERROR, PHONE_ERROR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    #[default]
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

    pub fn value(&self) -> &'static str {
        match self {
            Scenario::CustomerService => "customer-service",
            Scenario::LeadQualification => "lead-qualification",
            Scenario::AppointmentSetting => "appointment-setting",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::CustomerService => "Customer Service",
            Scenario::LeadQualification => "Lead Qualification",
            Scenario::AppointmentSetting => "Appointment Setting",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            Scenario::CustomerService => "Answers questions and resolves issues like a front-desk pro.",
            Scenario::LeadQualification => "Asks the right questions and scores the opportunity.",
            Scenario::AppointmentSetting => "Finds a slot that works and books it on the spot.",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoStep {
    Scenario,
    Contact,
}

impl DemoStep {
    pub fn number(&self) -> u8 {
        match self {
            DemoStep::Scenario => 1,
            DemoStep::Contact => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoResult {
    Success,
    Error,
    /// Shown when no backend is wired up.
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
}

impl Field {
    pub fn input_id(&self) -> &'static str {
        match self {
            Field::Name => "demoName",
            Field::Phone => "demoPhone",
            Field::Email => "demoEmail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
        }
    }

    pub fn all_valid(&self) -> bool {
        name_ok(&self.name) && phone_ok(&self.phone) && email_ok(&self.email)
    }

    fn errors(&self) -> FieldErrors {
        FieldErrors {
            name: (!name_ok(&self.name)).then_some(NAME_ERROR),
            phone: (!phone_ok(&self.phone)).then_some(PHONE_ERROR),
            email: (!email_ok(&self.email)).then_some(EMAIL_ERROR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Phone => self.phone,
            Field::Email => self.email,
        }
    }

    pub fn any(&self) -> bool {
        self.name.is_some() || self.phone.is_some() || self.email.is_some()
    }
}

/// Body of `POST /api/call`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoPayload {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub scenario: Scenario,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DemoIntent {
    SelectScenario(Scenario),
    Next,
    Back,
    Edit(Field, String),
    Submit,
    SubmitFinished(SubmitOutcome),
    Retry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoState {
    pub step: DemoStep,
    pub scenario: Scenario,
    pub fields: ContactFields,
    pub errors: FieldErrors,
    pub result: Option<DemoResult>,
    /// Request currently on the wire; further submits are ignored until it settles.
    pub in_flight: Option<DemoPayload>,
    /// Bumped whenever a new request should be sent.
    pub request_seq: u32,
    pub backend_ready: bool,
}

impl DemoState {
    pub fn new(backend_ready: bool) -> Self {
        Self {
            step: DemoStep::Scenario,
            scenario: Scenario::default(),
            fields: ContactFields::default(),
            errors: FieldErrors::default(),
            result: None,
            in_flight: None,
            request_seq: 0,
            backend_ready,
        }
    }

    pub fn apply(&mut self, intent: DemoIntent) {
        match intent {
            DemoIntent::SelectScenario(scenario) => self.scenario = scenario,
            DemoIntent::Next => {
                if self.step == DemoStep::Scenario {
                    self.step = DemoStep::Contact;
                }
            }
            DemoIntent::Back => {
                self.step = DemoStep::Scenario;
                self.result = None;
            }
            DemoIntent::Edit(field, value) => {
                self.fields.set(field, value);
                self.errors = FieldErrors::default();
            }
            DemoIntent::Submit => self.submit(),
            DemoIntent::SubmitFinished(outcome) => {
                if self.in_flight.take().is_none() {
                    return;
                }
                // A visitor who went back meanwhile stays on step one.
                if self.step == DemoStep::Contact {
                    self.result = Some(match outcome {
                        SubmitOutcome::Accepted => DemoResult::Success,
                        SubmitOutcome::Failed => DemoResult::Error,
                    });
                }
            }
            DemoIntent::Retry => {
                self.result = None;
                self.step = DemoStep::Contact;
            }
        }
    }

    fn submit(&mut self) {
        if self.step != DemoStep::Contact || self.result.is_some() || self.in_flight.is_some() {
            return;
        }
        self.errors = self.fields.errors();
        if self.errors.any() {
            return;
        }
        if !self.backend_ready {
            self.result = Some(DemoResult::Placeholder);
            return;
        }
        self.in_flight = Some(DemoPayload {
            name: self.fields.name.trim().to_string(),
            phone: self.fields.phone.trim().to_string(),
            email: self.fields.email.trim().to_string(),
            scenario: self.scenario,
        });
        self.request_seq = self.request_seq.wrapping_add(1);
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn submit_enabled(&self) -> bool {
        self.fields.all_valid() && !self.is_loading()
    }

    pub fn form_visible(&self) -> bool {
        self.result.is_none()
    }

    pub fn result_visible(&self, result: DemoResult) -> bool {
        self.result == Some(result)
    }
}
