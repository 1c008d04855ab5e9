use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::demo_models::{DemoCallPayload, DemoRequest, Scenario};

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-().]{7,}$").expect("phone pattern compiles"));
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub const MIN_NAME_LEN: usize = 2;
/// Longest E.164 number is 15 digits; anything past this is noise.
pub const MAX_PHONE_KEY_DIGITS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields: name, phone, email, scenario")]
    MissingFields,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Invalid phone number format")]
    InvalidPhone,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Invalid scenario")]
    InvalidScenario,
}

pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_LEN
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Canonical form of a phone number for per-number bookkeeping: the leading
/// `+` if present, then digits only, capped at [`MAX_PHONE_KEY_DIGITS`].
pub fn phone_key(phone: &str) -> String {
    let phone = phone.trim();
    let mut key = String::with_capacity(MAX_PHONE_KEY_DIGITS + 1);
    if phone.starts_with('+') {
        key.push('+');
    }
    key.extend(
        phone
            .chars()
            .filter(char::is_ascii_digit)
            .take(MAX_PHONE_KEY_DIGITS),
    );
    key
}

/// All-or-nothing: the first failing check wins.
pub fn validate_demo_request(payload: DemoCallPayload) -> Result<DemoRequest, ValidationError> {
    let (Some(name), Some(phone), Some(email), Some(scenario)) =
        (payload.name, payload.phone, payload.email, payload.scenario)
    else {
        return Err(ValidationError::MissingFields);
    };

    if !is_valid_name(&name) {
        return Err(ValidationError::NameTooShort);
    }
    if !is_valid_phone(&phone) {
        return Err(ValidationError::InvalidPhone);
    }
    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    let scenario = Scenario::parse(&scenario).ok_or(ValidationError::InvalidScenario)?;

    Ok(DemoRequest {
        name,
        phone,
        email,
        scenario,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, phone: &str, email: &str, scenario: &str) -> DemoCallPayload {
        DemoCallPayload {
            name: Some(name.to_string()),
            phone: Some(phone.to_string()),
            email: Some(email.to_string()),
            scenario: Some(scenario.to_string()),
        }
    }

    #[test]
    fn accepts_well_formed_request() {
        let request = validate_demo_request(payload(
            "Jo Lee",
            "+1 555-123-4567",
            "jo@x.com",
            "lead-qualification",
        ))
        .unwrap();
        assert_eq!(request.scenario, Scenario::LeadQualification);
        assert_eq!(request.phone, "+1 555-123-4567");
    }

    #[test]
    fn any_missing_field_is_reported_as_missing() {
        let full = payload("Jo Lee", "5551234", "jo@x.com", "customer-service");
        let variants = [
            DemoCallPayload { name: None, ..full.clone() },
            DemoCallPayload { phone: None, ..full.clone() },
            DemoCallPayload { email: None, ..full.clone() },
            DemoCallPayload { scenario: None, ..full.clone() },
        ];
        for variant in variants {
            assert_eq!(validate_demo_request(variant), Err(ValidationError::MissingFields));
        }
    }

    #[test]
    fn phone_rules() {
        for ok in ["5551234", "+1 (555) 123-4567", "555.123.4567", "+44 20 7946 0958"] {
            assert!(is_valid_phone(ok), "{ok} should be accepted");
        }
        for bad in ["555123", "++15551234", "555-CALL-NOW", "1234567+", "phone: 5551234"] {
            assert!(!is_valid_phone(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn email_rules() {
        assert!(is_valid_email("jo@x.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        for bad in ["jo@x", "jo x@x.com", "@x.com", "jo@@x.com", "jo@x.", "jo.x.com"] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn checks_run_in_order() {
        assert_eq!(
            validate_demo_request(payload(" J ", "bad", "bad", "bad")),
            Err(ValidationError::NameTooShort)
        );
        assert_eq!(
            validate_demo_request(payload("Jo", "bad", "bad", "bad")),
            Err(ValidationError::InvalidPhone)
        );
        assert_eq!(
            validate_demo_request(payload("Jo", "5551234", "bad", "bad")),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_demo_request(payload("Jo", "5551234", "jo@x.com", "sales")),
            Err(ValidationError::InvalidScenario)
        );
    }

    #[test]
    fn formatting_variants_share_a_phone_key() {
        let key = phone_key("+1 555-123-4567");
        assert_eq!(key, "+15551234567");
        for variant in ["+15551234567", "+1 (555) 123-4567", "+1.555.123.4567", " +1 555 123 4567"] {
            assert_eq!(phone_key(variant), key, "{variant}");
        }
        assert_eq!(phone_key("555-1234"), "5551234");
    }

    #[test]
    fn phone_key_is_bounded() {
        let huge = "9".repeat(100_000);
        assert!(is_valid_phone(&huge));
        assert_eq!(phone_key(&huge).len(), MAX_PHONE_KEY_DIGITS);
        assert_eq!(phone_key(&format!("+{}", huge)).len(), MAX_PHONE_KEY_DIGITS + 1);
    }

    #[test]
    fn error_messages_match_wire_text() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Missing required fields: name, phone, email, scenario"
        );
        assert_eq!(ValidationError::InvalidScenario.to_string(), "Invalid scenario");
    }
}
