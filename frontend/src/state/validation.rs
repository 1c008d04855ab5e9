use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-().]{7,}$").expect("phone pattern compiles"));
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub const NAME_ERROR: &str = "Please enter your name";
pub const PHONE_ERROR: &str = "Please enter a valid phone number";
pub const EMAIL_ERROR: &str = "Please enter a valid email address";

// Inputs are trimmed before checking, matching what gets submitted.

pub fn name_ok(name: &str) -> bool {
    name.trim().chars().count() >= 2
}

pub fn phone_ok(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone.trim())
}

pub fn email_ok(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}
