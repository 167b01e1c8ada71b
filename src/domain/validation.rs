//! Format rules for contact form fields.
//!
//! Shared by the form state machine (which rejects a submit before any network
//! call) and the submission handler (which only logs violations).

use phonenumber::{Mode, country};
use regex::Regex;
use std::sync::LazyLock;

/// Minimum phone length, counted in characters as entered.
pub const PHONE_MIN_LEN: usize = 8;

/// Maximum phone length, symbols included.
pub const PHONE_MAX_LEN: usize = 12;

/// Basic `local@domain.tld` pattern with a 2-4 letter TLD.
pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$").unwrap()
});

/// Reasons a draft cannot be submitted.
///
/// The `Display` output is the message shown inline next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please enter a valid e-mail")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

/// Returns true if `email` is non-empty and matches [`EMAIL_REGEX`].
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_REGEX.is_match(email)
}

/// Returns true if `phone` has at least [`PHONE_MIN_LEN`] characters.
///
/// The upper bound is enforced while editing, see [`fits_phone_field`].
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().count() >= PHONE_MIN_LEN
}

/// Region assumed for phone numbers typed without a country code.
pub const DEFAULT_PHONE_REGION: country::Id = country::Id::US;

/// Rewrites a typed phone number in E.164 form (`+15551234567`).
///
/// Numbers without a country code are read as [`DEFAULT_PHONE_REGION`].
/// Input that does not parse as a phone number is returned unchanged.
pub fn normalize_phone(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    match phonenumber::parse(Some(DEFAULT_PHONE_REGION), raw) {
        Ok(number) => number.format().mode(Mode::E164).to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Returns true if `phone` can be stored in the phone field.
pub fn fits_phone_field(phone: &str) -> bool {
    phone.chars().count() <= PHONE_MAX_LEN
}

/// Checks a draft the way the form does before submitting.
///
/// Email is checked first, so a draft with both fields wrong reports
/// [`FieldError::InvalidEmail`].
///
/// # Errors
///
/// Returns the first failing rule.
pub fn check_contact_fields(phone: &str, email: &str) -> Result<(), FieldError> {
    if !is_valid_email(email) {
        return Err(FieldError::InvalidEmail);
    }

    if !is_valid_phone(phone) {
        return Err(FieldError::InvalidPhone);
    }

    Ok(())
}
