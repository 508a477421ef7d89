//! Pure field validators for the Bancario forms.
//!
//! Each validator checks its rules in a fixed priority order, required-ness
//! first, and reports the first violation. Validation failures are local to
//! the form and never reach the network.

use std::sync::LazyLock;

use regex::Regex;

mod error;

pub use error::*;

/// Maximum loan amount accepted by the platform.
pub const MAX_AMOUNT: f64 = 1_000_000.0;

/// Maximum repayment term in months.
pub const MAX_TERM_MONTHS: f64 = 360.0;

/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum full-name length after trimming.
pub const MIN_FULL_NAME_LEN: usize = 3;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("regex pattern is valid")
});

/// Validates an email address.
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(())
}

/// Validates a password.
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Validates a full name.
pub fn validate_full_name(full_name: &str) -> ValidationResult {
    if full_name.is_empty() {
        return Err(ValidationError::FullNameRequired);
    }
    if full_name.trim().chars().count() < MIN_FULL_NAME_LEN {
        return Err(ValidationError::FullNameTooShort);
    }
    Ok(())
}

/// Validates a numeric loan amount.
///
/// A value of exactly 0 reports "required", not "must be positive": the
/// platform treats a zero amount and a missing amount identically. Known
/// quirk, kept as-is.
pub fn validate_amount(amount: f64) -> ValidationResult {
    if amount == 0.0 || amount.is_nan() {
        return Err(ValidationError::AmountRequired);
    }
    if amount <= 0.0 {
        return Err(ValidationError::AmountNotPositive);
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge);
    }
    Ok(())
}

/// Validates raw amount form input and returns the parsed value.
///
/// A non-empty "0" parses and reaches the range check, so it reports
/// "must be positive" where the numeric 0 reports "required".
pub fn parse_amount(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::AmountRequired);
    }
    let amount: f64 = trimmed.parse().map_err(|_| ValidationError::AmountRequired)?;
    // "NaN" parses as a float; treat it as missing.
    if amount.is_nan() {
        return Err(ValidationError::AmountRequired);
    }
    if amount <= 0.0 {
        return Err(ValidationError::AmountNotPositive);
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge);
    }
    Ok(amount)
}

/// Validates a numeric repayment term in months.
///
/// The whole-number rule is checked last, so a fractional value inside the
/// range reports "must be a whole number" rather than being coerced.
pub fn validate_term_months(term: f64) -> ValidationResult {
    if term == 0.0 || term.is_nan() {
        return Err(ValidationError::TermRequired);
    }
    if term <= 0.0 {
        return Err(ValidationError::TermNotPositive);
    }
    if term > MAX_TERM_MONTHS {
        return Err(ValidationError::TermTooLarge);
    }
    if term.fract() != 0.0 {
        return Err(ValidationError::TermNotWhole);
    }
    Ok(())
}

/// Validates raw term form input and returns the parsed value.
pub fn parse_term_months(input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::TermRequired);
    }
    let term: f64 = trimmed.parse().map_err(|_| ValidationError::TermRequired)?;
    if term.is_nan() {
        return Err(ValidationError::TermRequired);
    }
    if term <= 0.0 {
        return Err(ValidationError::TermNotPositive);
    }
    if term > MAX_TERM_MONTHS {
        return Err(ValidationError::TermTooLarge);
    }
    if term.fract() != 0.0 {
        return Err(ValidationError::TermNotWhole);
    }
    Ok(term as u32)
}
