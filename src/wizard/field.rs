// Single-field validators
//
// Pure functions: each takes one field's raw value plus the relevant rule
// constants and reports the first violated rule. No side effects, no clock
// access (callers pass the reference date for age checks).

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::wizard::error::FieldError;
use crate::wizard::types::FieldName;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

// Indonesian mobile numbers: 08 followed by 8 to 11 digits
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^08[0-9]{8,11}$").expect("phone pattern is valid"));

static BLOOD_TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(A|B|AB|O)[+-]?$").expect("blood type pattern is valid"));

pub fn require_non_empty(field: FieldName, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(field, "required"));
    }
    Ok(())
}

pub fn require_len_between(
    field: FieldName,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), FieldError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(FieldError::new(
            field,
            format!("must be between {min} and {max} characters"),
        ));
    }
    Ok(())
}

pub fn require_max_len(field: FieldName, value: &str, max: usize) -> Result<(), FieldError> {
    if value.chars().count() > max {
        return Err(FieldError::new(
            field,
            format!("must be at most {max} characters"),
        ));
    }
    Ok(())
}

pub fn require_min_len(field: FieldName, value: &str, min: usize) -> Result<(), FieldError> {
    if value.chars().count() < min {
        return Err(FieldError::new(
            field,
            format!("must be at least {min} characters"),
        ));
    }
    Ok(())
}

/// Exactly `digits` ASCII digits, nothing else.
pub fn require_exact_digits(
    field: FieldName,
    value: &str,
    digits: usize,
) -> Result<(), FieldError> {
    if value.len() != digits || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::new(field, format!("must be {digits} digits")));
    }
    Ok(())
}

pub fn require_email(field: FieldName, value: &str) -> Result<(), FieldError> {
    if !EMAIL_RE.is_match(value) {
        return Err(FieldError::new(field, "must be a valid email address"));
    }
    Ok(())
}

pub fn require_phone(field: FieldName, value: &str) -> Result<(), FieldError> {
    if !PHONE_RE.is_match(value) {
        return Err(FieldError::new(
            field,
            "must be a valid Indonesian mobile number starting with 08",
        ));
    }
    Ok(())
}

pub fn require_blood_type(field: FieldName, value: &str) -> Result<(), FieldError> {
    if !BLOOD_TYPE_RE.is_match(value) {
        return Err(FieldError::new(
            field,
            "must be one of A, B, AB or O, with an optional + or -",
        ));
    }
    Ok(())
}

pub fn parse_date(field: FieldName, value: &str) -> Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| FieldError::new(field, "must be a date in YYYY-MM-DD format"))
}

/// Calendar-aware age: whole years completed between `born` and `today`.
/// Returns `None` when the birth date lies in the future.
pub fn age_on(born: NaiveDate, today: NaiveDate) -> Option<u32> {
    today.years_since(born)
}

pub fn require_age_between(
    field: FieldName,
    born: NaiveDate,
    today: NaiveDate,
    min: u32,
    max: u32,
) -> Result<(), FieldError> {
    let message = format!("must correspond to an age between {min} and {max}");
    match age_on(born, today) {
        Some(age) if (min..=max).contains(&age) => Ok(()),
        _ => Err(FieldError::new(field, message)),
    }
}

pub fn require_count_between(
    field: FieldName,
    value: &str,
    min: u32,
    max: u32,
) -> Result<(), FieldError> {
    let count: u32 = value
        .trim()
        .parse()
        .map_err(|_| FieldError::new(field, "must be a whole number"))?;
    if !(min..=max).contains(&count) {
        return Err(FieldError::new(
            field,
            format!("must be between {min} and {max}"),
        ));
    }
    Ok(())
}
