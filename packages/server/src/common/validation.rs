//! Field validation for intake payloads.
//!
//! Limits mirror the public signup forms: names 2-100 characters,
//! passwords 8-72, free-text messages capped at 1000.

use lazy_static::lazy_static;
use regex::Regex;

use crate::common::ApiError;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex must compile");
}

/// Standard email-syntax check.
pub fn validate_email(email: &str) -> Result<(), ApiError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ApiError::validation("email", "Valid email is required"))
    }
}

pub fn validate_full_name(full_name: &str) -> Result<(), ApiError> {
    let len = full_name.chars().count();
    if !(2..=100).contains(&len) {
        return Err(ApiError::validation(
            "fullName",
            "Name must be 2-100 characters",
        ));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ApiError> {
    let len = password.chars().count();
    if !(8..=72).contains(&len) {
        return Err(ApiError::validation(
            "password",
            "Password must be 8-72 characters",
        ));
    }
    Ok(())
}

pub fn validate_required(field: &'static str, value: &str, label: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(field, format!("{} is required", label)));
    }
    Ok(())
}

pub fn validate_message(message: Option<&str>) -> Result<(), ApiError> {
    if let Some(message) = message {
        if message.chars().count() > 1000 {
            return Err(ApiError::validation(
                "message",
                "Message must be at most 1000 characters",
            ));
        }
    }
    Ok(())
}

pub fn validate_family_size(family_size: Option<i32>) -> Result<(), ApiError> {
    if let Some(n) = family_size {
        if n < 1 {
            return Err(ApiError::validation(
                "familySize",
                "Family size must be at least 1",
            ));
        }
    }
    Ok(())
}
