// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Input validation for every request form.
//!
//! Forms derive [`validator::Validate`]; this module turns the resulting
//! errors into the one-message-per-field map clients receive with a 400.

pub mod forms;

pub use forms::{
    EducationForm, ExperienceForm, LoginForm, PostForm, ProfileForm, RegisterForm,
};

use crate::error::{AppError, FieldErrors};
use crate::time_utils::parse_date;
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors};

/// Code used by [`required`]; wins over other failures on the same field.
const REQUIRED: &str = "required";

/// Validate a form, returning the field error map and whether it passed.
pub fn validate_form<T: Validate>(input: &T) -> (FieldErrors, bool) {
    match input.validate() {
        Ok(()) => (FieldErrors::new(), true),
        Err(errors) => (to_field_errors(&errors), false),
    }
}

/// Validate a form, mapping failure to [`AppError::Validation`].
pub fn check<T: Validate>(input: &T) -> Result<(), AppError> {
    let (errors, is_valid) = validate_form(input);
    if is_valid {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

fn to_field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, field_errors) in errors.field_errors() {
        let chosen = field_errors
            .iter()
            .find(|e| e.code == REQUIRED)
            .or_else(|| field_errors.first());

        if let Some(error) = chosen {
            let message = error
                .message
                .as_deref()
                .unwrap_or("Invalid value")
                .to_string();
            out.insert(&json_field_name(&field), &message);
        }
    }
    out
}

/// `field_of_study` -> `fieldOfStudy`, matching the wire names.
fn json_field_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

// ─── Custom Rules ────────────────────────────────────────────

/// Non-empty after trimming.
/// Deserialize a string with surrounding whitespace removed, so length rules
/// see the value that is stored.
pub(crate) fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

pub(crate) fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new(REQUIRED))
    } else {
        Ok(())
    }
}

/// Blank, or a well-formed URL.
pub(crate) fn optional_url(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.trim().validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url"))
    }
}

/// Required start date of an experience or education entry.
pub(crate) fn from_date(value: &str) -> Result<(), ValidationError> {
    required(value).map_err(|e| e.with_message("From date field is required".into()))?;
    date(value).map_err(|e| e.with_message("From date is invalid".into()))
}

/// Blank, or a date in one of the formats [`parse_date`] accepts.
pub(crate) fn date(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || parse_date(value).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("date"))
    }
}
