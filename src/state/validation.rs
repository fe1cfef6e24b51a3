//! Field validation for the registration form

use super::forms::{Branch, Field, FormData};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use thiserror::Error;

/// Minimum raw character count of the address field
pub const MIN_ADDRESS_LENGTH: usize = 10;

/// Date format accepted in the date-of-birth field
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// A single field's validation failure.
///
/// The `Display` output is the message shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required", .0.required_label())]
    MissingRequiredField(Field),
    #[error("Only alphabets are allowed")]
    InvalidFormat,
    #[error("Enter a valid date (YYYY-MM-DD)")]
    InvalidDate,
    #[error("DOB must be a past date")]
    FutureDate,
    #[error("Minimum {min} characters")]
    TooShort { min: usize },
    #[error("Branch is required")]
    UnselectedOption,
}

/// Current validation failures keyed by field.
///
/// A field is valid exactly when it has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<Field, ValidationError>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// User-facing message for a field, if it is failing
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// Failing fields in form order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    /// Store the failure, if any, and hand back the parsed value otherwise
    fn record<T>(&mut self, field: Field, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.0.insert(field, err);
                None
            }
        }
    }
}

/// Values parsed out of a form that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidRegistration {
    pub dob: NaiveDate,
    pub branch: Branch,
}

/// Validate every field of the form against `today`.
///
/// All fields are checked; each failing field appears once with its first
/// failing rule. The error map is never empty on `Err`.
pub fn validate(data: &FormData, today: NaiveDate) -> Result<ValidRegistration, ErrorMap> {
    let mut errors = ErrorMap::new();
    errors.record(Field::FullName, validate_full_name(&data.full_name));
    let dob = errors.record(Field::Dob, validate_dob(&data.dob, today));
    errors.record(Field::Address, validate_address(&data.address));
    let branch = errors.record(Field::Branch, validate_branch(&data.branch));

    match (dob, branch) {
        (Some(dob), Some(branch)) if errors.is_empty() => Ok(ValidRegistration { dob, branch }),
        _ => Err(errors),
    }
}

pub fn validate_full_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField(Field::FullName));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(())
}

/// Parse and check the date of birth, returning the parsed date
pub fn validate_dob(value: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingRequiredField(Field::Dob));
    }
    let dob = parse_dob(value).ok_or(ValidationError::InvalidDate)?;
    if dob > today {
        return Err(ValidationError::FutureDate);
    }
    Ok(dob)
}

pub fn validate_address(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField(Field::Address));
    }
    if value.chars().count() < MIN_ADDRESS_LENGTH {
        return Err(ValidationError::TooShort {
            min: MIN_ADDRESS_LENGTH,
        });
    }
    Ok(())
}

pub fn validate_branch(value: &str) -> Result<Branch, ValidationError> {
    Branch::from_code(value).ok_or(ValidationError::UnselectedOption)
}

/// Parse strict `YYYY-MM-DD` text: four-digit year from 0001, two-digit
/// month and day
fn parse_dob(value: &str) -> Option<NaiveDate> {
    let well_formed = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(value, DOB_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
}
