use crate::error::FieldError;
use crate::fields::FieldName;
use serde::{Deserialize, Serialize};

/// Presence and length rules for one field.
///
/// Length bounds are inclusive on both ends and measured in characters, not
/// bytes, so accented values count the way a user perceives them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConstraint {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl FieldConstraint {
    /// A mandatory field with inclusive length bounds.
    pub fn required(min_length: usize, max_length: usize) -> Self {
        Self {
            required: true,
            min_length: Some(min_length),
            max_length: Some(max_length),
        }
    }

    /// An optional field with no length bounds; every value passes.
    pub fn unconstrained() -> Self {
        Self::default()
    }
}

/// Outcome of checking a single field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationVerdict {
    Valid,
    Invalid(FieldError),
}

impl ValidationVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationVerdict::Valid)
    }

    /// The failure, if any.
    pub fn err(&self) -> Option<&FieldError> {
        match self {
            ValidationVerdict::Valid => None,
            ValidationVerdict::Invalid(e) => Some(e),
        }
    }

    pub fn into_err(self) -> Option<FieldError> {
        match self {
            ValidationVerdict::Valid => None,
            ValidationVerdict::Invalid(e) => Some(e),
        }
    }
}

/// Checks `value` against `constraint`, reporting at most one violation.
///
/// Checks run in order: presence, minimum length, maximum length. An empty
/// value short-circuits: it fails with [`FieldError::MissingRequired`] when
/// the field is mandatory and passes otherwise, so optional fields never
/// trip a minimum-length bound by being left blank.
pub fn validate(field: FieldName, value: &str, constraint: &FieldConstraint) -> ValidationVerdict {
    if value.is_empty() {
        if constraint.required {
            return ValidationVerdict::Invalid(FieldError::MissingRequired { field });
        }
        return ValidationVerdict::Valid;
    }

    let actual = value.chars().count();

    if let Some(min) = constraint.min_length {
        if actual < min {
            return ValidationVerdict::Invalid(FieldError::TooShort { field, min, actual });
        }
    }

    if let Some(max) = constraint.max_length {
        if actual > max {
            return ValidationVerdict::Invalid(FieldError::TooLong { field, max, actual });
        }
    }

    ValidationVerdict::Valid
}
