//! Client-side validation of the registration form
//!
//! Two rules run in a fixed order. The profile link is checked first and, if
//! missing, produces an inline field error and stops there. Only when the link
//! is present does the bulk required-field check run, and it rejects the whole
//! submission with one generic notice. No format checks are applied.

use super::forms::{FieldName, FormData};
use std::collections::BTreeMap;
use thiserror::Error;

/// Inline message for a missing profile link
pub const LINK_REQUIRED: &str = "Link Required";

/// Blocking notice for any other missing required field
pub const MISSING_REQUIRED_NOTICE: &str = "Please fill all required fields.";

/// Field-level errors keyed by field
pub type ErrorMap = BTreeMap<FieldName, String>;

/// Why a submission was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field-level errors, rendered next to their inputs
    #[error("{} field(s) need attention", .0.len())]
    Fields(ErrorMap),
    /// Form-level rejection with no per-field detail
    #[error("Please fill all required fields.")]
    MissingRequired,
}

/// Field-level errors for a snapshot
pub fn field_errors(data: &FormData) -> ErrorMap {
    let mut errors = ErrorMap::new();
    if data.is_empty(FieldName::Github) {
        errors.insert(FieldName::Github, LINK_REQUIRED.to_string());
    }
    errors
}

/// Validate a snapshot for submission
pub fn validate(data: &FormData) -> Result<(), ValidationError> {
    let errors = field_errors(data);
    if !errors.is_empty() {
        return Err(ValidationError::Fields(errors));
    }

    if FieldName::REQUIRED.iter().any(|field| data.is_empty(*field)) {
        return Err(ValidationError::MissingRequired);
    }

    Ok(())
}
