// Error taxonomy for the registration wizard

use thiserror::Error;

use crate::wizard::types::{FieldName, ValidationErrorMap};

/// A single field failing its first violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: FieldName,
    pub message: String,
}

impl FieldError {
    pub fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Failure reported by the device location collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location service disabled")]
    ServiceDisabled,
    #[error("{0}")]
    Provider(String),
}

/// Opaque failure from the account-creation collaborator. The message is
/// surfaced to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct CollaboratorError(pub String);

impl CollaboratorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Reasons the submission gate refuses to hand the draft off, plus the
/// pass-through collaborator failure. Every variant is recoverable by the
/// user correcting input and trying again; nothing is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("draft has {count} invalid field(s): {map}", count = .0.len(), map = .0)]
    Invalid(ValidationErrorMap),
    #[error("terms of service have not been accepted")]
    TermsNotAccepted,
    #[error("location sharing was requested but no coordinates are available")]
    LocationMissing,
    #[error("{0}")]
    Collaborator(#[from] CollaboratorError),
}
