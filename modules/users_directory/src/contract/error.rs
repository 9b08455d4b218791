use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// One field that failed its format constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Field name as it appears on [`crate::contract::model::UserFields`].
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors that are safe to expose to other crates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsersDirectoryError {
    #[error("User not found: {id}")]
    NotFound { id: Uuid },

    #[error("User with email '{email}' already exists")]
    Conflict { email: String },

    #[error("Validation error: {} invalid field(s)", violations.len())]
    Validation { violations: Vec<FieldViolation> },

    #[error("Internal error")]
    Internal,
}

impl UsersDirectoryError {
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    pub fn conflict(email: impl Into<String>) -> Self {
        Self::Conflict {
            email: email.into(),
        }
    }

    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        Self::Validation { violations }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}

impl From<crate::domain::error::DomainError> for UsersDirectoryError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            UserNotFound { id } => Self::not_found(id),
            EmailAlreadyExists { email } => Self::conflict(email),
            Validation(errors) => Self::validation(errors.into_violations()),
            Storage { .. } => Self::internal(),
        }
    }
}
