use axum::extract::rejection::PathRejection;
use modkit::{bad_request, conflict, internal_error, not_found, FieldError, ProblemResponse};
use uuid::Uuid;

use crate::contract::error::FieldViolation;
use crate::domain::error::DomainError;

/// Stamp a stable error code, its type URI and the request path onto a
/// status-level problem.
fn coded(resp: ProblemResponse, code: &str, instance: &str) -> ProblemResponse {
    let problem = resp
        .0
        .with_type(format!("https://errors.example.com/{code}"))
        .with_code(code)
        .with_instance(instance);
    ProblemResponse(problem)
}

pub fn user_not_found(id: Uuid, instance: &str) -> ProblemResponse {
    coded(
        not_found(format!("User with id {id} was not found")),
        "USERS_NOT_FOUND",
        instance,
    )
}

/// Map domain error to RFC9457 ProblemResponse
pub fn map_domain_error(e: &DomainError, instance: &str) -> ProblemResponse {
    match e {
        DomainError::UserNotFound { id } => user_not_found(*id, instance),
        DomainError::EmailAlreadyExists { email } => coded(
            conflict(format!("Email '{email}' is already in use")),
            "USERS_EMAIL_CONFLICT",
            instance,
        ),
        DomainError::Validation(errors) => {
            let resp = coded(
                bad_request(format!("{} invalid field(s)", errors.violations().len())),
                "USERS_VALIDATION",
                instance,
            );
            let fields = errors.violations().iter().map(field_error).collect();
            ProblemResponse(resp.0.with_errors(fields))
        }
        DomainError::Storage { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = %e, "Storage error occurred");
            coded(
                internal_error("An internal storage error occurred"),
                "USERS_INTERNAL",
                instance,
            )
        }
    }
}

/// Path segment that is not a UUID.
pub fn invalid_id(rejection: &PathRejection, instance: &str) -> ProblemResponse {
    coded(bad_request(rejection.body_text()), "USERS_INVALID_ID", instance)
}

fn field_error(v: &FieldViolation) -> FieldError {
    FieldError::for_field(&wire_name(v.field), v.message.clone())
}

/// `date_of_birth` -> `dateOfBirth`, matching the DTO field names.
fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
