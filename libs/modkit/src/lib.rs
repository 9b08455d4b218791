//! # ModKit
//!
//! HTTP building blocks shared by the service modules: RFC 9457 problem
//! responses and a JSON body extractor that rejects with them.

pub mod api;

pub use api::json::JsonInput;
pub use api::problem::{
    bad_request, conflict, internal_error, not_found, FieldError, Problem, ProblemResponse,
    APPLICATION_PROBLEM_JSON,
};
