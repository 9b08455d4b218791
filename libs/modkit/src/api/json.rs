use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;

use crate::api::problem::{Problem, ProblemResponse};

/// JSON request body extractor whose rejection is a problem document
/// (code `MALFORMED_BODY`) instead of axum's plain-text body.
///
/// Missing `Content-Type: application/json` stays 415; every other body
/// error (syntax, unknown enum label, bad date, missing field) is 400.
#[derive(Debug, Clone)]
pub struct JsonInput<T>(pub T);

impl<S, T> FromRequest<S> for JsonInput<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ProblemResponse;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let instance = req.uri().path().to_owned();
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(malformed_body(&rejection, instance)),
        }
    }
}

fn malformed_body(rejection: &JsonRejection, instance: String) -> ProblemResponse {
    let status = match rejection {
        JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        _ => StatusCode::BAD_REQUEST,
    };
    tracing::debug!(status = status.as_u16(), error = %rejection.body_text(), "rejected request body");

    Problem::new(status, "Malformed request body", rejection.body_text())
        .with_code("MALFORMED_BODY")
        .with_instance(instance)
        .into()
}
