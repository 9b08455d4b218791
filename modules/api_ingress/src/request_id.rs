use std::time::Instant;

use axum::http::{HeaderName, Request};
use axum::{body::Body, middleware::Next, response::Response};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::request_id::{MakeRequestId, RequestId};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::field::Empty;
use tracing::Level;

/// Request id as seen by handlers, via `Extension<XRequestId>`.
#[derive(Clone, Debug)]
pub struct XRequestId(pub String);

pub fn header() -> HeaderName {
    HeaderName::from_static("x-request-id")
}

#[derive(Clone, Default)]
pub struct MakeReqId;

impl MakeRequestId for MakeReqId {
    fn make_request_id<B>(&mut self, _req: &Request<B>) -> Option<RequestId> {
        let id = nanoid::nanoid!();
        Some(RequestId::new(id.parse().ok()?))
    }
}

/// Middleware that stores request_id in Request.extensions and records
/// request id, status and latency on the current `http_request` span.
pub async fn push_req_id_to_extensions(mut req: Request<Body>, next: Next) -> Response {
    let rid = req
        .headers()
        .get(header())
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| "n/a".to_string());

    req.extensions_mut().insert(XRequestId(rid.clone()));

    let span = tracing::Span::current();
    span.record("request_id", tracing::field::display(&rid));

    let started = Instant::now();
    let resp = next.run(req).await;
    span.record("status", resp.status().as_u16());
    span.record("latency_ms", started.elapsed().as_millis() as u64);
    resp
}

type SpanFn = fn(&Request<Body>) -> tracing::Span;

/// `http_request` span per request, with method, path and request id.
pub fn create_trace_layer(
) -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, SpanFn, DefaultOnRequest, DefaultOnResponse>
{
    TraceLayer::new_for_http()
        .make_span_with(make_span as SpanFn)
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

fn make_span(req: &Request<Body>) -> tracing::Span {
    let rid = req
        .headers()
        .get(header())
        .and_then(|v| v.to_str().ok())
        .unwrap_or("n/a");
    tracing::info_span!(
        "http_request",
        method = %req.method(),
        path = %req.uri().path(),
        version = ?req.version(),
        request_id = %rid,
        status = Empty,
        latency_ms = Empty
    )
}
