//! HTTP ingress: owns the outer router (health, docs, middleware stack) and
//! the server loop. Service modules hand in their routes and OpenAPI
//! document; nothing here knows about users.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::header,
    middleware::from_fn,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
};

mod config;
pub mod request_id;
mod web;

pub use config::ApiIngressConfig;

pub const MODULE_NAME: &str = "api_ingress";

/// Main API Ingress module: builds the served router and runs the server.
#[derive(Debug, Clone, Default)]
pub struct ApiIngress {
    config: ApiIngressConfig,
}

impl ApiIngress {
    /// Create a new ApiIngress instance with the given configuration
    pub fn new(config: ApiIngressConfig) -> Self {
        Self { config }
    }

    /// Wrap `routes` with the host endpoints and the middleware stack.
    ///
    /// `openapi` is served at `/openapi.json` (with `/docs` on top of it)
    /// when docs are enabled.
    pub fn build_router(
        &self,
        routes: Router,
        openapi: Option<utoipa::openapi::OpenApi>,
    ) -> Result<Router> {
        tracing::debug!("Building ingress router");
        let mut router = routes
            .route("/health", get(web::health_check))
            .fallback(web::route_not_found);

        if self.config.enable_docs {
            if let Some(doc) = openapi {
                // Serialize once; each request clones the cached value.
                let doc = Arc::new(serde_json::to_value(doc)?);
                tracing::info!("Serving OpenAPI document at /openapi.json");
                router = router
                    .route(
                        "/openapi.json",
                        get(move || {
                            let doc = doc.clone();
                            async move {
                                ([(header::CACHE_CONTROL, "no-store")], Json((*doc).clone()))
                                    .into_response()
                            }
                        }),
                    )
                    .route("/docs", get(web::serve_docs));
            }
        }

        // Each `layer` call wraps everything added before it, so the list
        // runs innermost first: body limit, timeout, CORS, request-id
        // extension, trace span, propagate id, generate id.
        router = router
            .layer(RequestBodyLimitLayer::new(self.config.body_limit_bytes))
            .layer(TimeoutLayer::new(self.config.request_timeout));

        if self.config.cors_enabled {
            router = router.layer(CorsLayer::permissive());
        }

        let x_request_id = request_id::header();
        router = router
            .layer(from_fn(request_id::push_req_id_to_extensions))
            .layer(request_id::create_trace_layer())
            .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
            .layer(SetRequestIdLayer::new(x_request_id, request_id::MakeReqId));

        Ok(router)
    }

    /// Serve `router` on `listener` until `cancel` fires, then drain
    /// in-flight requests.
    pub async fn serve(
        listener: TcpListener,
        router: Router,
        cancel: CancellationToken,
    ) -> Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!("HTTP server bound on {}", addr);

        let shutdown = async move {
            cancel.cancelled().await;
            tracing::info!("HTTP server shutting down gracefully (cancellation)");
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| anyhow::anyhow!(e))
    }
}
