use axum::{routing::get, Extension, Router};
use std::sync::Arc;

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Mount the `/users` routes onto `router`.
///
/// The service travels as an `Extension` layered on these routes only, so
/// the caller's router keeps whatever state it already has.
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let users = Router::new()
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .layer(Extension(service));

    router.merge(users)
}
