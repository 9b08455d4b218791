use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Json},
    Extension,
};
use modkit::{JsonInput, Problem, ProblemResponse};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::rest::dto::{UserDto, UserInputDto};
use crate::api::rest::error::{invalid_id, map_domain_error, user_not_found};
use crate::domain::service::Service;

type IdParam = Result<Path<Uuid>, PathRejection>;

fn user_id(id: IdParam, uri: &Uri) -> Result<Uuid, ProblemResponse> {
    id.map(|Path(id)| id)
        .map_err(|rejection| invalid_id(&rejection, uri.path()))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [UserDto]),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json")
    ),
    tag = "users",
    operation_id = "users_directory.list_users"
)]
pub async fn list_users(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
) -> Result<Json<Vec<UserDto>>, ProblemResponse> {
    info!("Listing users");

    match svc.list_users().await {
        Ok(users) => Ok(Json(users.into_iter().map(UserDto::from).collect())),
        Err(e) => {
            error!("Failed to list users: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User UUID")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 400, description = "Invalid id", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Not Found", body = Problem, content_type = "application/problem+json")
    ),
    tag = "users",
    operation_id = "users_directory.get_user"
)]
pub async fn get_user(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    id: IdParam,
) -> Result<Json<UserDto>, ProblemResponse> {
    let id = user_id(id, &uri)?;
    info!("Getting user with id: {}", id);

    match svc.get_user(id).await {
        Ok(Some(user)) => Ok(Json(UserDto::from(user))),
        Ok(None) => Err(user_not_found(id, uri.path())),
        Err(e) => {
            error!("Failed to get user {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserInputDto,
    responses(
        (status = 201, description = "Created user", body = UserDto,
            headers(("Location" = String, description = "URL of the new user"))),
        (status = 400, description = "Bad Request", body = Problem, content_type = "application/problem+json"),
        (status = 409, description = "Email already in use", body = Problem, content_type = "application/problem+json")
    ),
    tag = "users",
    operation_id = "users_directory.create_user"
)]
pub async fn create_user(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    JsonInput(req): JsonInput<UserInputDto>,
) -> Result<impl IntoResponse, ProblemResponse> {
    info!("Creating user with email: {}", req.email);

    match svc.create_user(req.into()).await {
        Ok(user) => {
            let location = format!("{}/{}", uri.path().trim_end_matches('/'), user.id);
            Ok((
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(UserDto::from(user)),
            ))
        }
        Err(e) => {
            info!("Create rejected: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Replace every field of an existing user
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User UUID")),
    request_body = UserInputDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Bad Request", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Not Found", body = Problem, content_type = "application/problem+json"),
        (status = 409, description = "Email already in use", body = Problem, content_type = "application/problem+json")
    ),
    tag = "users",
    operation_id = "users_directory.update_user"
)]
pub async fn update_user(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    id: IdParam,
    JsonInput(req): JsonInput<UserInputDto>,
) -> Result<Json<UserDto>, ProblemResponse> {
    let id = user_id(id, &uri)?;
    info!("Updating user {}", id);

    match svc.update_user(id, req.into()).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            info!("Update of user {} rejected: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Delete a user by ID
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User UUID")),
    responses(
        (status = 204, description = "Deleted, or never existed"),
        (status = 400, description = "Invalid id", body = Problem, content_type = "application/problem+json")
    ),
    tag = "users",
    operation_id = "users_directory.delete_user"
)]
pub async fn delete_user(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    id: IdParam,
) -> Result<StatusCode, ProblemResponse> {
    let id = user_id(id, &uri)?;
    info!("Deleting user: {}", id);

    match svc.delete_user(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete user {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}
