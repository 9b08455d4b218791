#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use tower::ServiceExt;

use users_directory::{
    contract::model::{Department, Gender, UserFields},
    domain::service::{Service, ServiceConfig},
    infra::storage::InMemoryUsersRepository,
    UsersDirectory,
};

pub fn fields(name: &str, email: &str) -> UserFields {
    UserFields {
        name: name.to_string(),
        email: email.to_string(),
        gender: Gender::Male,
        date_of_birth: NaiveDate::from_ymd_opt(1996, 5, 12).unwrap(),
        phone: "+919000011111".to_string(),
        department: Department::Engineering,
    }
}

pub fn akhil() -> UserFields {
    fields("Akhil N", "akhil@example.com")
}

pub fn neha() -> UserFields {
    UserFields {
        name: "Neha S".to_string(),
        email: "neha@example.com".to_string(),
        gender: Gender::Female,
        date_of_birth: NaiveDate::from_ymd_opt(1999, 2, 28).unwrap(),
        phone: "9876543210".to_string(),
        department: Department::HR,
    }
}

pub fn memory_module() -> UsersDirectory {
    UsersDirectory::with_repository(
        Arc::new(InMemoryUsersRepository::new()),
        ServiceConfig::default(),
    )
}

pub fn memory_service() -> Arc<Service> {
    memory_module().service()
}

pub fn router() -> Router {
    memory_module().register_rest(Router::new())
}

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: serde_json::Value,
}

/// Send one request through `app`; a JSON body sets the content type.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Reply {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            req = req.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&value).unwrap())
        }
        None => Body::empty(),
    };
    let resp = app
        .clone()
        .oneshot(req.body(body).unwrap())
        .await
        .unwrap();

    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    Reply {
        status,
        headers,
        json,
    }
}
