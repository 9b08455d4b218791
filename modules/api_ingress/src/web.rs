use axum::{
    http::Uri,
    response::{Html, Json},
};
use modkit::{not_found, ProblemResponse};
use serde_json::{json, Value};

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Unmatched routes answer with a problem document like every other error.
pub async fn route_not_found(uri: Uri) -> ProblemResponse {
    let problem = not_found(format!("No route for {}", uri.path()))
        .0
        .with_code("ROUTE_NOT_FOUND")
        .with_instance(uri.path());
    ProblemResponse(problem)
}

pub async fn serve_docs() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8"/>
  <title>User Directory API Docs</title>
  <script src="https://unpkg.com/@stoplight/elements@latest/web-components.min.js"></script>
  <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements@latest/styles.min.css">
</head>
<body>
  <elements-api apiDescriptionUrl="/openapi.json" router="hash" layout="sidebar"></elements-api>
</body>
</html>"#,
    )
}
