use modkit::{FieldError, Problem};
use utoipa::OpenApi;

use crate::api::rest::dto::{UserDto, UserInputDto};
use crate::api::rest::handlers;
use crate::contract::model::{Department, Gender};

/// OpenAPI document for the user endpoints.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Directory API",
        description = "Create, list, update and delete user records."
    ),
    paths(
        handlers::list_users,
        handlers::get_user,
        handlers::create_user,
        handlers::update_user,
        handlers::delete_user,
    ),
    components(schemas(UserDto, UserInputDto, Gender, Department, Problem, FieldError)),
    tags((name = "users", description = "User directory records"))
)]
pub struct UsersApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_user_route() {
        let doc = UsersApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        assert!(paths.contains(&"/users".to_string()));
        assert!(paths.contains(&"/users/{id}".to_string()));

        let json = serde_json::to_value(&doc).unwrap();
        let item = &json["paths"]["/users/{id}"];
        for method in ["get", "put", "delete"] {
            assert!(item.get(method).is_some(), "missing {method} /users/{{id}}");
        }
        assert!(json["paths"]["/users"].get("post").is_some());
    }

    #[test]
    fn schemas_use_wire_names_and_labels() {
        let json = serde_json::to_value(UsersApiDoc::openapi()).unwrap();
        let schemas = &json["components"]["schemas"];
        assert!(schemas["UserDto"]["properties"].get("dateOfBirth").is_some());
        let departments = schemas["Department"]["enum"].as_array().unwrap();
        assert_eq!(departments.len(), 6);
        assert!(departments.contains(&serde_json::json!("HR")));
    }
}
