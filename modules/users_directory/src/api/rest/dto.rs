use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::contract::model::{Department, Gender, User, UserFields};

/// REST DTO for user representation with serde/utoipa
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    #[schema(example = "Akhil N")]
    pub name: String,
    #[schema(example = "akhil@example.com")]
    pub email: String,
    pub gender: Gender,
    #[schema(example = "1996-05-12")]
    pub date_of_birth: NaiveDate,
    #[schema(example = "+919000011111")]
    pub phone: String,
    pub department: Department,
}

/// REST DTO for create and full-replace update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserInputDto {
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub phone: String,
    pub department: Department,
}

// Conversion implementations between REST DTOs and contract models

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            gender: user.gender,
            date_of_birth: user.date_of_birth,
            phone: user.phone,
            department: user.department,
        }
    }
}

impl From<UserInputDto> for UserFields {
    fn from(req: UserInputDto) -> Self {
        Self {
            name: req.name,
            email: req.email,
            gender: req.gender,
            date_of_birth: req.date_of_birth,
            phone: req.phone,
            department: req.department,
        }
    }
}
