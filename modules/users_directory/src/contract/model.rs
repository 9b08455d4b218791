use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

/// Closed gender set. Serialized as its label ("Male" / "Female").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed department set. Serialized as its label ("Engineering", "HR", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Department {
    Engineering,
    Sales,
    HR,
    Finance,
    Marketing,
    Operations,
}

impl Department {
    pub const ALL: [Department; 6] = [
        Department::Engineering,
        Department::Sales,
        Department::HR,
        Department::Finance,
        Department::Marketing,
        Department::Operations,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Sales => "Sales",
            Department::HR => "HR",
            Department::Finance => "Finance",
            Department::Marketing => "Marketing",
            Department::Operations => "Operations",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored user record. `id` never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub phone: String,
    pub department: Department,
}

/// Caller-supplied fields of a user: the body of both create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub phone: String,
    pub department: Department,
}

impl User {
    pub fn from_fields(id: Uuid, fields: UserFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            gender: fields.gender,
            date_of_birth: fields.date_of_birth,
            phone: fields.phone,
            department: fields.department,
        }
    }

    /// Overwrite every field except the identifier.
    pub fn overwrite_with(&mut self, fields: UserFields) {
        let id = self.id;
        *self = Self::from_fields(id, fields);
    }

    pub fn fields(&self) -> UserFields {
        UserFields {
            name: self.name.clone(),
            email: self.email.clone(),
            gender: self.gender,
            date_of_birth: self.date_of_birth,
            phone: self.phone.clone(),
            department: self.department,
        }
    }
}
