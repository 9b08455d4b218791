use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::{
    error::UsersDirectoryError,
    model::{User, UserFields},
};

/// Public API trait for the users_directory module that other crates can use
#[async_trait]
pub trait UsersDirectoryApi: Send + Sync {
    /// All users, in no particular order
    async fn list_users(&self) -> Result<Vec<User>, UsersDirectoryError>;

    /// A user by ID; `Ok(None)` when absent
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, UsersDirectoryError>;

    /// Create a new user with a generated ID
    async fn create_user(&self, fields: UserFields) -> Result<User, UsersDirectoryError>;

    /// Replace every field of an existing user except its ID
    async fn update_user(&self, id: Uuid, fields: UserFields) -> Result<User, UsersDirectoryError>;

    /// Delete a user by ID; deleting an unknown ID succeeds
    async fn delete_user(&self, id: Uuid) -> Result<(), UsersDirectoryError>;
}
