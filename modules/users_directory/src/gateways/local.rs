use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::contract::{
    client::UsersDirectoryApi,
    error::UsersDirectoryError,
    model::{User, UserFields},
};
use crate::domain::service::Service;

/// Local implementation of the UsersDirectoryApi trait that delegates to the domain service
pub struct UsersDirectoryLocalClient {
    service: Arc<Service>,
}

impl UsersDirectoryLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UsersDirectoryApi for UsersDirectoryLocalClient {
    async fn list_users(&self) -> Result<Vec<User>, UsersDirectoryError> {
        Ok(self.service.list_users().await?)
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>, UsersDirectoryError> {
        Ok(self.service.get_user(id).await?)
    }

    async fn create_user(&self, fields: UserFields) -> Result<User, UsersDirectoryError> {
        Ok(self.service.create_user(fields).await?)
    }

    async fn update_user(&self, id: Uuid, fields: UserFields) -> Result<User, UsersDirectoryError> {
        Ok(self.service.update_user(id, fields).await?)
    }

    async fn delete_user(&self, id: Uuid) -> Result<(), UsersDirectoryError> {
        Ok(self.service.delete_user(id).await?)
    }
}
