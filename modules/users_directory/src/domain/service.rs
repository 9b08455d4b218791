use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::contract::model::{User, UserFields};
use crate::domain::error::DomainError;
use crate::domain::repo::{UsersRepository, WriteOutcome};
use crate::domain::validation::{today_utc, validate_fields};

/// Domain service with business rules for user management.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
    config: ServiceConfig,
}

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_name_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_name_length: 100,
        }
    }
}

fn storage_err(e: anyhow::Error) -> DomainError {
    DomainError::storage(format!("{e:#}"))
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(repo: Arc<dyn UsersRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    #[instrument(name = "users_directory.service.list_users", skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        let users = self.repo.list().await.map_err(storage_err)?;
        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    #[instrument(name = "users_directory.service.get_user", skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        debug!("Getting user by id");
        let user = self.repo.find_by_id(id).await.map_err(storage_err)?;
        if user.is_none() {
            debug!("User not present");
        }
        Ok(user)
    }

    #[instrument(
        name = "users_directory.service.create_user",
        skip(self, input),
        fields(email = %input.email)
    )]
    pub async fn create_user(&self, input: UserFields) -> Result<User, DomainError> {
        info!("Creating new user");

        self.validate(&input)?;

        let user = User::from_fields(Uuid::new_v4(), input);
        match self.repo.insert(user.clone()).await.map_err(storage_err)? {
            WriteOutcome::Written => {}
            WriteOutcome::EmailTaken => {
                warn!("Email already in use");
                return Err(DomainError::email_already_exists(user.email));
            }
            WriteOutcome::Missing => {
                return Err(DomainError::storage("insert reported a missing record"));
            }
        }

        info!(user_id = %user.id, "Successfully created user");
        Ok(user)
    }

    #[instrument(
        name = "users_directory.service.update_user",
        skip(self, input),
        fields(user_id = %id)
    )]
    pub async fn update_user(&self, id: Uuid, input: UserFields) -> Result<User, DomainError> {
        info!("Updating user");

        // Load current
        let mut current = self
            .repo
            .find_by_id(id)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        self.validate(&input)?;
        current.overwrite_with(input);

        match self
            .repo
            .replace(current.clone())
            .await
            .map_err(storage_err)?
        {
            WriteOutcome::Written => {}
            WriteOutcome::EmailTaken => {
                warn!("Email held by another user");
                return Err(DomainError::email_already_exists(current.email));
            }
            // Deleted since it was loaded.
            WriteOutcome::Missing => return Err(DomainError::user_not_found(id)),
        }

        info!("Successfully updated user");
        Ok(current)
    }

    #[instrument(
        name = "users_directory.service.delete_user",
        skip(self),
        fields(user_id = %id)
    )]
    pub async fn delete_user(&self, id: Uuid) -> Result<(), DomainError> {
        info!("Deleting user");

        let deleted = self.repo.delete(id).await.map_err(storage_err)?;
        if deleted {
            info!("Successfully deleted user");
        } else {
            debug!("No user to delete");
        }
        Ok(())
    }

    fn validate(&self, input: &UserFields) -> Result<(), DomainError> {
        validate_fields(input, self.config.max_name_length, today_utc()).map_err(|errors| {
            debug!(%errors, "Rejected user input");
            DomainError::Validation(errors)
        })
    }
}
