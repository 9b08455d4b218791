use crate::contract::model::User;
use async_trait::async_trait;
use uuid::Uuid;

/// How a uniqueness-checked write ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// No record holds the id (replace only).
    Missing,
    /// Another record already holds the email (ASCII case-insensitive).
    EmailTaken,
}

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
///
/// Email uniqueness is checked inside the same critical section as the
/// write, so two concurrent writers cannot both claim one address.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Snapshot of every stored user.
    async fn list(&self) -> anyhow::Result<Vec<User>>;
    /// Load a user by id.
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;
    /// Insert a fully-formed domain user unless its email is taken.
    ///
    /// Service computes id/validation; repo persists. The id must be new.
    async fn insert(&self, u: User) -> anyhow::Result<WriteOutcome>;
    /// Overwrite the user with `u.id` unless another user holds its email.
    /// Changes nothing when the id is unknown or the email is taken.
    async fn replace(&self, u: User) -> anyhow::Result<WriteOutcome>;
    /// Delete by id. Returns true if a record was removed.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}
