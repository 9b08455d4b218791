use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::contract::model::User;
use crate::domain::repo::{UsersRepository, WriteOutcome};
use crate::infra::storage::{insert_into, replace_in};

/// Process-local store. Each call holds the lock for its whole body and
/// never across an await.
#[derive(Default)]
pub struct InMemoryUsersRepository {
    users: Mutex<IndexMap<Uuid, User>>,
}

impl InMemoryUsersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store, mostly for tests.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let map = users.into_iter().map(|u| (u.id, u)).collect();
        Self {
            users: Mutex::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.users.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.lock().is_empty()
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn list(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.users.lock().values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(self.users.lock().get(&id).cloned())
    }

    async fn insert(&self, u: User) -> anyhow::Result<WriteOutcome> {
        insert_into(&mut self.users.lock(), u)
    }

    async fn replace(&self, u: User) -> anyhow::Result<WriteOutcome> {
        Ok(replace_in(&mut self.users.lock(), u))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        // shift_remove keeps the remaining order stable
        Ok(self.users.lock().shift_remove(&id).is_some())
    }
}
