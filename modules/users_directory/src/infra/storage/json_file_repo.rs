use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use indexmap::IndexMap;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::contract::model::User;
use crate::domain::repo::{UsersRepository, WriteOutcome};
use crate::domain::validation::{today_utc, validate_fields};
use crate::infra::storage::entity::{Snapshot, UserEntity, SNAPSHOT_VERSION};
use crate::infra::storage::mapper::{contract_to_entity, entity_to_contract};
use crate::infra::storage::{email_taken_in, insert_into, replace_in};

type UserMap = IndexMap<Uuid, User>;

/// Store that keeps the collection in memory and rewrites a JSON snapshot
/// file after every mutation.
///
/// Mutations are applied to a copy first; memory is only updated once the
/// snapshot is on disk, so a failed write leaves both sides unchanged. Each
/// write runs in its own task holding the async mutex, so snapshots land in
/// mutation order and a dropped caller cannot split disk from memory.
pub struct JsonFileUsersRepository {
    path: PathBuf,
    users: Arc<Mutex<UserMap>>,
}

impl JsonFileUsersRepository {
    /// Load `path`, or start empty when the file does not exist yet.
    ///
    /// Every stored record must pass the same field rules as new input,
    /// and ids and emails must be unique; otherwise opening fails.
    pub async fn open(path: impl Into<PathBuf>, max_name_length: usize) -> anyhow::Result<Self> {
        let path = path.into();
        let users = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let snapshot: Snapshot = serde_json::from_slice(&bytes)
                    .with_context(|| format!("parsing user snapshot {}", path.display()))?;
                if snapshot.version != SNAPSHOT_VERSION {
                    anyhow::bail!(
                        "unsupported snapshot version {} in {}",
                        snapshot.version,
                        path.display()
                    );
                }
                index_snapshot(snapshot.users, max_name_length, today_utc())
                    .with_context(|| format!("checking user snapshot {}", path.display()))?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No snapshot yet, starting empty");
                IndexMap::new()
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", path.display()));
            }
        };

        info!(path = %path.display(), count = users.len(), "Opened JSON user store");
        Ok(Self {
            path,
            users: Arc::new(Mutex::new(users)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy of the map and, if it reports a change,
    /// persist the copy and swap it in.
    async fn commit<R, F>(&self, change: F) -> anyhow::Result<R>
    where
        F: FnOnce(&mut UserMap) -> anyhow::Result<(bool, R)> + Send + 'static,
        R: Send + 'static,
    {
        let users = Arc::clone(&self.users);
        let path = self.path.clone();
        tokio::spawn(async move {
            let mut current = users.lock().await;
            let mut next = current.clone();
            let (changed, out) = change(&mut next)?;
            if changed {
                persist(&path, &next).await?;
                *current = next;
            }
            Ok::<R, anyhow::Error>(out)
        })
        .await
        .context("user store write task failed")?
    }
}

fn index_snapshot(
    entities: Vec<UserEntity>,
    max_name_length: usize,
    today: NaiveDate,
) -> anyhow::Result<UserMap> {
    let mut users = UserMap::with_capacity(entities.len());
    for entity in entities {
        let user = entity_to_contract(entity);
        if let Err(errors) = validate_fields(&user.fields(), max_name_length, today) {
            anyhow::bail!("user {} is invalid: {errors}", user.id);
        }
        if users.contains_key(&user.id) {
            anyhow::bail!("user id {} appears more than once", user.id);
        }
        if email_taken_in(&users, &user.email, None) {
            anyhow::bail!("email {} is held by more than one user", user.email);
        }
        users.insert(user.id, user);
    }
    Ok(users)
}

async fn persist(path: &Path, users: &UserMap) -> anyhow::Result<()> {
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        users: users.values().map(contract_to_entity).collect(),
    };
    let bytes = serde_json::to_vec_pretty(&snapshot)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("creating {}", dir.display()))?;
    }

    let tmp = tmp_path(path);
    tokio::fs::write(&tmp, &bytes)
        .await
        .with_context(|| format!("writing {}", tmp.display()))?;
    tokio::fs::rename(&tmp, path)
        .await
        .with_context(|| format!("replacing {}", path.display()))?;
    debug!(path = %path.display(), count = users.len(), "Snapshot written");
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[async_trait]
impl UsersRepository for JsonFileUsersRepository {
    async fn list(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.users.lock().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(self.users.lock().await.get(&id).cloned())
    }

    async fn insert(&self, u: User) -> anyhow::Result<WriteOutcome> {
        self.commit(move |users| {
            let outcome = insert_into(users, u)?;
            Ok((outcome == WriteOutcome::Written, outcome))
        })
        .await
    }

    async fn replace(&self, u: User) -> anyhow::Result<WriteOutcome> {
        self.commit(move |users| {
            let outcome = replace_in(users, u);
            Ok((outcome == WriteOutcome::Written, outcome))
        })
        .await
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        self.commit(move |users| {
            // shift_remove keeps the remaining order stable
            let removed = users.shift_remove(&id).is_some();
            Ok((removed, removed))
        })
        .await
    }
}
