pub mod entity;
pub mod json_file_repo;
pub mod mapper;
pub mod memory_repo;

pub use json_file_repo::JsonFileUsersRepository;
pub use memory_repo::InMemoryUsersRepository;

use indexmap::IndexMap;
use uuid::Uuid;

use crate::contract::model::User;
use crate::domain::repo::WriteOutcome;

/// Shared email lookup for the map-backed adapters.
pub(crate) fn email_taken_in(
    users: &IndexMap<Uuid, User>,
    email: &str,
    except: Option<Uuid>,
) -> bool {
    users
        .values()
        .any(|u| Some(u.id) != except && u.email.eq_ignore_ascii_case(email))
}

/// Insert into `users` under the caller's lock. A reused id is a bug in the
/// caller, not an outcome.
pub(crate) fn insert_into(
    users: &mut IndexMap<Uuid, User>,
    u: User,
) -> anyhow::Result<WriteOutcome> {
    if users.contains_key(&u.id) {
        anyhow::bail!("user id {} already stored", u.id);
    }
    if email_taken_in(users, &u.email, None) {
        return Ok(WriteOutcome::EmailTaken);
    }
    users.insert(u.id, u);
    Ok(WriteOutcome::Written)
}

/// Replace in `users` under the caller's lock.
pub(crate) fn replace_in(users: &mut IndexMap<Uuid, User>, u: User) -> WriteOutcome {
    if !users.contains_key(&u.id) {
        return WriteOutcome::Missing;
    }
    if email_taken_in(users, &u.email, Some(u.id)) {
        return WriteOutcome::EmailTaken;
    }
    users.insert(u.id, u);
    WriteOutcome::Written
}
