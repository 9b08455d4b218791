use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contract::model::{Department, Gender};

/// Current on-disk snapshot layout.
pub const SNAPSHOT_VERSION: u32 = 1;

/// One user as persisted in the snapshot file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub phone: String,
    pub department: Department,
}

/// Whole-file document written by the JSON file store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    #[serde(default)]
    pub users: Vec<UserEntity>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            users: Vec::new(),
        }
    }
}
