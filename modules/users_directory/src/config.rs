use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the users_directory module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsersDirectoryConfig {
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Default for UsersDirectoryConfig {
    fn default() -> Self {
        Self {
            max_name_length: default_max_name_length(),
            storage: StorageConfig::default(),
        }
    }
}

/// Which backing store to use.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StorageConfig {
    /// Lost on restart.
    #[default]
    Memory,
    /// Snapshot file; a relative path resolves against the server home dir.
    JsonFile {
        #[serde(default = "default_json_path")]
        path: PathBuf,
    },
}

fn default_max_name_length() -> usize {
    100
}

fn default_json_path() -> PathBuf {
    PathBuf::from("users.json")
}
