//! Module construction from config, including the JSON file store.

mod common;

use anyhow::Result;

use common::{akhil, fields};
use users_directory::{
    client::UsersDirectoryApi,
    config::{StorageConfig, UsersDirectoryConfig},
    UsersDirectory, MODULE_NAME,
};

#[tokio::test]
async fn default_config_uses_memory_store() -> Result<()> {
    let home = tempfile::tempdir()?;
    let module = UsersDirectory::init(&UsersDirectoryConfig::default(), home.path()).await?;
    module.service().create_user(akhil()).await?;
    assert_eq!(module.service().list_users().await?.len(), 1);
    assert_eq!(std::fs::read_dir(home.path())?.count(), 0);
    assert_eq!(MODULE_NAME, "users_directory");
    Ok(())
}

#[tokio::test]
async fn json_store_path_resolves_under_home_and_persists() -> Result<()> {
    let home = tempfile::tempdir()?;
    let cfg = UsersDirectoryConfig {
        max_name_length: 100,
        storage: StorageConfig::JsonFile {
            path: "data/users.json".into(),
        },
    };

    let created = {
        let module = UsersDirectory::init(&cfg, home.path()).await?;
        module.client().create_user(akhil()).await?
    };
    assert!(home.path().join("data/users.json").is_file());

    let reopened = UsersDirectory::init(&cfg, home.path()).await?;
    assert_eq!(reopened.service().get_user(created.id).await?, Some(created));
    Ok(())
}

#[tokio::test]
async fn stored_records_are_checked_against_the_configured_name_limit() -> Result<()> {
    let home = tempfile::tempdir()?;
    let mut cfg = UsersDirectoryConfig {
        max_name_length: 100,
        storage: StorageConfig::JsonFile {
            path: "users.json".into(),
        },
    };
    UsersDirectory::init(&cfg, home.path())
        .await?
        .client()
        .create_user(akhil())
        .await?;

    cfg.max_name_length = 3;
    let err = UsersDirectory::init(&cfg, home.path())
        .await
        .err()
        .expect("over-long stored name accepted");
    assert!(format!("{err:#}").contains("name"), "{err:#}");
    Ok(())
}

#[tokio::test]
async fn name_limit_comes_from_config() -> Result<()> {
    let home = tempfile::tempdir()?;
    let cfg = UsersDirectoryConfig {
        max_name_length: 3,
        storage: StorageConfig::Memory,
    };
    let module = UsersDirectory::init(&cfg, home.path()).await?;
    assert!(module.service().create_user(akhil()).await.is_err());
    module.service().create_user(fields("Ann", "ann@example.com")).await?;
    Ok(())
}

#[test]
fn openapi_document_is_exposed() {
    let doc = UsersDirectory::openapi();
    assert!(doc.paths.paths.contains_key("/users/{id}"));
}
