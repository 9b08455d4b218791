use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::api::rest::{openapi::UsersApiDoc, routes};
use crate::config::{StorageConfig, UsersDirectoryConfig};
use crate::contract::client::UsersDirectoryApi;
use crate::domain::repo::UsersRepository;
use crate::domain::service::{Service, ServiceConfig};
use crate::gateways::local::UsersDirectoryLocalClient;
use crate::infra::storage::{InMemoryUsersRepository, JsonFileUsersRepository};

/// Name of this module's section under `modules:` in the app config.
pub const MODULE_NAME: &str = "users_directory";

/// Wired users module: one store, one service, shared by the REST routes
/// and the in-process client.
#[derive(Clone)]
pub struct UsersDirectory {
    service: Arc<Service>,
}

impl UsersDirectory {
    /// Build the module from its config section. A relative JSON store path
    /// resolves against `home_dir`.
    pub async fn init(cfg: &UsersDirectoryConfig, home_dir: &Path) -> anyhow::Result<Self> {
        info!("Initializing {} module", MODULE_NAME);
        debug!(
            max_name_length = cfg.max_name_length,
            storage = ?cfg.storage,
            "Loaded users_directory config"
        );

        let repo: Arc<dyn UsersRepository> = match &cfg.storage {
            StorageConfig::Memory => Arc::new(InMemoryUsersRepository::new()),
            StorageConfig::JsonFile { path } => {
                let path = if path.is_absolute() {
                    path.clone()
                } else {
                    home_dir.join(path)
                };
                Arc::new(JsonFileUsersRepository::open(path, cfg.max_name_length).await?)
            }
        };

        let service_config = ServiceConfig {
            max_name_length: cfg.max_name_length,
        };
        Ok(Self::with_repository(repo, service_config))
    }

    /// Wire the module over an explicit store.
    pub fn with_repository(repo: Arc<dyn UsersRepository>, config: ServiceConfig) -> Self {
        Self {
            service: Arc::new(Service::new(repo, config)),
        }
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Local in-process client for other crates.
    pub fn client(&self) -> Arc<dyn UsersDirectoryApi> {
        Arc::new(UsersDirectoryLocalClient::new(self.service.clone()))
    }

    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        info!("Registering users_directory REST routes");
        routes::register_routes(router, self.service.clone())
    }

    pub fn openapi() -> utoipa::openapi::OpenApi {
        use utoipa::OpenApi;
        UsersApiDoc::openapi()
    }
}
