use std::sync::Arc;

use franchise_db::store::{BranchStore, FranchiseStore, HealthProbe, ProductStore};

use crate::config::ServerConfig;
use crate::services::Services;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub services: Services,
    /// Storage liveness, reported by `/health`.
    pub health: Arc<dyn HealthProbe>,
}

impl AppState {
    /// Wire the services and health probe onto a single store.
    pub fn new<S>(config: ServerConfig, store: Arc<S>) -> Self
    where
        S: FranchiseStore + BranchStore + ProductStore + HealthProbe + 'static,
    {
        let health: Arc<dyn HealthProbe> = store.clone();
        Self {
            config: Arc::new(config),
            services: Services::new(store),
            health,
        }
    }
}
