#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use franchise_api::config::{ServerConfig, StorageBackend};
use franchise_api::router::build_app_router;
use franchise_api::services::Services;
use franchise_api::state::AppState;
use franchise_core::types::DbId;
use franchise_db::models::branch::{Branch, BranchSummary, BranchTopProduct, CreateBranch, UpdateBranch};
use franchise_db::models::franchise::{CreateFranchise, Franchise, FranchiseSummary, UpdateFranchise};
use franchise_db::models::product::{CreateProduct, Product, ProductSummary, UpdateProduct};
use franchise_db::store::{BranchStore, FranchiseStore, HealthProbe, ProductStore};
use franchise_db::{DbError, MemoryStore};

/// Build a test `ServerConfig` backed by the in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        storage: StorageBackend::Memory,
    }
}

/// Services over a fresh, empty store.
pub fn test_services() -> Services {
    Services::new(Arc::new(MemoryStore::new()))
}

/// Build the full application router, with the production middleware stack,
/// over a fresh in-memory store.
pub fn build_test_app() -> Router {
    let state = AppState::new(test_config(), Arc::new(MemoryStore::new()));
    build_app_router(state).unwrap()
}

/// Services over an arbitrary store.
pub fn services_over<S>(store: S) -> Services
where
    S: FranchiseStore + BranchStore + ProductStore + 'static,
{
    Services::new(Arc::new(store))
}

/// The full application router over an arbitrary store.
pub fn build_app_over<S>(store: S) -> Router
where
    S: FranchiseStore + BranchStore + ProductStore + HealthProbe + 'static,
{
    let state = AppState::new(test_config(), Arc::new(store));
    build_app_router(state).unwrap()
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST and return the created entity's id.
pub async fn create(app: &Router, uri: &str, body: serde_json::Value) -> i64 {
    let json = body_json(post_json(app, uri, body).await).await;
    json["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Failing store
// ---------------------------------------------------------------------------

/// Which calls a [`FaultyStore`] fails.
#[derive(Clone, Copy)]
pub enum Fault {
    /// Every call, reads and pings included, fails as if the pool were exhausted.
    Everything,
    /// Lookups by id find a stand-in row and lookups by name find nothing,
    /// so the early checks pass; every write then fails with the given error.
    Writes(fn() -> DbError),
}

/// Store whose calls fail according to its [`Fault`].
pub struct FaultyStore {
    fault: Fault,
}

impl FaultyStore {
    pub fn failing_everything() -> Self {
        Self {
            fault: Fault::Everything,
        }
    }

    pub fn failing_writes(err: fn() -> DbError) -> Self {
        Self {
            fault: Fault::Writes(err),
        }
    }

    fn pool_timeout() -> DbError {
        DbError::Sqlx(sqlx::Error::PoolTimedOut)
    }

    fn lookup<T>(&self, row: impl FnOnce() -> T) -> Result<Option<T>, DbError> {
        match self.fault {
            Fault::Everything => Err(Self::pool_timeout()),
            Fault::Writes(_) => Ok(Some(row())),
        }
    }

    fn absent<T>(&self) -> Result<Option<T>, DbError> {
        match self.fault {
            Fault::Everything => Err(Self::pool_timeout()),
            Fault::Writes(_) => Ok(None),
        }
    }

    fn listing<T>(&self) -> Result<Vec<T>, DbError> {
        match self.fault {
            Fault::Everything => Err(Self::pool_timeout()),
            Fault::Writes(_) => Ok(Vec::new()),
        }
    }

    fn write<T>(&self) -> Result<T, DbError> {
        match self.fault {
            Fault::Everything => Err(Self::pool_timeout()),
            Fault::Writes(err) => Err(err()),
        }
    }
}

/// Stand-in rows all hang off franchise 1 / branch 1.
const PARENT_ID: DbId = 1;

#[async_trait::async_trait]
impl FranchiseStore for FaultyStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Franchise>, DbError> {
        self.lookup(|| Franchise {
            id,
            name: "Existing".to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        })
    }

    async fn find_by_name(
        &self,
        _name: &str,
        _exclude_id: Option<DbId>,
    ) -> Result<Option<Franchise>, DbError> {
        self.absent()
    }

    async fn create(&self, _input: &CreateFranchise) -> Result<Franchise, DbError> {
        self.write()
    }

    async fn update(
        &self,
        _id: DbId,
        _input: &UpdateFranchise,
    ) -> Result<Option<Franchise>, DbError> {
        self.write()
    }

    async fn delete(&self, _id: DbId) -> Result<bool, DbError> {
        self.write()
    }

    async fn list_summaries(&self) -> Result<Vec<FranchiseSummary>, DbError> {
        self.listing()
    }

    async fn top_stock_per_branch(
        &self,
        _franchise_id: DbId,
    ) -> Result<Vec<BranchTopProduct>, DbError> {
        self.listing()
    }
}

#[async_trait::async_trait]
impl BranchStore for FaultyStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Branch>, DbError> {
        self.lookup(|| Branch {
            id,
            franchise_id: PARENT_ID,
            name: "Existing".to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        })
    }

    async fn find_by_name(
        &self,
        _franchise_id: DbId,
        _name: &str,
        _exclude_id: Option<DbId>,
    ) -> Result<Option<Branch>, DbError> {
        self.absent()
    }

    async fn create(&self, _input: &CreateBranch) -> Result<Branch, DbError> {
        self.write()
    }

    async fn update(&self, _id: DbId, _input: &UpdateBranch) -> Result<Option<Branch>, DbError> {
        self.write()
    }

    async fn delete(&self, _id: DbId) -> Result<bool, DbError> {
        self.write()
    }

    async fn list_by_franchise(&self, _franchise_id: DbId) -> Result<Vec<BranchSummary>, DbError> {
        self.listing()
    }
}

#[async_trait::async_trait]
impl ProductStore for FaultyStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, DbError> {
        self.lookup(|| Product {
            id,
            branch_id: PARENT_ID,
            name: "Existing".to_string(),
            stock: 1,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        })
    }

    async fn find_by_name(
        &self,
        _branch_id: DbId,
        _name: &str,
        _exclude_id: Option<DbId>,
    ) -> Result<Option<Product>, DbError> {
        self.absent()
    }

    async fn create(&self, _input: &CreateProduct) -> Result<Product, DbError> {
        self.write()
    }

    async fn update(&self, _id: DbId, _input: &UpdateProduct) -> Result<Option<Product>, DbError> {
        self.write()
    }

    async fn delete(&self, _id: DbId) -> Result<bool, DbError> {
        self.write()
    }

    async fn list_by_branch(&self, _branch_id: DbId) -> Result<Vec<ProductSummary>, DbError> {
        self.listing()
    }
}

#[async_trait::async_trait]
impl HealthProbe for FaultyStore {
    async fn ping(&self) -> Result<(), DbError> {
        match self.fault {
            Fault::Everything => Err(Self::pool_timeout()),
            Fault::Writes(_) => Ok(()),
        }
    }
}
