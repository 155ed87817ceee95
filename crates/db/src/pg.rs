//! PostgreSQL store: the storage traits on top of the repository structs.

use async_trait::async_trait;
use franchise_core::types::DbId;

use crate::error::DbError;
use crate::models::branch::{Branch, BranchSummary, BranchTopProduct, CreateBranch, UpdateBranch};
use crate::models::franchise::{CreateFranchise, Franchise, FranchiseSummary, UpdateFranchise};
use crate::models::product::{CreateProduct, Product, ProductSummary, UpdateProduct};
use crate::repositories::{BranchRepo, FranchiseRepo, ProductRepo};
use crate::store::{BranchStore, FranchiseStore, HealthProbe, ProductStore};
use crate::DbPool;

/// Store backed by a PostgreSQL pool. Cheap to clone.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl FranchiseStore for PgStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Franchise>, DbError> {
        Ok(FranchiseRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_by_name(
        &self,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<Option<Franchise>, DbError> {
        Ok(FranchiseRepo::find_by_name(&self.pool, name, exclude_id).await?)
    }

    async fn create(&self, input: &CreateFranchise) -> Result<Franchise, DbError> {
        Ok(FranchiseRepo::create(&self.pool, input).await?)
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateFranchise,
    ) -> Result<Option<Franchise>, DbError> {
        Ok(FranchiseRepo::update(&self.pool, id, input).await?)
    }

    async fn delete(&self, id: DbId) -> Result<bool, DbError> {
        Ok(FranchiseRepo::delete(&self.pool, id).await?)
    }

    async fn list_summaries(&self) -> Result<Vec<FranchiseSummary>, DbError> {
        Ok(FranchiseRepo::list_summaries(&self.pool).await?)
    }

    async fn top_stock_per_branch(
        &self,
        franchise_id: DbId,
    ) -> Result<Vec<BranchTopProduct>, DbError> {
        Ok(FranchiseRepo::top_stock_per_branch(&self.pool, franchise_id).await?)
    }
}

#[async_trait]
impl BranchStore for PgStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Branch>, DbError> {
        Ok(BranchRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_by_name(
        &self,
        franchise_id: DbId,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<Option<Branch>, DbError> {
        Ok(BranchRepo::find_by_name(&self.pool, franchise_id, name, exclude_id).await?)
    }

    async fn create(&self, input: &CreateBranch) -> Result<Branch, DbError> {
        Ok(BranchRepo::create(&self.pool, input).await?)
    }

    async fn update(&self, id: DbId, input: &UpdateBranch) -> Result<Option<Branch>, DbError> {
        Ok(BranchRepo::update(&self.pool, id, input).await?)
    }

    async fn delete(&self, id: DbId) -> Result<bool, DbError> {
        Ok(BranchRepo::delete(&self.pool, id).await?)
    }

    async fn list_by_franchise(&self, franchise_id: DbId) -> Result<Vec<BranchSummary>, DbError> {
        Ok(BranchRepo::list_by_franchise(&self.pool, franchise_id).await?)
    }
}

#[async_trait]
impl ProductStore for PgStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, DbError> {
        Ok(ProductRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_by_name(
        &self,
        branch_id: DbId,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<Option<Product>, DbError> {
        Ok(ProductRepo::find_by_name(&self.pool, branch_id, name, exclude_id).await?)
    }

    async fn create(&self, input: &CreateProduct) -> Result<Product, DbError> {
        Ok(ProductRepo::create(&self.pool, input).await?)
    }

    async fn update(&self, id: DbId, input: &UpdateProduct) -> Result<Option<Product>, DbError> {
        Ok(ProductRepo::update(&self.pool, id, input).await?)
    }

    async fn delete(&self, id: DbId) -> Result<bool, DbError> {
        Ok(ProductRepo::delete(&self.pool, id).await?)
    }

    async fn list_by_branch(&self, branch_id: DbId) -> Result<Vec<ProductSummary>, DbError> {
        Ok(ProductRepo::list_by_branch(&self.pool, branch_id).await?)
    }
}

#[async_trait]
impl HealthProbe for PgStore {
    async fn ping(&self) -> Result<(), DbError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
