//! Storage traits consumed by the service layer.
//!
//! One trait per table, each covering lookup by id, lookup by scoped name,
//! writes and the aggregate queries for that level of the hierarchy.
//!
//! # Implementations
//!
//! - [`crate::PgStore`]: PostgreSQL via the repository structs
//! - [`crate::MemoryStore`]: in-process arena, used in tests and for
//!   database-less runs
//!
//! Writes re-check uniqueness and parent existence themselves and report
//! violations as [`DbError::UniqueViolation`] / [`DbError::ForeignKeyViolation`],
//! so a caller's earlier check can be raced without breaking the invariants.

use async_trait::async_trait;
use franchise_core::types::DbId;

use crate::error::DbError;
use crate::models::branch::{Branch, BranchSummary, BranchTopProduct, CreateBranch, UpdateBranch};
use crate::models::franchise::{CreateFranchise, Franchise, FranchiseSummary, UpdateFranchise};
use crate::models::product::{CreateProduct, Product, ProductSummary, UpdateProduct};

#[async_trait]
pub trait FranchiseStore: Send + Sync {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Franchise>, DbError>;

    /// Case-insensitive name lookup across all franchises.
    async fn find_by_name(
        &self,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<Option<Franchise>, DbError>;

    async fn create(&self, input: &CreateFranchise) -> Result<Franchise, DbError>;

    /// Returns `None` if the franchise does not exist.
    async fn update(&self, id: DbId, input: &UpdateFranchise)
        -> Result<Option<Franchise>, DbError>;

    /// Remove the franchise with all its branches and their products.
    ///
    /// All-or-nothing. Returns `false` if the franchise does not exist.
    async fn delete(&self, id: DbId) -> Result<bool, DbError>;

    /// Every franchise with its branch count.
    async fn list_summaries(&self) -> Result<Vec<FranchiseSummary>, DbError>;

    /// Highest-stock product of each branch in the franchise.
    async fn top_stock_per_branch(
        &self,
        franchise_id: DbId,
    ) -> Result<Vec<BranchTopProduct>, DbError>;
}

#[async_trait]
pub trait BranchStore: Send + Sync {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Branch>, DbError>;

    /// Case-insensitive name lookup within one franchise.
    async fn find_by_name(
        &self,
        franchise_id: DbId,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<Option<Branch>, DbError>;

    async fn create(&self, input: &CreateBranch) -> Result<Branch, DbError>;

    /// Returns `None` if the branch does not exist.
    async fn update(&self, id: DbId, input: &UpdateBranch) -> Result<Option<Branch>, DbError>;

    /// Remove the branch with all its products. Returns `false` if not found.
    async fn delete(&self, id: DbId) -> Result<bool, DbError>;

    /// Branches of a franchise with product counts; empty for an unknown franchise.
    async fn list_by_franchise(&self, franchise_id: DbId) -> Result<Vec<BranchSummary>, DbError>;
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, DbError>;

    /// Case-insensitive name lookup within one branch.
    async fn find_by_name(
        &self,
        branch_id: DbId,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<Option<Product>, DbError>;

    async fn create(&self, input: &CreateProduct) -> Result<Product, DbError>;

    /// Returns `None` if the product does not exist.
    async fn update(&self, id: DbId, input: &UpdateProduct) -> Result<Option<Product>, DbError>;

    async fn delete(&self, id: DbId) -> Result<bool, DbError>;

    /// Products of a branch; empty for an unknown branch.
    async fn list_by_branch(&self, branch_id: DbId) -> Result<Vec<ProductSummary>, DbError>;
}

/// Liveness probe for the backing storage.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn ping(&self) -> Result<(), DbError>;
}
