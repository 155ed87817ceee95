//! In-memory store.
//!
//! Entities live in flat id-keyed maps with parent-id back-references.
//! Every write takes the arena's write lock once and performs its checks
//! and mutation under it, so concurrent writers cannot interleave between
//! the uniqueness check and the insert. Constraint names match the
//! PostgreSQL schema so callers see the same errors from both backends.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use chrono::Utc;
use franchise_core::top_stock::{count_by, top_stock_per_branch, StockCandidate};
use franchise_core::types::DbId;
use franchise_core::uniqueness::find_conflict;
use franchise_core::validation::NAME_MAX_LEN;
use tokio::sync::RwLock;

use crate::error::DbError;
use crate::models::branch::{Branch, BranchSummary, BranchTopProduct, CreateBranch, UpdateBranch};
use crate::models::franchise::{CreateFranchise, Franchise, FranchiseSummary, UpdateFranchise};
use crate::models::product::{CreateProduct, Product, ProductSummary, UpdateProduct};
use crate::store::{BranchStore, FranchiseStore, HealthProbe, ProductStore};

const UQ_FRANCHISE_NAME: &str = "uq_franchises_name_ci";
const UQ_BRANCH_NAME: &str = "uq_branches_franchise_name_ci";
const UQ_PRODUCT_NAME: &str = "uq_products_branch_name_ci";
const FK_BRANCH_FRANCHISE: &str = "branches_franchise_id_fkey";
const FK_PRODUCT_BRANCH: &str = "products_branch_id_fkey";
const CK_FRANCHISE_NAME: &str = "franchises_name_check";
const CK_BRANCH_NAME: &str = "branches_name_check";
const CK_PRODUCT_NAME: &str = "products_name_check";
const CK_PRODUCT_STOCK: &str = "products_stock_check";

#[derive(Debug, Default)]
struct Arena {
    franchises: BTreeMap<DbId, Franchise>,
    branches: BTreeMap<DbId, Branch>,
    products: BTreeMap<DbId, Product>,
    last_franchise_id: DbId,
    last_branch_id: DbId,
    last_product_id: DbId,
}

fn next_id(last: &mut DbId) -> DbId {
    *last += 1;
    *last
}

fn require_name(name: &str, constraint: &str) -> Result<(), DbError> {
    if name.is_empty() || name.chars().count() > NAME_MAX_LEN {
        return Err(DbError::CheckViolation(constraint.to_string()));
    }
    Ok(())
}

impl Arena {
    fn franchise_name_taken(&self, name: &str, exclude_id: Option<DbId>) -> Option<DbId> {
        let scope = self.franchises.values().map(|f| (f.id, f.name.as_str()));
        find_conflict(scope, name, exclude_id)
    }

    fn branch_name_taken(
        &self,
        franchise_id: DbId,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Option<DbId> {
        let scope = self
            .branches
            .values()
            .filter(|b| b.franchise_id == franchise_id)
            .map(|b| (b.id, b.name.as_str()));
        find_conflict(scope, name, exclude_id)
    }

    fn product_name_taken(
        &self,
        branch_id: DbId,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Option<DbId> {
        let scope = self
            .products
            .values()
            .filter(|p| p.branch_id == branch_id)
            .map(|p| (p.id, p.name.as_str()));
        find_conflict(scope, name, exclude_id)
    }

    fn remove_branches(&mut self, branch_ids: &BTreeSet<DbId>) {
        let before = self.products.len();
        self.products.retain(|_, p| !branch_ids.contains(&p.branch_id));
        self.branches.retain(|id, _| !branch_ids.contains(id));
        tracing::debug!(
            branches = branch_ids.len(),
            products = before - self.products.len(),
            "Cascade removed branches and products"
        );
    }
}

/// Store holding the whole hierarchy in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    arena: RwLock<Arena>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FranchiseStore for MemoryStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Franchise>, DbError> {
        Ok(self.arena.read().await.franchises.get(&id).cloned())
    }

    async fn find_by_name(
        &self,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<Option<Franchise>, DbError> {
        let arena = self.arena.read().await;
        Ok(arena
            .franchise_name_taken(name, exclude_id)
            .and_then(|id| arena.franchises.get(&id).cloned()))
    }

    async fn create(&self, input: &CreateFranchise) -> Result<Franchise, DbError> {
        let mut arena = self.arena.write().await;
        require_name(&input.name, CK_FRANCHISE_NAME)?;
        if arena.franchise_name_taken(&input.name, None).is_some() {
            return Err(DbError::UniqueViolation(UQ_FRANCHISE_NAME.to_string()));
        }
        let now = Utc::now();
        let franchise = Franchise {
            id: next_id(&mut arena.last_franchise_id),
            name: input.name.clone(),
            created_at: now,
            updated_at: now,
        };
        arena.franchises.insert(franchise.id, franchise.clone());
        Ok(franchise)
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateFranchise,
    ) -> Result<Option<Franchise>, DbError> {
        let mut arena = self.arena.write().await;
        if !arena.franchises.contains_key(&id) {
            return Ok(None);
        }
        require_name(&input.name, CK_FRANCHISE_NAME)?;
        if arena.franchise_name_taken(&input.name, Some(id)).is_some() {
            return Err(DbError::UniqueViolation(UQ_FRANCHISE_NAME.to_string()));
        }
        Ok(arena.franchises.get_mut(&id).map(|franchise| {
            franchise.name = input.name.clone();
            franchise.updated_at = Utc::now();
            franchise.clone()
        }))
    }

    async fn delete(&self, id: DbId) -> Result<bool, DbError> {
        let mut arena = self.arena.write().await;
        if arena.franchises.remove(&id).is_none() {
            return Ok(false);
        }
        let branch_ids: BTreeSet<DbId> = arena
            .branches
            .values()
            .filter(|b| b.franchise_id == id)
            .map(|b| b.id)
            .collect();
        arena.remove_branches(&branch_ids);
        Ok(true)
    }

    async fn list_summaries(&self) -> Result<Vec<FranchiseSummary>, DbError> {
        let arena = self.arena.read().await;
        let counts = count_by(arena.branches.values().map(|b| b.franchise_id));
        Ok(arena
            .franchises
            .values()
            .map(|f| FranchiseSummary {
                id: f.id,
                name: f.name.clone(),
                branches_num: counts.get(&f.id).copied().unwrap_or(0),
            })
            .collect())
    }

    async fn top_stock_per_branch(
        &self,
        franchise_id: DbId,
    ) -> Result<Vec<BranchTopProduct>, DbError> {
        let arena = self.arena.read().await;
        let branches: BTreeMap<DbId, &Branch> = arena
            .branches
            .values()
            .filter(|b| b.franchise_id == franchise_id)
            .map(|b| (b.id, b))
            .collect();
        let candidates = arena
            .products
            .values()
            .filter(|p| branches.contains_key(&p.branch_id))
            .map(|p| StockCandidate {
                product_id: p.id,
                branch_id: p.branch_id,
                stock: p.stock,
            });
        Ok(top_stock_per_branch(candidates)
            .into_iter()
            .filter_map(|winner| {
                let branch = branches.get(&winner.branch_id)?;
                let product = arena.products.get(&winner.product_id)?;
                Some(BranchTopProduct {
                    branch_id: branch.id,
                    branch_name: branch.name.clone(),
                    product_id: product.id,
                    product_name: product.name.clone(),
                    stock: product.stock,
                })
            })
            .collect())
    }
}

#[async_trait]
impl BranchStore for MemoryStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Branch>, DbError> {
        Ok(self.arena.read().await.branches.get(&id).cloned())
    }

    async fn find_by_name(
        &self,
        franchise_id: DbId,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<Option<Branch>, DbError> {
        let arena = self.arena.read().await;
        Ok(arena
            .branch_name_taken(franchise_id, name, exclude_id)
            .and_then(|id| arena.branches.get(&id).cloned()))
    }

    async fn create(&self, input: &CreateBranch) -> Result<Branch, DbError> {
        let mut arena = self.arena.write().await;
        require_name(&input.name, CK_BRANCH_NAME)?;
        if !arena.franchises.contains_key(&input.franchise_id) {
            return Err(DbError::ForeignKeyViolation(FK_BRANCH_FRANCHISE.to_string()));
        }
        if arena
            .branch_name_taken(input.franchise_id, &input.name, None)
            .is_some()
        {
            return Err(DbError::UniqueViolation(UQ_BRANCH_NAME.to_string()));
        }
        let now = Utc::now();
        let branch = Branch {
            id: next_id(&mut arena.last_branch_id),
            franchise_id: input.franchise_id,
            name: input.name.clone(),
            created_at: now,
            updated_at: now,
        };
        arena.branches.insert(branch.id, branch.clone());
        Ok(branch)
    }

    async fn update(&self, id: DbId, input: &UpdateBranch) -> Result<Option<Branch>, DbError> {
        let mut arena = self.arena.write().await;
        let Some(current) = arena.branches.get(&id).cloned() else {
            return Ok(None);
        };
        let franchise_id = input.franchise_id.unwrap_or(current.franchise_id);
        let name = input.name.clone().unwrap_or(current.name);
        require_name(&name, CK_BRANCH_NAME)?;
        if !arena.franchises.contains_key(&franchise_id) {
            return Err(DbError::ForeignKeyViolation(FK_BRANCH_FRANCHISE.to_string()));
        }
        if arena.branch_name_taken(franchise_id, &name, Some(id)).is_some() {
            return Err(DbError::UniqueViolation(UQ_BRANCH_NAME.to_string()));
        }
        Ok(arena.branches.get_mut(&id).map(|branch| {
            branch.franchise_id = franchise_id;
            branch.name = name;
            branch.updated_at = Utc::now();
            branch.clone()
        }))
    }

    async fn delete(&self, id: DbId) -> Result<bool, DbError> {
        let mut arena = self.arena.write().await;
        if !arena.branches.contains_key(&id) {
            return Ok(false);
        }
        arena.remove_branches(&BTreeSet::from([id]));
        Ok(true)
    }

    async fn list_by_franchise(&self, franchise_id: DbId) -> Result<Vec<BranchSummary>, DbError> {
        let arena = self.arena.read().await;
        let Some(franchise) = arena.franchises.get(&franchise_id) else {
            return Ok(Vec::new());
        };
        let counts = count_by(arena.products.values().map(|p| p.branch_id));
        Ok(arena
            .branches
            .values()
            .filter(|b| b.franchise_id == franchise_id)
            .map(|b| BranchSummary {
                id: b.id,
                name: b.name.clone(),
                products_num: counts.get(&b.id).copied().unwrap_or(0),
                franchise_name: franchise.name.clone(),
            })
            .collect())
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, DbError> {
        Ok(self.arena.read().await.products.get(&id).cloned())
    }

    async fn find_by_name(
        &self,
        branch_id: DbId,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<Option<Product>, DbError> {
        let arena = self.arena.read().await;
        Ok(arena
            .product_name_taken(branch_id, name, exclude_id)
            .and_then(|id| arena.products.get(&id).cloned()))
    }

    async fn create(&self, input: &CreateProduct) -> Result<Product, DbError> {
        let mut arena = self.arena.write().await;
        require_name(&input.name, CK_PRODUCT_NAME)?;
        if input.stock < 0 {
            return Err(DbError::CheckViolation(CK_PRODUCT_STOCK.to_string()));
        }
        if !arena.branches.contains_key(&input.branch_id) {
            return Err(DbError::ForeignKeyViolation(FK_PRODUCT_BRANCH.to_string()));
        }
        if arena
            .product_name_taken(input.branch_id, &input.name, None)
            .is_some()
        {
            return Err(DbError::UniqueViolation(UQ_PRODUCT_NAME.to_string()));
        }
        let now = Utc::now();
        let product = Product {
            id: next_id(&mut arena.last_product_id),
            branch_id: input.branch_id,
            name: input.name.clone(),
            stock: input.stock,
            created_at: now,
            updated_at: now,
        };
        arena.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: DbId, input: &UpdateProduct) -> Result<Option<Product>, DbError> {
        let mut arena = self.arena.write().await;
        let Some(current) = arena.products.get(&id).cloned() else {
            return Ok(None);
        };
        let branch_id = input.branch_id.unwrap_or(current.branch_id);
        let name = input.name.clone().unwrap_or(current.name);
        let stock = input.stock.unwrap_or(current.stock);
        require_name(&name, CK_PRODUCT_NAME)?;
        if stock < 0 {
            return Err(DbError::CheckViolation(CK_PRODUCT_STOCK.to_string()));
        }
        if !arena.branches.contains_key(&branch_id) {
            return Err(DbError::ForeignKeyViolation(FK_PRODUCT_BRANCH.to_string()));
        }
        if arena.product_name_taken(branch_id, &name, Some(id)).is_some() {
            return Err(DbError::UniqueViolation(UQ_PRODUCT_NAME.to_string()));
        }
        Ok(arena.products.get_mut(&id).map(|product| {
            product.branch_id = branch_id;
            product.name = name;
            product.stock = stock;
            product.updated_at = Utc::now();
            product.clone()
        }))
    }

    async fn delete(&self, id: DbId) -> Result<bool, DbError> {
        Ok(self.arena.write().await.products.remove(&id).is_some())
    }

    async fn list_by_branch(&self, branch_id: DbId) -> Result<Vec<ProductSummary>, DbError> {
        let arena = self.arena.read().await;
        let Some(branch) = arena.branches.get(&branch_id) else {
            return Ok(Vec::new());
        };
        Ok(arena
            .products
            .values()
            .filter(|p| p.branch_id == branch_id)
            .map(|p| ProductSummary {
                id: p.id,
                name: p.name.clone(),
                stock: p.stock,
                branch_name: branch.name.clone(),
            })
            .collect())
    }
}

#[async_trait]
impl HealthProbe for MemoryStore {
    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}
