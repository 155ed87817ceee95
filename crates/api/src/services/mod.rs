//! Service layer: the operations the HTTP handlers invoke.
//!
//! Each operation checks referenced entities exist, checks name uniqueness
//! for writes, then reads or mutates the store and wraps the result in an
//! [`Outcome`]. Store errors never leave this module unconverted.

use std::sync::Arc;

use franchise_core::error::CoreError;
use franchise_core::outcome::Outcome;
use franchise_db::store::{BranchStore, FranchiseStore, ProductStore};
use franchise_db::DbError;

pub mod branch;
pub mod franchise;
pub mod product;

pub use branch::BranchService;
pub use franchise::FranchiseService;
pub use product::ProductService;

pub(crate) const FRANCHISE: &str = "Franchise";
pub(crate) const BRANCH: &str = "Branch";
pub(crate) const PRODUCT: &str = "Product";

/// The three services, sharing one store.
#[derive(Clone)]
pub struct Services {
    pub franchises: Arc<FranchiseService>,
    pub branches: Arc<BranchService>,
    pub products: Arc<ProductService>,
}

impl Services {
    pub fn new<S>(store: Arc<S>) -> Self
    where
        S: FranchiseStore + BranchStore + ProductStore + 'static,
    {
        let franchise_store: Arc<dyn FranchiseStore> = store.clone();
        let branch_store: Arc<dyn BranchStore> = store.clone();
        let product_store: Arc<dyn ProductStore> = store;

        Self {
            franchises: Arc::new(FranchiseService::new(franchise_store.clone())),
            branches: Arc::new(BranchService::new(
                branch_store.clone(),
                franchise_store,
            )),
            products: Arc::new(ProductService::new(product_store, branch_store)),
        }
    }
}

/// Log a failed operation and wrap the result.
pub(crate) fn conclude<T>(
    operation: &'static str,
    result: Result<T, CoreError>,
    message: &'static str,
) -> Outcome<T> {
    if let Err(err) = &result {
        match err {
            CoreError::StorageFailure(_) => {
                tracing::error!(operation, error = %err, "Storage failure")
            }
            _ => tracing::debug!(operation, error = %err, "Operation rejected"),
        }
    }
    Outcome::from_result(result, message)
}

/// Map a write error, using the operation's own messages for constraint
/// violations that slipped past the early checks.
pub(crate) fn write_error(
    err: DbError,
    duplicate: CoreError,
    missing_parent: Option<CoreError>,
) -> CoreError {
    match (err, missing_parent) {
        (DbError::UniqueViolation(_), _) => duplicate,
        (DbError::ForeignKeyViolation(_), Some(parent)) => parent,
        (other, _) => CoreError::from(other),
    }
}
