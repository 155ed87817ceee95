//! Product entity model and DTOs.

use franchise_core::types::{DbId, Stock, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product row from the `products` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub branch_id: DbId,
    pub name: String,
    pub stock: Stock,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub stock: Stock,
    pub branch_id: DbId,
}

/// DTO for updating an existing product. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub stock: Option<Stock>,
    pub branch_id: Option<DbId>,
}

/// External form of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: DbId,
    pub name: String,
    pub stock: Stock,
    pub branch_id: DbId,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            stock: product.stock,
            branch_id: product.branch_id,
        }
    }
}

/// One row of a branch's product index.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: DbId,
    pub name: String,
    pub stock: Stock,
    pub branch_name: String,
}
