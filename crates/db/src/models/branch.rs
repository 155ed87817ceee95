//! Branch entity model and DTOs.

use franchise_core::types::{DbId, Stock, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A branch row from the `branches` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Branch {
    pub id: DbId,
    pub franchise_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new branch.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBranch {
    pub name: String,
    pub franchise_id: DbId,
}

/// DTO for updating an existing branch. All fields are optional; setting
/// `franchise_id` moves the branch to another franchise.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBranch {
    pub name: Option<String>,
    pub franchise_id: Option<DbId>,
}

/// External form of a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchResponse {
    pub id: DbId,
    pub name: String,
    pub franchise_id: DbId,
}

impl From<&Branch> for BranchResponse {
    fn from(branch: &Branch) -> Self {
        Self {
            id: branch.id,
            name: branch.name.clone(),
            franchise_id: branch.franchise_id,
        }
    }
}

/// One row of a franchise's branch index.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct BranchSummary {
    pub id: DbId,
    pub name: String,
    pub products_num: i64,
    pub franchise_name: String,
}

/// A branch paired with its highest-stock product.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct BranchTopProduct {
    pub branch_id: DbId,
    pub branch_name: String,
    pub product_id: DbId,
    pub product_name: String,
    pub stock: Stock,
}
