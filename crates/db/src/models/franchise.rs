//! Franchise entity model and DTOs.

use franchise_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A franchise row from the `franchises` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Franchise {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new franchise.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFranchise {
    pub name: String,
}

/// DTO for renaming a franchise.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFranchise {
    pub name: String,
}

/// External form of a franchise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FranchiseResponse {
    pub id: DbId,
    pub name: String,
}

impl From<&Franchise> for FranchiseResponse {
    fn from(franchise: &Franchise) -> Self {
        Self {
            id: franchise.id,
            name: franchise.name.clone(),
        }
    }
}

/// One row of the franchise index: the franchise with its branch count.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct FranchiseSummary {
    pub id: DbId,
    pub name: String,
    pub branches_num: i64,
}
