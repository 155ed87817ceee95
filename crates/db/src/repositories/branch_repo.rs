//! Repository for the `branches` table.

use franchise_core::types::DbId;
use sqlx::PgPool;

use crate::models::branch::{Branch, BranchSummary, CreateBranch, UpdateBranch};

/// Column list for branches queries.
const COLUMNS: &str = "id, franchise_id, name, created_at, updated_at";

/// Provides CRUD and aggregate queries for branches.
pub struct BranchRepo;

impl BranchRepo {
    /// Insert a new branch, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBranch) -> Result<Branch, sqlx::Error> {
        let query = format!(
            "INSERT INTO branches (franchise_id, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Branch>(&query)
            .bind(input.franchise_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a branch by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Branch>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM branches WHERE id = $1");
        sqlx::query_as::<_, Branch>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a branch of `franchise_id` named `name` ignoring case, skipping
    /// `exclude_id` when given.
    pub async fn find_by_name(
        pool: &PgPool,
        franchise_id: DbId,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<Option<Branch>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM branches
             WHERE franchise_id = $1
               AND lower(name) = lower($2)
               AND ($3::BIGINT IS NULL OR id <> $3)
             LIMIT 1"
        );
        sqlx::query_as::<_, Branch>(&query)
            .bind(franchise_id)
            .bind(name)
            .bind(exclude_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a branch. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBranch,
    ) -> Result<Option<Branch>, sqlx::Error> {
        let query = format!(
            "UPDATE branches SET
                name = COALESCE($2, name),
                franchise_id = COALESCE($3, franchise_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Branch>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.franchise_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a branch by ID; its products go with it via `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was deleted, `false` if not found.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM branches WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the branches of a franchise with their product counts.
    ///
    /// An unknown franchise yields an empty list.
    pub async fn list_by_franchise(
        pool: &PgPool,
        franchise_id: DbId,
    ) -> Result<Vec<BranchSummary>, sqlx::Error> {
        sqlx::query_as::<_, BranchSummary>(
            "SELECT b.id, b.name, COUNT(p.id) AS products_num, f.name AS franchise_name
             FROM branches b
             JOIN franchises f ON f.id = b.franchise_id
             LEFT JOIN products p ON p.branch_id = b.id
             WHERE b.franchise_id = $1
             GROUP BY b.id, b.name, f.name
             ORDER BY b.id",
        )
        .bind(franchise_id)
        .fetch_all(pool)
        .await
    }
}
