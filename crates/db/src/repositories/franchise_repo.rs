//! Repository for the `franchises` table.

use franchise_core::types::DbId;
use sqlx::PgPool;

use crate::models::branch::BranchTopProduct;
use crate::models::franchise::{CreateFranchise, Franchise, FranchiseSummary, UpdateFranchise};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD and aggregate queries for franchises.
pub struct FranchiseRepo;

impl FranchiseRepo {
    /// Insert a new franchise, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFranchise) -> Result<Franchise, sqlx::Error> {
        let query = format!(
            "INSERT INTO franchises (name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Franchise>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a franchise by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Franchise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM franchises WHERE id = $1");
        sqlx::query_as::<_, Franchise>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a franchise whose name equals `name` ignoring case, skipping
    /// `exclude_id` when given.
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<Option<Franchise>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM franchises
             WHERE lower(name) = lower($1)
               AND ($2::BIGINT IS NULL OR id <> $2)
             LIMIT 1"
        );
        sqlx::query_as::<_, Franchise>(&query)
            .bind(name)
            .bind(exclude_id)
            .fetch_optional(pool)
            .await
    }

    /// Rename a franchise. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFranchise,
    ) -> Result<Option<Franchise>, sqlx::Error> {
        let query = format!(
            "UPDATE franchises SET name = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Franchise>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a franchise by ID. Branches and their products are removed by
    /// `ON DELETE CASCADE` within the same statement.
    ///
    /// Returns `true` if a row was deleted, `false` if not found.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM franchises WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List every franchise with its branch count, ordered by id.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<FranchiseSummary>, sqlx::Error> {
        sqlx::query_as::<_, FranchiseSummary>(
            "SELECT f.id, f.name, COUNT(b.id) AS branches_num
             FROM franchises f
             LEFT JOIN branches b ON b.franchise_id = f.id
             GROUP BY f.id, f.name
             ORDER BY f.id",
        )
        .fetch_all(pool)
        .await
    }

    /// For each branch of a franchise, the product with the highest stock.
    ///
    /// Ties go to the lowest product id. Branches without products are
    /// dropped by the inner join.
    pub async fn top_stock_per_branch(
        pool: &PgPool,
        franchise_id: DbId,
    ) -> Result<Vec<BranchTopProduct>, sqlx::Error> {
        sqlx::query_as::<_, BranchTopProduct>(
            "SELECT DISTINCT ON (b.id)
                    b.id AS branch_id,
                    b.name AS branch_name,
                    p.id AS product_id,
                    p.name AS product_name,
                    p.stock
             FROM branches b
             JOIN products p ON p.branch_id = b.id
             WHERE b.franchise_id = $1
             ORDER BY b.id, p.stock DESC, p.id ASC",
        )
        .bind(franchise_id)
        .fetch_all(pool)
        .await
    }
}
