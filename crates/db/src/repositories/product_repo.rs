//! Repository for the `products` table.

use franchise_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, ProductSummary, UpdateProduct};

/// Column list for products queries.
const COLUMNS: &str = "id, branch_id, name, stock, created_at, updated_at";

/// Provides CRUD queries for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (branch_id, name, stock)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(input.branch_id)
            .bind(&input.name)
            .bind(input.stock)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a product of `branch_id` named `name` ignoring case, skipping
    /// `exclude_id` when given.
    pub async fn find_by_name(
        pool: &PgPool,
        branch_id: DbId,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE branch_id = $1
               AND lower(name) = lower($2)
               AND ($3::BIGINT IS NULL OR id <> $3)
             LIMIT 1"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(branch_id)
            .bind(name)
            .bind(exclude_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a product. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = COALESCE($2, name),
                stock = COALESCE($3, stock),
                branch_id = COALESCE($4, branch_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.stock)
            .bind(input.branch_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the products of a branch, ordered by id.
    ///
    /// An unknown branch yields an empty list.
    pub async fn list_by_branch(
        pool: &PgPool,
        branch_id: DbId,
    ) -> Result<Vec<ProductSummary>, sqlx::Error> {
        sqlx::query_as::<_, ProductSummary>(
            "SELECT p.id, p.name, p.stock, b.name AS branch_name
             FROM products p
             JOIN branches b ON b.id = p.branch_id
             WHERE p.branch_id = $1
             ORDER BY p.id",
        )
        .bind(branch_id)
        .fetch_all(pool)
        .await
    }
}
