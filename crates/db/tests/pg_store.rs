//! Integration tests for the PostgreSQL repositories.
//!
//! Exercises the repository layer against a real database:
//! - Case-insensitive unique indexes per scope
//! - Foreign key violations
//! - Cascade delete through the whole hierarchy
//! - Aggregate queries and the top-stock report
//!
//! Requires `DATABASE_URL`; run with `--features postgres-tests`.
#![cfg(feature = "postgres-tests")]

use assert_matches::assert_matches;
use franchise_db::models::branch::{CreateBranch, UpdateBranch};
use franchise_db::models::franchise::{CreateFranchise, UpdateFranchise};
use franchise_db::models::product::CreateProduct;
use franchise_db::repositories::{BranchRepo, FranchiseRepo, ProductRepo};
use franchise_db::DbError;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_franchise(name: &str) -> CreateFranchise {
    CreateFranchise {
        name: name.to_string(),
    }
}

fn new_branch(franchise_id: i64, name: &str) -> CreateBranch {
    CreateBranch {
        name: name.to_string(),
        franchise_id,
    }
}

fn new_product(branch_id: i64, name: &str, stock: i32) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        stock,
        branch_id,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_full_hierarchy(pool: PgPool) {
    let franchise = FranchiseRepo::create(&pool, &new_franchise("Acme")).await.unwrap();
    let branch = BranchRepo::create(&pool, &new_branch(franchise.id, "North"))
        .await
        .unwrap();
    let product = ProductRepo::create(&pool, &new_product(branch.id, "Widget", 7))
        .await
        .unwrap();

    assert_eq!(branch.franchise_id, franchise.id);
    assert_eq!(product.branch_id, branch.id);

    let products = ProductRepo::list_by_branch(&pool, branch.id).await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Widget");
    assert_eq!(products[0].stock, 7);
    assert_eq!(products[0].branch_name, "North");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_franchise_name_rejected_ignoring_case(pool: PgPool) {
    FranchiseRepo::create(&pool, &new_franchise("Acme")).await.unwrap();

    let err = FranchiseRepo::create(&pool, &new_franchise("aCME"))
        .await
        .map_err(DbError::from)
        .unwrap_err();
    assert_matches!(err, DbError::UniqueViolation(c) if c == "uq_franchises_name_ci");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_branch_name_scoped_to_franchise(pool: PgPool) {
    let acme = FranchiseRepo::create(&pool, &new_franchise("Acme")).await.unwrap();
    let globex = FranchiseRepo::create(&pool, &new_franchise("Globex")).await.unwrap();
    BranchRepo::create(&pool, &new_branch(acme.id, "North")).await.unwrap();

    assert!(BranchRepo::create(&pool, &new_branch(globex.id, "north")).await.is_ok());
    let err = BranchRepo::create(&pool, &new_branch(acme.id, "NORTH"))
        .await
        .map_err(DbError::from)
        .unwrap_err();
    assert_matches!(err, DbError::UniqueViolation(_));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_name_excludes_self(pool: PgPool) {
    let acme = FranchiseRepo::create(&pool, &new_franchise("Acme")).await.unwrap();

    let found = FranchiseRepo::find_by_name(&pool, "ACME", None).await.unwrap();
    assert_eq!(found.map(|f| f.id), Some(acme.id));

    let excluded = FranchiseRepo::find_by_name(&pool, "ACME", Some(acme.id))
        .await
        .unwrap();
    assert!(excluded.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fk_violation_branch_bad_franchise(pool: PgPool) {
    let err = BranchRepo::create(&pool, &new_branch(999_999, "Orphan"))
        .await
        .map_err(DbError::from)
        .unwrap_err();
    assert_matches!(err, DbError::ForeignKeyViolation(_));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_stock_rejected(pool: PgPool) {
    let acme = FranchiseRepo::create(&pool, &new_franchise("Acme")).await.unwrap();
    let north = BranchRepo::create(&pool, &new_branch(acme.id, "North")).await.unwrap();

    let err = ProductRepo::create(&pool, &new_product(north.id, "Widget", -1))
        .await
        .map_err(DbError::from)
        .unwrap_err();
    assert_matches!(err, DbError::CheckViolation(_));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_overlong_name_rejected(pool: PgPool) {
    let err = FranchiseRepo::create(&pool, &new_franchise(&"x".repeat(101)))
        .await
        .map_err(DbError::from)
        .unwrap_err();
    assert_matches!(err, DbError::CheckViolation(c) if c == "franchises_name_check");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cascade_delete_franchise(pool: PgPool) {
    let acme = FranchiseRepo::create(&pool, &new_franchise("Acme")).await.unwrap();
    let b1 = BranchRepo::create(&pool, &new_branch(acme.id, "B1")).await.unwrap();
    let b2 = BranchRepo::create(&pool, &new_branch(acme.id, "B2")).await.unwrap();
    let p1 = ProductRepo::create(&pool, &new_product(b1.id, "P1", 1)).await.unwrap();
    let p2 = ProductRepo::create(&pool, &new_product(b1.id, "P2", 2)).await.unwrap();

    assert!(FranchiseRepo::delete(&pool, acme.id).await.unwrap());

    for id in [b1.id, b2.id] {
        assert!(BranchRepo::find_by_id(&pool, id).await.unwrap().is_none());
    }
    for id in [p1.id, p2.id] {
        assert!(ProductRepo::find_by_id(&pool, id).await.unwrap().is_none());
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_branch_moves_franchise(pool: PgPool) {
    let acme = FranchiseRepo::create(&pool, &new_franchise("Acme")).await.unwrap();
    let globex = FranchiseRepo::create(&pool, &new_franchise("Globex")).await.unwrap();
    let north = BranchRepo::create(&pool, &new_branch(acme.id, "North")).await.unwrap();

    let moved = BranchRepo::update(
        &pool,
        north.id,
        &UpdateBranch {
            name: None,
            franchise_id: Some(globex.id),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(moved.franchise_id, globex.id);
    assert_eq!(moved.name, "North");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_returns_none(pool: PgPool) {
    let result = FranchiseRepo::update(
        &pool,
        999_999,
        &UpdateFranchise {
            name: "Ghost".into(),
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summaries_include_zero_counts(pool: PgPool) {
    let acme = FranchiseRepo::create(&pool, &new_franchise("Acme")).await.unwrap();
    FranchiseRepo::create(&pool, &new_franchise("Empty")).await.unwrap();
    let north = BranchRepo::create(&pool, &new_branch(acme.id, "North")).await.unwrap();
    BranchRepo::create(&pool, &new_branch(acme.id, "South")).await.unwrap();
    ProductRepo::create(&pool, &new_product(north.id, "Widget", 7)).await.unwrap();

    let franchises = FranchiseRepo::list_summaries(&pool).await.unwrap();
    assert_eq!(franchises.len(), 2);
    assert_eq!(franchises[0].branches_num, 2);
    assert_eq!(franchises[1].branches_num, 0);

    let branches = BranchRepo::list_by_franchise(&pool, acme.id).await.unwrap();
    assert_eq!(branches[0].products_num, 1);
    assert_eq!(branches[1].products_num, 0);
    assert_eq!(branches[0].franchise_name, "Acme");

    assert!(BranchRepo::list_by_franchise(&pool, 999_999).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_top_stock_per_branch(pool: PgPool) {
    let acme = FranchiseRepo::create(&pool, &new_franchise("Acme")).await.unwrap();
    let north = BranchRepo::create(&pool, &new_branch(acme.id, "North")).await.unwrap();
    BranchRepo::create(&pool, &new_branch(acme.id, "Empty")).await.unwrap();

    let bolt = ProductRepo::create(&pool, &new_product(north.id, "Bolt", 10)).await.unwrap();
    ProductRepo::create(&pool, &new_product(north.id, "Nut", 10)).await.unwrap();
    ProductRepo::create(&pool, &new_product(north.id, "Washer", 2)).await.unwrap();

    let report = FranchiseRepo::top_stock_per_branch(&pool, acme.id).await.unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].branch_id, north.id);
    assert_eq!(report[0].product_id, bolt.id);
    assert_eq!(report[0].stock, 10);
}
