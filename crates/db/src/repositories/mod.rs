//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. Name lookups compare
//! `lower(name)`, matching the case-insensitive unique indexes.

pub mod branch_repo;
pub mod franchise_repo;
pub mod product_repo;

pub use branch_repo::BranchRepo;
pub use franchise_repo::FranchiseRepo;
pub use product_repo::ProductRepo;
