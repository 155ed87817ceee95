//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` create/update DTOs
//! - The external representation returned by single-entity operations
//! - The aggregate rows produced by list and report queries

pub mod branch;
pub mod franchise;
pub mod product;
