//! Domain logic for the franchise hierarchy.
//!
//! Everything here is pure: validation rules, scoped name comparison, the
//! top-stock selection and the success/failure envelope. Storage lives in
//! `franchise_db`, transport in `franchise_api`.

pub mod error;
pub mod outcome;
pub mod top_stock;
pub mod types;
pub mod uniqueness;
pub mod validation;
