pub mod branch;
pub mod franchise;
pub mod product;
