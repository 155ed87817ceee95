//! Highest-stock product per branch.
//!
//! Groups products by branch, keeps the maximum stock of each group and
//! breaks ties by the lowest product id. Branches without products produce
//! no entry.

use std::collections::BTreeMap;

use crate::types::{DbId, Stock};

/// The fields of a product that take part in the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockCandidate {
    pub product_id: DbId,
    pub branch_id: DbId,
    pub stock: Stock,
}

impl StockCandidate {
    /// Whether `self` wins over `other` within the same branch.
    fn beats(&self, other: &StockCandidate) -> bool {
        self.stock > other.stock || (self.stock == other.stock && self.product_id < other.product_id)
    }
}

/// Select one winner per branch, ordered by branch id.
///
/// The result does not depend on the order of `candidates`.
pub fn top_stock_per_branch<I>(candidates: I) -> Vec<StockCandidate>
where
    I: IntoIterator<Item = StockCandidate>,
{
    let mut winners: BTreeMap<DbId, StockCandidate> = BTreeMap::new();
    for candidate in candidates {
        winners
            .entry(candidate.branch_id)
            .and_modify(|current| {
                if candidate.beats(current) {
                    *current = candidate;
                }
            })
            .or_insert(candidate);
    }
    winners.into_values().collect()
}

/// Count items per key, e.g. branches per franchise.
pub fn count_by<I>(keys: I) -> BTreeMap<DbId, i64>
where
    I: IntoIterator<Item = DbId>,
{
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}
