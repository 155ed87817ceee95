//! Scoped, case-insensitive name comparison.
//!
//! Franchise names are unique globally, branch names within a franchise and
//! product names within a branch. Callers narrow the candidate set to the
//! scope; this module only decides whether a candidate collides.

use crate::types::DbId;

/// Case-folded form of a name, as compared by the uniqueness rules.
///
/// Mirrors `lower(name)` in the unique indexes of the schema.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Whether two names are equal under case-insensitive comparison.
pub fn names_match(a: &str, b: &str) -> bool {
    fold_name(a) == fold_name(b)
}

/// Find the first record in `existing` whose name collides with `name`.
///
/// `exclude_id` skips the record being updated so it can keep its own name.
/// Returns the id of the conflicting record, if any.
pub fn find_conflict<'a, I>(existing: I, name: &str, exclude_id: Option<DbId>) -> Option<DbId>
where
    I: IntoIterator<Item = (DbId, &'a str)>,
{
    let folded = fold_name(name);
    existing
        .into_iter()
        .filter(|(id, _)| Some(*id) != exclude_id)
        .find(|(_, candidate)| fold_name(candidate) == folded)
        .map(|(id, _)| id)
}
