//! Input validation shared by every entity in the hierarchy.
//!
//! The same limits are enforced by column constraints in the schema; these
//! checks reject bad input before any storage round-trip.

use crate::error::CoreError;
use crate::types::Stock;

/// Maximum length of a franchise, branch or product name, in characters.
pub const NAME_MAX_LEN: usize = 100;

/// Validate an entity name: required, non-empty, at most [`NAME_MAX_LEN`]
/// characters. No trimming is applied.
pub fn validate_name(entity: &str, name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation(format!(
            "{entity} name must not be empty"
        )));
    }
    let len = name.chars().count();
    if len > NAME_MAX_LEN {
        return Err(CoreError::Validation(format!(
            "{entity} name must be at most {NAME_MAX_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

/// Validate that a stock quantity is non-negative.
pub fn validate_stock(stock: Stock) -> Result<(), CoreError> {
    if stock < 0 {
        return Err(CoreError::Validation(format!(
            "Product stock must be zero or greater, got {stock}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_regular_name() {
        assert!(validate_name("Franchise", "Acme").is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        let err = validate_name("Branch", "").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("Branch name"));
    }

    #[test]
    fn accepts_name_at_limit() {
        let name = "x".repeat(NAME_MAX_LEN);
        assert!(validate_name("Product", &name).is_ok());
    }

    #[test]
    fn rejects_name_over_limit() {
        let name = "x".repeat(NAME_MAX_LEN + 1);
        assert_matches!(
            validate_name("Product", &name),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 100 two-byte characters are still within the limit.
        let name = "ñ".repeat(NAME_MAX_LEN);
        assert!(validate_name("Franchise", &name).is_ok());
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        assert!(validate_name("Franchise", " ").is_ok());
    }

    #[test]
    fn stock_bounds() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(7).is_ok());
        assert_matches!(validate_stock(-1), Err(CoreError::Validation(_)));
    }
}
