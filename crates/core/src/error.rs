use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    DuplicateName(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage failure: {0}")]
    StorageFailure(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound { entity, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = CoreError::not_found("Branch", 12);
        assert_eq!(err.to_string(), "Branch with id 12 not found");
    }

    #[test]
    fn duplicate_message_is_passed_through() {
        let err = CoreError::DuplicateName("A franchise named 'Acme' already exists".into());
        assert_eq!(err.to_string(), "A franchise named 'Acme' already exists");
    }
}
