//! The success/failure envelope returned by every service operation.
//!
//! Failures keep a [`FailureKind`] so the transport can pick a status code,
//! but carry no data and no internal error values.

use crate::error::CoreError;

/// Category of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    DuplicateName,
    Validation,
    StorageFailure,
}

impl From<&CoreError> for FailureKind {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::NotFound { .. } => FailureKind::NotFound,
            CoreError::DuplicateName(_) => FailureKind::DuplicateName,
            CoreError::Validation(_) => FailureKind::Validation,
            CoreError::StorageFailure(_) => FailureKind::StorageFailure,
        }
    }
}

/// Result of a service operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success { message: String, data: T },
    Failure { kind: FailureKind, message: String },
}

impl<T> Outcome<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Outcome::Success {
            message: message.into(),
            data,
        }
    }

    pub fn failure(err: CoreError) -> Self {
        Outcome::Failure {
            kind: FailureKind::from(&err),
            message: err.to_string(),
        }
    }

    /// Wrap a domain result, attaching `message` on success.
    pub fn from_result(result: Result<T, CoreError>, message: impl Into<String>) -> Self {
        match result {
            Ok(data) => Outcome::success(message, data),
            Err(err) => Outcome::failure(err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Success { message, .. } | Outcome::Failure { message, .. } => message,
        }
    }

    /// The failure kind, or `None` on success.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { kind, .. } => Some(*kind),
        }
    }

    /// The payload, discarding the message.
    pub fn into_data(self) -> Option<T> {
        match self {
            Outcome::Success { data, .. } => Some(data),
            Outcome::Failure { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_result_becomes_success() {
        let outcome = Outcome::from_result(Ok::<_, CoreError>(5), "done");
        assert!(outcome.is_success());
        assert_eq!(outcome.message(), "done");
        assert_eq!(outcome.into_data(), Some(5));
    }

    #[test]
    fn error_becomes_failure_without_data() {
        let outcome: Outcome<i32> =
            Outcome::from_result(Err(CoreError::not_found("Franchise", 3)), "unused");
        assert_eq!(outcome.failure_kind(), Some(FailureKind::NotFound));
        assert_eq!(outcome.message(), "Franchise with id 3 not found");
        assert_eq!(outcome.into_data(), None);
    }

    #[test]
    fn each_error_maps_to_its_kind() {
        let cases = [
            (CoreError::DuplicateName("x".into()), FailureKind::DuplicateName),
            (CoreError::Validation("x".into()), FailureKind::Validation),
            (CoreError::StorageFailure("x".into()), FailureKind::StorageFailure),
        ];
        for (err, kind) in cases {
            assert_eq!(FailureKind::from(&err), kind);
        }
    }
}
