//! Domain error model.

use thiserror::Error;

use crate::kind::EventKind;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic request failures live here. A missing product or offer is
/// never an error: absence is a normal branch with an empty outcome.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field required by the event kind is absent (or an empty identifier).
    #[error("Field: {field} must not be null for operation: {event_kind}")]
    MissingField {
        field: &'static str,
        event_kind: EventKind,
    },

    /// The request carried an operation kind the engine does not know.
    #[error("Incorrect operation: {kind}")]
    UnsupportedOperation { kind: String },

    /// The request carried no operation kind at all.
    #[error("Field: operation must not be null")]
    MissingOperation,
}

impl DomainError {
    pub fn missing_field(field: &'static str, event_kind: EventKind) -> Self {
        Self::MissingField { field, event_kind }
    }

    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::UnsupportedOperation { kind: kind.into() }
    }

    /// Name of the offending field, if this is a validation failure.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field, .. } => Some(*field),
            Self::MissingOperation => Some("operation"),
            Self::UnsupportedOperation { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message_names_field_and_kind() {
        let err = DomainError::missing_field("productId", EventKind::DeleteProduct);
        assert_eq!(
            err.to_string(),
            "Field: productId must not be null for operation: DELETE_PRODUCT"
        );
        assert_eq!(err.field(), Some("productId"));
    }

    #[test]
    fn unsupported_operation_has_no_field() {
        let err = DomainError::unsupported("MERGE_PRODUCT");
        assert_eq!(err.field(), None);
        assert_eq!(err.to_string(), "Incorrect operation: MERGE_PRODUCT");
    }
}
