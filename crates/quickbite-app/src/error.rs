// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use thiserror::Error;

use crate::ValueKind;

/// Failures raised by store, filter, and list view operations.
///
/// Every variant is returned before anything is mutated, so a caller that
/// receives one still holds a valid, unchanged store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("record {key} is invalid: {reason}")]
    InvalidRecord { key: String, reason: String },

    #[error("no record with key {key}")]
    NotFound { key: String },

    #[error("field `{field}` holds {expected} values, got {found}")]
    TypeMismatch {
        field: &'static str,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("{value:?} is not a valid value for field `{field}`")]
    InvalidValue { field: &'static str, value: String },

    #[error("field `{field}` is the record key and cannot be changed")]
    ReadOnlyField { field: &'static str },

    #[error("unknown selector {value:?}; choose one of: all, {}", allowed.join(", "))]
    UnknownSelector {
        value: String,
        allowed: Vec<&'static str>,
    },
}

impl ListError {
    pub(crate) fn duplicate(key: impl std::fmt::Display) -> Self {
        Self::InvalidRecord {
            key: key.to_string(),
            reason: "duplicate key -- every record in a view needs a unique key".to_owned(),
        }
    }

    pub(crate) fn rejected(key: impl std::fmt::Display, cause: &ListError) -> Self {
        Self::InvalidRecord {
            key: key.to_string(),
            reason: cause.to_string(),
        }
    }

    pub(crate) fn not_found(key: impl std::fmt::Display) -> Self {
        Self::NotFound {
            key: key.to_string(),
        }
    }

    pub fn type_mismatch(field: &'static str, expected: ValueKind, found: ValueKind) -> Self {
        Self::TypeMismatch {
            field,
            expected,
            found,
        }
    }

    pub fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }
}

pub type ListResult<T> = std::result::Result<T, ListError>;

#[cfg(test)]
mod tests {
    use super::ListError;
    use crate::ValueKind;

    #[test]
    fn type_mismatch_message_names_both_kinds() {
        let error = ListError::type_mismatch("status", ValueKind::Bool, ValueKind::Text);
        assert_eq!(
            error.to_string(),
            "field `status` holds bool values, got text"
        );
    }

    #[test]
    fn unknown_selector_lists_allowed_values() {
        let error = ListError::UnknownSelector {
            value: "shipped".to_owned(),
            allowed: vec!["pending", "delivered"],
        };
        let message = error.to_string();
        assert!(message.contains("\"shipped\""));
        assert!(message.contains("all, pending, delivered"));
    }
}
