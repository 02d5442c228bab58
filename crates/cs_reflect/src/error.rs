use alloc::string::String;

use thiserror::Error;

use crate::info::ReflectKind;

// -----------------------------------------------------------------------------
// Error

/// Errors returned by the [`access`](crate::access) helpers.
///
/// Every variant carries display names rather than the offending values,
/// the values stay borrowed by the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    /// The field does not exist, is not exported, or the target is not
    /// reachable through a mutable reference.
    #[error("field `{field}` of `{type_name}` is missing or cannot be set")]
    InvalidField { type_name: String, field: String },

    /// The field type and the supplied value type differ.
    #[error("type mismatch: expected `{expected}`, found `{actual}`")]
    TypeMismatch { expected: String, actual: String },

    /// A mutable reference was required.
    #[error("a mutable reference is required, found a shared `{type_name}`")]
    PointerRequired { type_name: String },

    /// The value does not have the expected reflect kind.
    #[error("invalid kind: expected {expected}, found {actual}")]
    InvalidKind {
        expected: ReflectKind,
        actual: ReflectKind,
    },
}

impl AccessError {
    #[inline]
    pub(crate) fn invalid_field(type_name: String, field: &str) -> Self {
        Self::InvalidField {
            type_name,
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::AccessError;
    use crate::info::ReflectKind;

    #[test]
    fn display() {
        let err = AccessError::invalid_field("Config".into(), "port");
        assert_eq!(
            err.to_string(),
            "field `port` of `Config` is missing or cannot be set"
        );

        let err = AccessError::InvalidKind {
            expected: ReflectKind::Struct,
            actual: ReflectKind::Map,
        };
        assert_eq!(err.to_string(), "invalid kind: expected Struct, found Map");
    }
}
