//! Record error types
//!
//! Errors that can occur when constructing an export record.

use thiserror::Error;

/// Errors that can occur during record construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// Record name is empty
    #[error("record name is empty")]
    EmptyName,

    /// Record name uses the reserved `_` prefix
    #[error("record name '{0}' uses the reserved '_' prefix")]
    ReservedName(String),

    /// Record has no fields
    #[error("record has no fields")]
    NoFields,

    /// A field name is empty
    #[error("record field name is empty")]
    EmptyFieldName,

    /// A field name uses the reserved `_` prefix
    #[error("field name '{0}' uses the reserved '_' prefix")]
    ReservedFieldName(String),
}

impl RecordError {
    /// Create a reserved name error
    #[inline]
    pub fn reserved_name(name: impl Into<String>) -> Self {
        Self::ReservedName(name.into())
    }

    /// Create a reserved field name error
    #[inline]
    pub fn reserved_field_name(field: impl Into<String>) -> Self {
        Self::ReservedFieldName(field.into())
    }
}
