//! ExportRecord - immutable snapshot of one measurement
//!
//! A record groups every field observed for one `(name, tags)` pair at a
//! single capture instant. The registry builds one record per measurement
//! group during a snapshot; all records of the same snapshot share one
//! timestamp.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{RecordError, Result};

/// Immutable export record
///
/// # Design
///
/// - Construction validates; accessors cannot fail
/// - `tags` and `fields` are `BTreeMap`s, so serialization and formatting
///   enumerate keys in sorted order and output is deterministic
/// - Names and field names starting with `_` are reserved for the exporter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRecord {
    name: String,
    tags: BTreeMap<String, String>,
    fields: BTreeMap<String, i64>,
    timestamp: DateTime<Utc>,
}

impl ExportRecord {
    /// Create a new record, validating name and fields
    ///
    /// # Errors
    ///
    /// - `RecordError::EmptyName` if `name` is empty
    /// - `RecordError::ReservedName` if `name` starts with `_`
    /// - `RecordError::NoFields` if `fields` is empty
    /// - `RecordError::EmptyFieldName` if any field name is empty
    /// - `RecordError::ReservedFieldName` if any field name starts with `_`
    pub fn new(
        name: impl Into<String>,
        tags: BTreeMap<String, String>,
        fields: BTreeMap<String, i64>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(RecordError::EmptyName);
        }
        if name.starts_with('_') {
            return Err(RecordError::reserved_name(name));
        }
        if fields.is_empty() {
            return Err(RecordError::NoFields);
        }
        for field in fields.keys() {
            if field.is_empty() {
                return Err(RecordError::EmptyFieldName);
            }
            if field.starts_with('_') {
                return Err(RecordError::reserved_field_name(field.clone()));
            }
        }

        Ok(Self {
            name,
            tags,
            fields,
            timestamp,
        })
    }

    /// Get the measurement name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the tag set
    #[inline]
    pub fn tags(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    /// Get the field mapping
    #[inline]
    pub fn fields(&self) -> &BTreeMap<String, i64> {
        &self.fields
    }

    /// Get a single field value by name
    ///
    /// Returns `None` if the field is not present.
    #[inline]
    pub fn field(&self, name: &str) -> Option<i64> {
        self.fields.get(name).copied()
    }

    /// Get the number of fields
    #[inline]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Get the capture timestamp
    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
