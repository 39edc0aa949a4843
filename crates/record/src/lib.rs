//! Vital Record - Export record value type
//!
//! This crate provides `ExportRecord`, the unit of output produced when the
//! stat registry is snapshotted: one measurement name, its tag set, every
//! field observed for that measurement, and a single capture timestamp.
//!
//! # Design Principles
//!
//! - **Immutable**: a record is a frozen snapshot; there are no setters
//! - **Validated at construction**: `ExportRecord::new` is the only fallible
//!   operation in the whole system, and it rejects malformed records up front
//! - **Transport-agnostic**: records derive `Serialize` so any downstream
//!   exporter can encode them; this crate owns no wire format

mod error;
mod record;

pub use error::RecordError;
pub use record::ExportRecord;

/// Result type for record operations
pub type Result<T> = std::result::Result<T, RecordError>;

#[cfg(test)]
mod record_test;
