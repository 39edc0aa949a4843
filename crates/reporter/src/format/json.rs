//! JSON snapshot formatter
//!
//! Formats records as a compact JSON array for machine parsing.
//!
//! # Example Output
//!
//! ```json
//! [{"name":"gather","tags":{"input":"net"},"fields":{"errors":2},"timestamp":"..."}]
//! ```

use super::RecordFormatter;
use vital_record::ExportRecord;

/// JSON snapshot formatter
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl RecordFormatter for JsonFormatter {
    fn format(&self, records: &[ExportRecord]) -> String {
        // Compact JSON (no pretty printing for log lines)
        serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string())
    }
}
