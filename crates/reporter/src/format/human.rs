//! Human-readable snapshot formatter
//!
//! Formats records in a compact, readable format for operators.
//!
//! # Example Output
//!
//! ```text
//! [stats] gather{input=net} errors=2 writes=1024
//! [stats] gather{input=disk} errors=0 writes=512
//! [stats] uptime seconds=3600
//! ```

use std::fmt::Write;

use super::RecordFormatter;
use vital_record::ExportRecord;

/// Human-readable snapshot formatter
#[derive(Debug, Clone, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        Self
    }

    fn format_record(&self, record: &ExportRecord) -> String {
        let mut output = String::from("[stats] ");
        output.push_str(record.name());

        if !record.tags().is_empty() {
            output.push('{');
            for (i, (key, value)) in record.tags().iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                let _ = write!(output, "{}={}", key, value);
            }
            output.push('}');
        }

        for (field, value) in record.fields() {
            let _ = write!(output, " {}={}", field, value);
        }

        output
    }
}

impl RecordFormatter for HumanFormatter {
    fn format(&self, records: &[ExportRecord]) -> String {
        let mut lines = Vec::with_capacity(records.len());
        for record in records {
            lines.push(self.format_record(record));
        }
        lines.join("\n")
    }
}
