//! Vital Reporter - periodic self-stat collection
//!
//! Snapshots a stat registry on a configurable interval and writes each
//! record to the process's structured-log stream.
//!
//! # Overview
//!
//! - `ReporterConfig` - enabled flag, interval, output format
//! - `RecordFormatter` - human or JSON rendering of a snapshot
//! - `Reporter` - the async task that ties them together
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//! use vital_reporter::{Reporter, ReporterConfig};
//! use vital_stats::Registry;
//!
//! let registry = Arc::new(Registry::new());
//! let reporter = Reporter::new(ReporterConfig::default(), Arc::clone(&registry));
//!
//! let cancel = CancellationToken::new();
//! tokio::spawn(reporter.run(cancel.clone()));
//! ```

mod config;
pub mod format;
mod reporter;

pub use config::{ReportFormat, ReporterConfig};
pub use format::{HumanFormatter, JsonFormatter, RecordFormatter};
pub use reporter::Reporter;
