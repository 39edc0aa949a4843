//! Vital Stats - In-process self-observability registry
//!
//! This crate lets internal subsystems declare named, tagged counters and
//! gauges once and update them from any thread, while a collector snapshots
//! everything into export records.
//!
//! # Overview
//!
//! - `Stat` - capability trait for one observable value
//! - `Counter` - the atomic implementation behind every stat
//! - `Registry` - deduplicating owner of all registered stats
//!
//! # Design Principles
//!
//! - **Lock-free hot path**: `get`/`incr`/`set` are single atomic operations;
//!   no registry lock is touched after registration
//! - **Coarse cold path**: one mutex serializes registration and snapshotting,
//!   which are rare relative to updates
//! - **Idempotent registration**: repeat `register` calls with the same
//!   measurement, field, and tags return the same allocation
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use vital_stats::{Registry, Stat};
//!
//! let registry = Registry::new();
//!
//! let mut tags = BTreeMap::new();
//! tags.insert("input".to_string(), "net".to_string());
//! let errors = registry.register("gather", "errors", tags);
//!
//! errors.incr(1);
//! assert_eq!(errors.get(), 1);
//!
//! let records = registry.collect_all();
//! assert_eq!(records.len(), 1);
//! ```

mod counter;
mod registry;
mod traits;

pub use counter::Counter;
pub use registry::Registry;
pub use traits::Stat;
