//! Stat registry - deduplicating owner of all registered stats
//!
//! The registry maps identity keys to field groups, enabling idempotent
//! registration and whole-process snapshots.
//!
//! # Design
//!
//! - **Explicitly constructed**: the host owns the registry's lifecycle and
//!   hands `Arc<Registry>` to components; there is no process global
//! - **One lock, cold path only**: registration and snapshotting serialize on
//!   a single mutex; counter updates never touch it
//! - **Grow-only**: stats are never removed; the registry resets only when
//!   the process restarts
//!
//! # Example
//!
//! ```ignore
//! let registry = Arc::new(Registry::new());
//! let written = registry.register("sink", "bytes_written", tags);
//! written.incr(n as i64);
//!
//! // elsewhere, periodically:
//! let records = registry.collect_all();
//! ```

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use tracing::warn;
use vital_record::ExportRecord;

use crate::{Counter, Stat};

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;

/// Deduplicating registry of all stats in the process
///
/// Stats are grouped by identity key (measurement + tags), then by field
/// name. Two distinct identities that happen to hash to the same key share a
/// group; collisions are not detected or corrected.
#[derive(Default)]
pub struct Registry {
    stats: Mutex<HashMap<u64, HashMap<String, Arc<dyn Stat>>>>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stat, or return the existing one
    ///
    /// Constructs a candidate counter and inserts it under its identity and
    /// field unless a stat is already registered there, in which case the
    /// candidate is discarded and the existing handle is returned. Repeat
    /// calls with the same measurement, field, and tags therefore always
    /// return the same allocation.
    pub fn register(
        &self,
        measurement: &str,
        field: &str,
        tags: BTreeMap<String, String>,
    ) -> Arc<dyn Stat> {
        let candidate: Arc<dyn Stat> = Arc::new(Counter::new(measurement, field, tags));
        let key = candidate.key();

        let mut stats = self.stats.lock();
        match stats.entry(key) {
            Entry::Occupied(mut group) => match group.get_mut().entry(field.to_string()) {
                Entry::Occupied(existing) => Arc::clone(existing.get()),
                Entry::Vacant(slot) => {
                    slot.insert(Arc::clone(&candidate));
                    candidate
                }
            },
            Entry::Vacant(slot) => {
                slot.insert(HashMap::from([(field.to_string(), Arc::clone(&candidate))]));
                candidate
            }
        }
    }

    /// Snapshot every registered stat into export records
    ///
    /// Takes the registry lock for the whole enumeration, captures one
    /// timestamp, and builds one record per non-empty identity group with
    /// every `field -> value` pair read at that instant. A group whose record
    /// is rejected by `ExportRecord::new` is logged and skipped; the snapshot
    /// itself never fails. Record order is unspecified.
    ///
    /// Concurrent `incr`/`set`/`get` calls on already-registered stats are
    /// not blocked by a snapshot in progress.
    pub fn collect_all(&self) -> Vec<ExportRecord> {
        let stats = self.stats.lock();
        let timestamp = Utc::now();

        let mut records = Vec::with_capacity(stats.len());
        for group in stats.values() {
            let Some(first) = group.values().next() else {
                continue;
            };

            let fields: BTreeMap<String, i64> = group
                .iter()
                .map(|(field, stat)| (field.clone(), stat.get()))
                .collect();

            // all members of a group share name and tags by construction
            match ExportRecord::new(first.name(), first.tags(), fields, timestamp) {
                Ok(record) => records.push(record),
                Err(err) => {
                    warn!(
                        measurement = first.name(),
                        error = %err,
                        "dropping self-stat record"
                    );
                }
            }
        }
        records
    }

    /// Get the number of identity groups
    pub fn len(&self) -> usize {
        self.stats.lock().len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.stats.lock().is_empty()
    }
}
