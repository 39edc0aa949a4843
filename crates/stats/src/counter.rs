//! Atomic counter - the single stat implementation
//!
//! A counter owns an immutable identity (measurement, field, tags) and one
//! atomic 64-bit value. Reads and writes are lock-free; relaxed ordering is
//! enough because no cross-counter ordering is promised.

use std::collections::BTreeMap;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::Stat;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// Named, tagged atomic counter/gauge
///
/// # Design
///
/// - `measurement`, `field`, and `tags` never change after construction, so
///   they are read without synchronization
/// - the identity key is computed on first use and cached
/// - the value is a signed 64-bit atomic; gauges may go negative
#[derive(Debug)]
pub struct Counter {
    measurement: String,
    field: String,
    tags: BTreeMap<String, String>,
    key: OnceLock<u64>,
    value: AtomicI64,
}

impl Counter {
    /// Create a counter with an initial value of zero
    pub fn new(
        measurement: impl Into<String>,
        field: impl Into<String>,
        tags: BTreeMap<String, String>,
    ) -> Self {
        Self {
            measurement: measurement.into(),
            field: field.into(),
            tags,
            key: OnceLock::new(),
            value: AtomicI64::new(0),
        }
    }
}

impl Stat for Counter {
    fn name(&self) -> &str {
        &self.measurement
    }

    fn field_name(&self) -> &str {
        &self.field
    }

    // allocates a fresh copy per call; callers cannot reach the internal map
    fn tags(&self) -> BTreeMap<String, String> {
        self.tags.clone()
    }

    fn key(&self) -> u64 {
        *self
            .key
            .get_or_init(|| identity_key(&self.measurement, &self.tags))
    }

    #[inline]
    fn incr(&self, delta: i64) {
        self.value.fetch_add(delta, Ordering::Relaxed);
    }

    #[inline]
    fn set(&self, value: i64) {
        self.value.store(value, Ordering::Relaxed);
    }

    #[inline]
    fn get(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }
}

/// Identity hash over a measurement name and tag set
///
/// FNV-1a over the name bytes, then each tag key and value. The tag map is a
/// `BTreeMap`, so pairs fold in sorted key order and the same logical tag set
/// always produces the same key no matter the insertion order.
fn identity_key(measurement: &str, tags: &BTreeMap<String, String>) -> u64 {
    let mut hash = fnv1a(FNV_OFFSET, measurement.as_bytes());
    for (key, value) in tags {
        hash = fnv1a(hash, key.as_bytes());
        hash = fnv1a(hash, value.as_bytes());
    }
    hash
}

/// FNV-1a hash (64-bit), folding `data` into `hash`
fn fnv1a(mut hash: u64, data: &[u8]) -> u64 {
    for &byte in data {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
