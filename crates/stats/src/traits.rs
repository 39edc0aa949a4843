//! Stat capability trait
//!
//! Components hold stats through this trait so they depend on the capability
//! set (read, update, identify) without depending on construction details.
//! There is exactly one implementation, `Counter`; the seam exists for
//! collaborators, not for variant dispatch.

use std::collections::BTreeMap;

/// One observable value: a named, tagged counter or gauge
///
/// All methods take `&self`; implementations are internally synchronized and
/// handles are shared as `Arc<dyn Stat>` across threads.
pub trait Stat: Send + Sync {
    /// The measurement this stat belongs to (e.g. a subsystem name)
    fn name(&self) -> &str;

    /// The field within the measurement (e.g. "errors", "bytes_written")
    fn field_name(&self) -> &str;

    /// A copy of the stat's tag set
    ///
    /// Each call allocates an independent copy; mutating the returned map
    /// never affects the stat.
    fn tags(&self) -> BTreeMap<String, String>;

    /// The stat's identity hash, derived from name and tags
    ///
    /// Stats sharing a measurement and tag set share a key regardless of
    /// field, which is how the registry groups fields into one record.
    fn key(&self) -> u64;

    /// Add `delta` to the value atomically
    fn incr(&self, delta: i64);

    /// Replace the value atomically
    fn set(&self, value: i64);

    /// Read the current value atomically
    fn get(&self) -> i64;
}
