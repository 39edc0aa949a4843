//! Reporter configuration
//!
//! Controls how self-stats are reported.
//!
//! # Defaults
//!
//! Reporting is enabled by default with sensible settings:
//! - `enabled`: true
//! - `interval`: 60s
//! - `format`: human
//!
//! This means a minimal config gets self-observability out of the box.

use serde::Deserialize;
use std::time::Duration;

/// Report output format
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON structured output
    Json,
}

/// Reporter configuration
///
/// # Example
///
/// ```toml
/// [self_stats]
/// # All fields optional - defaults to enabled with human format
/// enabled = true
/// interval = "60s"
/// format = "human"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    /// Enable periodic reporting
    /// Default: true
    pub enabled: bool,

    /// Reporting interval
    /// Default: 60s
    #[serde(with = "humantime_serde")]
    pub interval: Duration,

    /// Output format (human, json)
    /// Default: human
    pub format: ReportFormat,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: Duration::from_secs(60),
            format: ReportFormat::Human,
        }
    }
}
