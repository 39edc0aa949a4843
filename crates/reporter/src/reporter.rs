//! Periodic self-stat reporter
//!
//! Runs as an async task, snapshotting the registry at the configured
//! interval and writing each formatted line via tracing.

use std::sync::Arc;

use tokio::time::interval;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::format::RecordFormatter;
use crate::{HumanFormatter, JsonFormatter, ReportFormat, ReporterConfig};
use vital_stats::Registry;

/// Periodic self-stat reporter
///
/// Owns a handle to the registry it reports on; the host keeps its own
/// handle for registration and spawns `run` as a task.
pub struct Reporter {
    config: ReporterConfig,
    registry: Arc<Registry>,
    formatter: Box<dyn RecordFormatter>,
}

impl Reporter {
    /// Create a reporter for the given registry
    pub fn new(config: ReporterConfig, registry: Arc<Registry>) -> Self {
        let formatter: Box<dyn RecordFormatter> = match config.format {
            ReportFormat::Human => Box::new(HumanFormatter::new()),
            ReportFormat::Json => Box::new(JsonFormatter::new()),
        };

        Self {
            config,
            registry,
            formatter,
        }
    }

    /// Run the reporter until cancellation
    ///
    /// This is the main entry point - spawn this as a tokio task.
    pub async fn run(self, cancel: CancellationToken) {
        if !self.config.enabled {
            info!("self-stat reporting disabled");
            return;
        }

        let mut ticker = interval(self.config.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        info!(
            interval_secs = self.config.interval.as_secs(),
            format = ?self.config.format,
            "self-stat reporter started"
        );

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("self-stat reporter shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    self.report_once();
                }
            }
        }
    }

    /// Collect and report a snapshot once
    ///
    /// Exposed for hosts that drive their own cadence instead of `run`.
    pub fn report_once(&self) {
        let records = self.registry.collect_all();
        if records.is_empty() {
            return;
        }

        let output = self.formatter.format(&records);

        // Log each line separately for human format (multiple lines)
        for line in output.lines() {
            info!("{}", line);
        }
    }
}
