use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs extract, transform and load once.
    ///
    /// A failed export is reported in the summary instead of failing the run,
    /// so the caller can still report how many users were collected. Nothing is
    /// printed here; the user-facing lines come back in the summary.
    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("🚀 Starting user aggregation");
        self.monitor.log_stats("start");

        // Extract
        let fetched = self.pipeline.extract().await?;
        self.monitor.log_stats("extract");

        // Transform
        let collection = self.pipeline.transform(fetched).await?;
        self.monitor.log_stats("transform");

        // Load
        let label = self.pipeline.output_format().label();
        let (output_path, export_error, export_message) = match self.pipeline.load(&collection).await {
            Ok(path) => {
                tracing::info!("📁 Output saved to: {}", path);
                let message = format!("User data saved to {} file: {}", label, path);
                (Some(path), None, message)
            }
            Err(e) => {
                tracing::error!(
                    "❌ Export failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                let message = format!(
                    "An error occurred while saving the user data to {} file: {}",
                    label,
                    e.user_friendly_message()
                );
                (None, Some(e.to_string()), message)
            }
        };
        self.monitor.log_stats("load");
        self.monitor.log_final_stats();

        Ok(RunSummary {
            total_records: collection.len(),
            output_path,
            export_error,
            diagnostics: collection.diagnostics,
            export_message,
        })
    }
}
