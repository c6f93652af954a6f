use crate::core::notifier::DeployNotifier;
use crate::core::{ContentRecord, Pipeline, ProcessingOutcome, RunReport};
use crate::utils::error::Result;
use crate::utils::monitor::RunMonitor;

/// Runs the pipeline once. Extract and transform failures are turned into
/// the fallback record so the output file always exists; only a failed
/// write is returned as an error.
pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    notifier: Option<DeployNotifier>,
    monitor: RunMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            notifier: None,
            monitor: RunMonitor::default(),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            notifier: None,
            monitor: RunMonitor::new(monitor_enabled),
        }
    }

    pub fn with_notifier(mut self, notifier: DeployNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    async fn process(&self) -> Result<ContentRecord> {
        tracing::info!("Extracting input text...");
        let raw_text = self.pipeline.extract().await?;
        self.monitor.log_phase("Extract");

        tracing::info!("Generating content...");
        let record = self.pipeline.transform(raw_text).await?;
        self.monitor.log_phase("Transform");

        Ok(record)
    }

    pub async fn run(&self) -> Result<RunReport> {
        tracing::info!("Starting content ETL process...");

        let (record, outcome) = match self.process().await {
            Ok(record) => (record, ProcessingOutcome::Generated),
            Err(e) => {
                tracing::error!(
                    "❌ An error occurred during AI processing: {} (Category: {:?})",
                    e,
                    e.category()
                );
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                let reason = e.to_string();
                (
                    ContentRecord::fallback(&reason),
                    ProcessingOutcome::Fallback { reason },
                )
            }
        };

        tracing::info!("Loading content record...");
        let output_path = self.pipeline.load(&record).await?;
        self.monitor.log_phase("Load");

        match &outcome {
            ProcessingOutcome::Generated => {
                tracing::info!("✅ Success! Content saved to {}", output_path)
            }
            ProcessingOutcome::Fallback { .. } => {
                tracing::warn!("Fallback record saved to {}", output_path)
            }
        }

        // 失敗的紀錄不觸發重新部署
        let deploy = match (&outcome, &self.notifier) {
            (ProcessingOutcome::Generated, Some(notifier)) => Some(notifier.notify().await),
            _ => None,
        };

        self.monitor.log_final_stats();

        Ok(RunReport {
            output_path,
            outcome,
            deploy,
        })
    }
}
