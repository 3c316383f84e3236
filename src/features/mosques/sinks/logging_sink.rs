use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::mosques::models::{NewMosqueSubmission, SubmissionReceipt, SubmissionStatus};
use crate::features::mosques::sinks::SubmissionSink;

/// Placeholder sink: logs the payload and waits to mimic a remote call
pub struct LoggingSubmissionSink {
    delay: Duration,
}

impl LoggingSubmissionSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SubmissionSink for LoggingSubmissionSink {
    async fn submit(&self, submission: NewMosqueSubmission) -> Result<SubmissionReceipt> {
        let payload = serde_json::to_string(&submission).map_err(|e| {
            AppError::Internal(format!("Failed to serialize submission: {}", e))
        })?;
        tracing::info!("Mosque submission received: {}", payload);

        tokio::time::sleep(self.delay).await;

        Ok(SubmissionReceipt {
            id: Uuid::now_v7(),
            status: SubmissionStatus::Pending,
            created_at: Utc::now(),
        })
    }

    fn sink_name(&self) -> &'static str {
        "log"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::sample_submission;

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_for_delay_and_succeeds() {
        let sink = LoggingSubmissionSink::new(Duration::from_millis(2000));
        let started = tokio::time::Instant::now();

        let receipt = sink.submit(sample_submission()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(2000));
        assert_eq!(receipt.status, SubmissionStatus::Pending);
        assert_eq!(sink.sink_name(), "log");
    }
}
