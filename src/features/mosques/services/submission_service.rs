use std::sync::Arc;
use std::time::Duration;

use crate::core::error::{AppError, Result};
use crate::features::mosques::models::{NewMosqueSubmission, SubmissionReceipt};
use crate::features::mosques::sinks::SubmissionSink;

/// Forwards validated mosque submissions to the configured sink
pub struct SubmissionService {
    sink: Arc<dyn SubmissionSink>,
    timeout: Duration,
}

impl SubmissionService {
    pub fn new(sink: Arc<dyn SubmissionSink>, timeout: Duration) -> Self {
        Self { sink, timeout }
    }

    pub async fn submit(&self, mut submission: NewMosqueSubmission) -> Result<SubmissionReceipt> {
        // an AC condition only means something when the mosque has AC
        if !submission.has_ac {
            submission.ac_status = None;
        }

        let sink = self.sink.sink_name();
        let name = submission.name.clone();

        let receipt = tokio::time::timeout(self.timeout, self.sink.submit(submission))
            .await
            .map_err(|_| {
                tracing::warn!("Submission sink '{}' timed out after {:?}", sink, self.timeout);
                AppError::SourceTimeout(format!("Submission sink '{}' did not respond in time", sink))
            })?
            .inspect_err(|e| tracing::error!("Submission sink '{}' failed: {}", sink, e))?;

        tracing::info!(
            "Mosque '{}' submitted as {} via '{}'",
            name,
            receipt.id,
            sink
        );

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::mosques::models::{AcStatus, SubmissionStatus};
    use crate::features::mosques::sinks::LoggingSubmissionSink;
    use crate::shared::test_helpers::{sample_submission, FailingSubmissionSink, RecordingSubmissionSink};

    #[tokio::test(start_paused = true)]
    async fn test_submit_returns_pending_receipt() {
        let service = SubmissionService::new(
            Arc::new(LoggingSubmissionSink::new(Duration::from_millis(2000))),
            Duration::from_secs(10),
        );

        let receipt = service.submit(sample_submission()).await.unwrap();
        assert_eq!(receipt.status, SubmissionStatus::Pending);
    }

    #[tokio::test]
    async fn test_ac_status_is_dropped_without_ac() {
        let sink = Arc::new(RecordingSubmissionSink::default());
        let service = SubmissionService::new(sink.clone(), Duration::from_secs(1));

        let mut submission = sample_submission();
        submission.has_ac = false;
        submission.ac_status = Some(AcStatus::Broken);
        service.submit(submission).await.unwrap();

        let recorded = sink.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].ac_status, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_sink_times_out() {
        let service = SubmissionService::new(
            Arc::new(LoggingSubmissionSink::new(Duration::from_secs(30))),
            Duration::from_secs(10),
        );

        let err = service.submit(sample_submission()).await.unwrap_err();
        assert!(matches!(err, AppError::SourceTimeout(_)));
    }

    #[tokio::test]
    async fn test_sink_failure_is_propagated() {
        let service = SubmissionService::new(Arc::new(FailingSubmissionSink), Duration::from_secs(1));

        let err = service.submit(sample_submission()).await.unwrap_err();
        assert!(matches!(err, AppError::ExternalServiceError(_)));
    }
}
