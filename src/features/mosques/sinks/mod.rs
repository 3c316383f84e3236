//! Destinations for user-submitted mosque entries.

mod logging_sink;
mod pg_sink;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::mosques::models::{NewMosqueSubmission, SubmissionReceipt};

pub use logging_sink::LoggingSubmissionSink;
pub use pg_sink::PgSubmissionSink;

#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Accept a validated submission for later verification
    async fn submit(&self, submission: NewMosqueSubmission) -> Result<SubmissionReceipt>;

    fn sink_name(&self) -> &'static str;
}
