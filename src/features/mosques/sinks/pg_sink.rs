use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::mosques::models::{NewMosqueSubmission, SubmissionReceipt};
use crate::features::mosques::sinks::SubmissionSink;

/// Stores submissions in `mosque_submissions` awaiting verification
pub struct PgSubmissionSink {
    pool: PgPool,
}

impl PgSubmissionSink {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionSink for PgSubmissionSink {
    async fn submit(&self, submission: NewMosqueSubmission) -> Result<SubmissionReceipt> {
        let receipt = sqlx::query_as::<_, SubmissionReceipt>(
            r#"
            INSERT INTO mosque_submissions (
                id, name, address, latitude, longitude,
                has_ac, ac_status, wudhu_cleanliness, separate_wudhu_areas,
                parking_available, bike_parking_available, wheelchair_accessible,
                prayer_mats_provided, shoe_storage, open_24_hours, friday_khutbah_time,
                phone, website, google_maps_link, image_url, description
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                $12, $13, $14, $15, $16, $17, $18, $19, $20, $21
            )
            RETURNING id, status, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&submission.name)
        .bind(&submission.address)
        .bind(submission.latitude)
        .bind(submission.longitude)
        .bind(submission.has_ac)
        .bind(submission.ac_status)
        .bind(submission.wudhu_cleanliness)
        .bind(submission.separate_wudhu_areas)
        .bind(submission.parking_available)
        .bind(submission.bike_parking_available)
        .bind(submission.wheelchair_accessible)
        .bind(submission.prayer_mats_provided)
        .bind(submission.shoe_storage)
        .bind(submission.open_24_hours)
        .bind(&submission.friday_khutbah_time)
        .bind(&submission.phone)
        .bind(&submission.website)
        .bind(&submission.google_maps_link)
        .bind(&submission.image_url)
        .bind(&submission.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to store mosque submission: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Mosque submission stored: id={}, name={}",
            receipt.id,
            submission.name
        );

        Ok(receipt)
    }

    fn sink_name(&self) -> &'static str {
        "postgres"
    }
}
