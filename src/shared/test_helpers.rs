#![cfg(test)]

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::mosques::models::{
    AcStatus, Mosque, NewMosqueSubmission, ShoeStorage, SubmissionReceipt, SubmissionStatus,
    WudhuCleanliness,
};
use crate::features::mosques::repositories::MosqueRepository;
use crate::features::mosques::sinks::SubmissionSink;
use crate::shared::geo::Coordinate;

pub fn sample_mosque(id: i64, latitude: f64, longitude: f64) -> Mosque {
    Mosque {
        id,
        name: format!("Masjid Uji {}", id),
        address: format!("Jl. Contoh No. {}, Jakarta", id),
        latitude,
        longitude,
        distance_km: None,
        has_ac: true,
        ac_status: Some(AcStatus::Working),
        wudhu_cleanliness: Some(WudhuCleanliness::Clean),
        separate_wudhu_areas: Some(true),
        parking_available: true,
        bike_parking_available: false,
        wheelchair_accessible: false,
        prayer_mats_provided: true,
        shoe_storage: Some(ShoeStorage::Shelves),
        open_24_hours: false,
        friday_khutbah_time: Some("12:00".to_string()),
        phone: None,
        website: None,
        google_maps_link: None,
        image_url: None,
        description: None,
    }
}

pub fn sample_submission() -> NewMosqueSubmission {
    NewMosqueSubmission {
        name: "Masjid Al-Hikmah".to_string(),
        address: "Jl. Kebon Sirih No. 10, Jakarta Pusat".to_string(),
        latitude: Some(-6.1865),
        longitude: Some(106.8341),
        has_ac: true,
        ac_status: Some(AcStatus::Working),
        wudhu_cleanliness: Some(WudhuCleanliness::VeryClean),
        separate_wudhu_areas: true,
        parking_available: true,
        bike_parking_available: true,
        wheelchair_accessible: false,
        prayer_mats_provided: true,
        shoe_storage: Some(ShoeStorage::Lockers),
        open_24_hours: false,
        friday_khutbah_time: Some("12:00".to_string()),
        phone: Some("+62 21 3456789".to_string()),
        website: None,
        google_maps_link: None,
        image_url: None,
        description: None,
    }
}

/// Returns the same records for every query; the resolver does the filtering
pub struct StaticMosqueRepository {
    mosques: Vec<Mosque>,
}

impl StaticMosqueRepository {
    pub fn new(mosques: Vec<Mosque>) -> Self {
        Self { mosques }
    }
}

#[async_trait]
impl MosqueRepository for StaticMosqueRepository {
    async fn find_within_radius(&self, _origin: Coordinate, _radius_km: f64) -> Result<Vec<Mosque>> {
        Ok(self.mosques.clone())
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}

/// Answers with no records after `delay`
pub struct SlowMosqueRepository {
    delay: Duration,
}

impl SlowMosqueRepository {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl MosqueRepository for SlowMosqueRepository {
    async fn find_within_radius(&self, _origin: Coordinate, _radius_km: f64) -> Result<Vec<Mosque>> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }

    fn source_name(&self) -> &'static str {
        "slow"
    }
}

pub struct FailingMosqueRepository;

#[async_trait]
impl MosqueRepository for FailingMosqueRepository {
    async fn find_within_radius(&self, _origin: Coordinate, _radius_km: f64) -> Result<Vec<Mosque>> {
        Err(AppError::ExternalServiceError(
            "mosque source unreachable".to_string(),
        ))
    }

    fn source_name(&self) -> &'static str {
        "failing"
    }
}

/// Keeps every submission it receives
#[derive(Default)]
pub struct RecordingSubmissionSink {
    submissions: Mutex<Vec<NewMosqueSubmission>>,
}

impl RecordingSubmissionSink {
    pub fn recorded(&self) -> Vec<NewMosqueSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionSink for RecordingSubmissionSink {
    async fn submit(&self, submission: NewMosqueSubmission) -> Result<SubmissionReceipt> {
        self.submissions.lock().unwrap().push(submission);
        Ok(SubmissionReceipt {
            id: Uuid::now_v7(),
            status: SubmissionStatus::Pending,
            created_at: Utc::now(),
        })
    }

    fn sink_name(&self) -> &'static str {
        "recording"
    }
}

pub struct FailingSubmissionSink;

#[async_trait]
impl SubmissionSink for FailingSubmissionSink {
    async fn submit(&self, _submission: NewMosqueSubmission) -> Result<SubmissionReceipt> {
        Err(AppError::ExternalServiceError(
            "submission endpoint unreachable".to_string(),
        ))
    }

    fn sink_name(&self) -> &'static str {
        "failing"
    }
}

/// Fails the way a rejected INSERT does: the database answered, retrying won't help
pub struct RejectingSubmissionSink;

#[async_trait]
impl SubmissionSink for RejectingSubmissionSink {
    async fn submit(&self, _submission: NewMosqueSubmission) -> Result<SubmissionReceipt> {
        Err(AppError::Database(sqlx::Error::RowNotFound))
    }

    fn sink_name(&self) -> &'static str {
        "rejecting"
    }
}
