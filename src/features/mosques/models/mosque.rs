use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::geo::{round_km, Coordinate};

/// Air conditioning condition, only meaningful when the mosque has AC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "ac_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AcStatus {
    Working,
    Broken,
    Partial,
}

impl std::fmt::Display for AcStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AcStatus::Working => write!(f, "working"),
            AcStatus::Broken => write!(f, "broken"),
            AcStatus::Partial => write!(f, "partial"),
        }
    }
}

/// Cleanliness of the ablution (wudhu) area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "wudhu_cleanliness", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WudhuCleanliness {
    VeryClean,
    Clean,
    Average,
    NeedsCleaning,
}

impl std::fmt::Display for WudhuCleanliness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WudhuCleanliness::VeryClean => write!(f, "very_clean"),
            WudhuCleanliness::Clean => write!(f, "clean"),
            WudhuCleanliness::Average => write!(f, "average"),
            WudhuCleanliness::NeedsCleaning => write!(f, "needs_cleaning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "shoe_storage", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ShoeStorage {
    Shelves,
    Lockers,
    FloorOnly,
    None,
}

impl std::fmt::Display for ShoeStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShoeStorage::Shelves => write!(f, "shelves"),
            ShoeStorage::Lockers => write!(f, "lockers"),
            ShoeStorage::FloorOnly => write!(f, "floor_only"),
            ShoeStorage::None => write!(f, "none"),
        }
    }
}

/// A mosque with its facility information.
///
/// `distance_km` is derived per query and never stored.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Mosque {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[sqlx(skip)]
    pub distance_km: Option<f64>,
    pub has_ac: bool,
    pub ac_status: Option<AcStatus>,
    pub wudhu_cleanliness: Option<WudhuCleanliness>,
    pub separate_wudhu_areas: Option<bool>,
    pub parking_available: bool,
    pub bike_parking_available: bool,
    pub wheelchair_accessible: bool,
    pub prayer_mats_provided: bool,
    pub shoe_storage: Option<ShoeStorage>,
    pub open_24_hours: bool,
    pub friday_khutbah_time: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub google_maps_link: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

impl Mosque {
    /// AC status that respects `has_ac`: a mosque without AC has no status
    pub fn effective_ac_status(&self) -> Option<AcStatus> {
        if self.has_ac {
            self.ac_status
        } else {
            None
        }
    }

    /// Annotate with the rounded great-circle distance from `origin`
    pub fn with_distance_from(mut self, origin: &Coordinate) -> Self {
        let distance = crate::shared::geo::haversine_km(
            origin.latitude(),
            origin.longitude(),
            self.latitude,
            self.longitude,
        );
        self.distance_km = Some(round_km(distance));
        self
    }

    /// Link used by the "directions" action: the stored Google Maps link, or a
    /// Maps search for the address
    pub fn directions_url(&self) -> String {
        match self.google_maps_link.as_deref().map(str::trim) {
            Some(link) if !link.is_empty() => link.to_string(),
            _ => format!(
                "https://www.google.com/maps/search/?api=1&query={}",
                urlencoding::encode(&self.address)
            ),
        }
    }
}

/// Data for a new mosque entry sent to a submission sink
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMosqueSubmission {
    pub name: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub has_ac: bool,
    pub ac_status: Option<AcStatus>,
    pub wudhu_cleanliness: Option<WudhuCleanliness>,
    pub separate_wudhu_areas: bool,
    pub parking_available: bool,
    pub bike_parking_available: bool,
    pub wheelchair_accessible: bool,
    pub prayer_mats_provided: bool,
    pub shoe_storage: Option<ShoeStorage>,
    pub open_24_hours: bool,
    pub friday_khutbah_time: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub google_maps_link: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

/// Review state of a submitted mosque
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "submission_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

/// Acknowledgement returned by a submission sink
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
}
