use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::mosques::models::{
    cleanliness_card_label, cleanliness_detail_label, shoe_storage_text, AcStatus,
    FacilityLabel, Mosque, ShoeStorage, WudhuCleanliness,
};
use crate::shared::geo::Coordinate;

/// Query parameters of the "find nearby" flow
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NearbyQuery {
    /// User latitude in degrees (-90..90)
    pub lat: Option<f64>,
    /// User longitude in degrees (-180..180)
    pub lng: Option<f64>,
    /// Override of the search radius in kilometers (max 50)
    pub radius_km: Option<f64>,
    /// Geolocation failure code forwarded by the client
    /// (PERMISSION_DENIED, POSITION_UNAVAILABLE, TIMEOUT, UNKNOWN)
    pub location_error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DetailQuery {
    /// Latitude the list was resolved for
    pub lat: Option<f64>,
    /// Longitude the list was resolved for
    pub lng: Option<f64>,
    /// Radius the list was resolved with, when it overrode the default
    pub radius_km: Option<f64>,
}

/// Mosque as shown on a list card or map marker
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MosqueResponseDto {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Kilometers from the query point, 2 decimals
    pub distance: f64,
    pub has_ac: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ac_status: Option<AcStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wudhu_cleanliness: Option<WudhuCleanliness>,
    pub parking_available: bool,
    pub bike_parking_available: bool,
    pub wheelchair_accessible: bool,
    pub prayer_mats_provided: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoe_storage: Option<ShoeStorage>,
    pub open_24_hours: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_maps_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub directions_url: String,
    pub ac_label: FacilityLabel,
    pub wudhu_label: FacilityLabel,
}

/// Full mosque information for the detail view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MosqueDetailDto {
    #[serde(flatten)]
    pub mosque: MosqueResponseDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separate_wudhu_areas: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friday_khutbah_time: Option<String>,
    pub ac_detail_label: FacilityLabel,
    pub wudhu_detail_label: FacilityLabel,
    pub shoe_storage_text: String,
}

/// Whether the data source answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    Ok,
    Unavailable,
}

/// Result of a nearby search.
///
/// An empty `mosques` list with `source_status = ok` means nothing is nearby;
/// with `unavailable` the search itself failed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NearbyMosquesDto {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
    pub total: usize,
    pub mosques: Vec<MosqueResponseDto>,
    pub source_status: SourceStatus,
    pub retryable: bool,
}

impl NearbyMosquesDto {
    pub fn resolved(origin: &Coordinate, radius_km: f64, mosques: Vec<Mosque>) -> Self {
        let mosques: Vec<MosqueResponseDto> = mosques.into_iter().map(Into::into).collect();
        Self {
            latitude: origin.latitude(),
            longitude: origin.longitude(),
            radius_km,
            total: mosques.len(),
            mosques,
            source_status: SourceStatus::Ok,
            retryable: false,
        }
    }

    pub fn unavailable(origin: &Coordinate, radius_km: f64, retryable: bool) -> Self {
        Self {
            latitude: origin.latitude(),
            longitude: origin.longitude(),
            radius_km,
            total: 0,
            mosques: Vec::new(),
            source_status: SourceStatus::Unavailable,
            retryable,
        }
    }
}

impl From<Mosque> for MosqueResponseDto {
    fn from(m: Mosque) -> Self {
        let directions_url = m.directions_url();
        let ac_label = m.ac_card_label();
        let ac_status = m.effective_ac_status();
        Self {
            id: m.id,
            distance: m.distance_km.unwrap_or_default(),
            wudhu_label: cleanliness_card_label(m.wudhu_cleanliness),
            name: m.name,
            address: m.address,
            latitude: m.latitude,
            longitude: m.longitude,
            has_ac: m.has_ac,
            ac_status,
            wudhu_cleanliness: m.wudhu_cleanliness,
            parking_available: m.parking_available,
            bike_parking_available: m.bike_parking_available,
            wheelchair_accessible: m.wheelchair_accessible,
            prayer_mats_provided: m.prayer_mats_provided,
            shoe_storage: m.shoe_storage,
            open_24_hours: m.open_24_hours,
            phone: m.phone,
            website: m.website,
            google_maps_link: m.google_maps_link,
            image_url: m.image_url,
            description: m.description,
            directions_url,
            ac_label,
        }
    }
}

impl From<Mosque> for MosqueDetailDto {
    fn from(m: Mosque) -> Self {
        let ac_detail_label = m.ac_detail_label();
        let wudhu_detail_label = cleanliness_detail_label(m.wudhu_cleanliness);
        let shoe_storage_text = shoe_storage_text(m.shoe_storage).to_string();
        let separate_wudhu_areas = m.separate_wudhu_areas;
        let friday_khutbah_time = m.friday_khutbah_time.clone();
        Self {
            mosque: m.into(),
            separate_wudhu_areas,
            friday_khutbah_time,
            ac_detail_label,
            wudhu_detail_label,
            shoe_storage_text,
        }
    }
}
