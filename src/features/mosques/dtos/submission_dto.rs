use chrono::{DateTime, Utc};
use serde::de::{Deserializer, IntoDeserializer};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::mosques::models::{
    AcStatus, NewMosqueSubmission, ShoeStorage, SubmissionReceipt, SubmissionStatus,
    WudhuCleanliness,
};
use crate::shared::validation::PHONE_REGEX;

/// New mosque entry sent from the "add mosque" form
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_location_pair"))]
pub struct SubmitMosqueDto {
    #[validate(
        length(min = 1, max = 255, message = "Nama masjid wajib diisi (maks. 255 karakter)"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[validate(
        length(min = 1, max = 1000, message = "Alamat wajib diisi (maks. 1000 karakter)"),
        custom(function = "validate_not_blank")
    )]
    pub address: String,

    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude harus antara -90 dan 90"))]
    pub latitude: Option<f64>,

    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude harus antara -180 dan 180"))]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub has_ac: bool,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub ac_status: Option<AcStatus>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub wudhu_cleanliness: Option<WudhuCleanliness>,

    #[serde(default)]
    pub separate_wudhu_areas: bool,

    #[serde(default)]
    pub parking_available: bool,

    #[serde(default)]
    pub bike_parking_available: bool,

    #[serde(default)]
    pub wheelchair_accessible: bool,

    #[serde(default)]
    pub prayer_mats_provided: bool,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub shoe_storage: Option<ShoeStorage>,

    #[serde(default)]
    pub open_24_hours: bool,

    /// Free text, e.g. "12:00"
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = 32, message = "Waktu khutbah maks. 32 karakter"))]
    pub friday_khutbah_time: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(
        length(max = 32, message = "Nomor telepon maks. 32 karakter"),
        regex(path = *PHONE_REGEX, message = "Nomor telepon tidak valid")
    )]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(url(message = "Website harus berupa URL yang valid"))]
    pub website: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(url(message = "Link Google Maps harus berupa URL yang valid"))]
    pub google_maps_link: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(url(message = "URL gambar harus berupa URL yang valid"))]
    pub image_url: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = 5000, message = "Deskripsi maks. 5000 karakter"))]
    pub description: Option<String>,
}

/// Acknowledgement of an accepted submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmissionResponseDto {
    pub id: Uuid,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
}

impl From<SubmitMosqueDto> for NewMosqueSubmission {
    fn from(dto: SubmitMosqueDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            address: dto.address.trim().to_string(),
            latitude: dto.latitude,
            longitude: dto.longitude,
            has_ac: dto.has_ac,
            ac_status: dto.ac_status.filter(|_| dto.has_ac),
            wudhu_cleanliness: dto.wudhu_cleanliness,
            separate_wudhu_areas: dto.separate_wudhu_areas,
            parking_available: dto.parking_available,
            bike_parking_available: dto.bike_parking_available,
            wheelchair_accessible: dto.wheelchair_accessible,
            prayer_mats_provided: dto.prayer_mats_provided,
            shoe_storage: dto.shoe_storage,
            open_24_hours: dto.open_24_hours,
            friday_khutbah_time: dto.friday_khutbah_time,
            phone: dto.phone,
            website: dto.website,
            google_maps_link: dto.google_maps_link,
            image_url: dto.image_url,
            description: dto.description,
        }
    }
}

impl From<SubmissionReceipt> for SubmissionResponseDto {
    fn from(receipt: SubmissionReceipt) -> Self {
        Self {
            id: receipt.id,
            status: receipt.status,
            created_at: receipt.created_at,
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Tidak boleh kosong".into());
        return Err(err);
    }
    Ok(())
}

fn validate_location_pair(dto: &SubmitMosqueDto) -> Result<(), ValidationError> {
    if dto.latitude.is_some() != dto.longitude.is_some() {
        let mut err = ValidationError::new("location_pair");
        err.message = Some("Latitude dan longitude harus diisi bersamaan".into());
        return Err(err);
    }
    Ok(())
}

/// Form selects and inputs send "" for "not chosen"
fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) if !value.trim().is_empty() => {
            let value: serde::de::value::StringDeserializer<D::Error> =
                value.into_deserializer();
            T::deserialize(value).map(Some)
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> serde_json::Value {
        json!({
            "name": "Masjid Al-Hikmah",
            "address": "Jl. Kebon Sirih No. 10, Jakarta Pusat",
            "latitude": -6.1865,
            "longitude": 106.8341,
            "has_ac": true,
            "ac_status": "working",
            "wudhu_cleanliness": "clean",
            "phone": "+62 21 3456789",
            "website": "https://alhikmah.example.org"
        })
    }

    fn parse(value: serde_json::Value) -> SubmitMosqueDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_submission_passes() {
        let dto = parse(valid_payload());
        assert!(dto.validate().is_ok());
        assert!(!dto.parking_available);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut payload = valid_payload();
        payload["name"] = json!("   ");
        let errors = parse(payload).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_invalid_phone_and_url_are_rejected() {
        let mut payload = valid_payload();
        payload["phone"] = json!("call me");
        payload["website"] = json!("not a url");
        let errors = parse(payload).validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("phone"));
        assert!(fields.contains_key("website"));
    }

    #[test]
    fn test_out_of_range_latitude_is_rejected() {
        let mut payload = valid_payload();
        payload["latitude"] = json!(95.0);
        let errors = parse(payload).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("latitude"));
    }

    #[test]
    fn test_khutbah_time_fits_stored_column() {
        let mut payload = valid_payload();
        payload["friday_khutbah_time"] = json!("1".repeat(32));
        assert!(parse(payload.clone()).validate().is_ok());

        payload["friday_khutbah_time"] = json!("1".repeat(33));
        let errors = parse(payload).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("friday_khutbah_time"));
    }

    #[test]
    fn test_latitude_without_longitude_is_rejected() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("longitude");
        assert!(parse(payload).validate().is_err());
    }

    #[test]
    fn test_empty_strings_become_none() {
        let mut payload = valid_payload();
        payload["ac_status"] = json!("");
        payload["phone"] = json!("");
        payload["shoe_storage"] = json!("");

        let dto = parse(payload);
        assert_eq!(dto.ac_status, None);
        assert_eq!(dto.phone, None);
        assert_eq!(dto.shoe_storage, None);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_unknown_enum_value_fails_to_parse() {
        let mut payload = valid_payload();
        payload["ac_status"] = json!("freezing");
        assert!(serde_json::from_value::<SubmitMosqueDto>(payload).is_err());
    }

    #[test]
    fn test_conversion_drops_ac_status_without_ac() {
        let mut payload = valid_payload();
        payload["has_ac"] = json!(false);
        payload["name"] = json!("  Masjid Al-Hikmah  ");

        let submission: NewMosqueSubmission = parse(payload).into();
        assert_eq!(submission.ac_status, None);
        assert_eq!(submission.name, "Masjid Al-Hikmah");
    }
}
