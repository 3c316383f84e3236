use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppQuery;
use crate::features::mosques::dtos::{
    DetailQuery, MosqueDetailDto, NearbyMosquesDto, NearbyQuery,
};
use crate::features::mosques::models::LocationFailure;
use crate::features::mosques::services::NearbyMosqueResolver;
use crate::shared::constants::{LOCATION_REQUIRED_MESSAGE, SOURCE_UNAVAILABLE_MESSAGE};
use crate::shared::geo::Coordinate;
use crate::shared::types::{ApiResponse, Meta};

/// Find mosques near the user's location
///
/// An empty list with `source_status = ok` means no mosque is within the
/// radius. When the data source fails the response is 503 with
/// `source_status = unavailable`.
#[utoipa::path(
    get,
    path = "/api/mosques/nearby",
    params(NearbyQuery),
    responses(
        (status = 200, description = "Mosques sorted by distance", body = ApiResponse<NearbyMosquesDto>),
        (status = 400, description = "Location missing, invalid or unavailable"),
        (status = 503, description = "Mosque data source unavailable", body = ApiResponse<NearbyMosquesDto>)
    ),
    tag = "mosques"
)]
pub async fn get_nearby_mosques(
    State(resolver): State<Arc<NearbyMosqueResolver>>,
    AppQuery(query): AppQuery<NearbyQuery>,
) -> Result<(StatusCode, Json<ApiResponse<NearbyMosquesDto>>)> {
    let origin = request_origin(query.location_error.as_deref(), query.lat, query.lng)?;
    let (radius_km, resolved) = match query.radius_km {
        Some(radius_km) => (radius_km, resolver.resolve_within(origin, radius_km).await),
        None => (
            resolver.default_radius_km(),
            resolver
                .resolve_nearby(origin.latitude(), origin.longitude())
                .await,
        ),
    };

    match resolved {
        Ok(mosques) => {
            let total = mosques.len();
            Ok((
                StatusCode::OK,
                Json(ApiResponse::success(
                    Some(NearbyMosquesDto::resolved(&origin, radius_km, mosques)),
                    None,
                    Some(Meta::total(total)),
                )),
            ))
        }
        Err(e) if e.is_retryable() => Ok((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::failure(
                NearbyMosquesDto::unavailable(&origin, radius_km, true),
                SOURCE_UNAVAILABLE_MESSAGE.to_string(),
                None,
            )),
        )),
        Err(e) => Err(e),
    }
}

/// Get one mosque of the set resolved around a location
///
/// Pass the same `radius_km` the list was resolved with so the mosque is found
/// in the same set.
#[utoipa::path(
    get,
    path = "/api/mosques/nearby/{id}",
    params(
        ("id" = i64, Path, description = "Mosque id from the nearby list"),
        DetailQuery
    ),
    responses(
        (status = 200, description = "Mosque details", body = ApiResponse<MosqueDetailDto>),
        (status = 400, description = "Location or radius missing or invalid"),
        (status = 404, description = "Mosque not found near this location"),
        (status = 503, description = "Mosque data source unavailable")
    ),
    tag = "mosques"
)]
pub async fn get_nearby_mosque(
    State(resolver): State<Arc<NearbyMosqueResolver>>,
    Path(id): Path<i64>,
    AppQuery(query): AppQuery<DetailQuery>,
) -> Result<Json<ApiResponse<MosqueDetailDto>>> {
    let origin = request_origin(None, query.lat, query.lng)?;
    let radius_km = query
        .radius_km
        .unwrap_or_else(|| resolver.default_radius_km());

    let mosque = resolver
        .find_nearby_by_id(origin, radius_km, id)
        .await
        .map_err(|e| {
            if e.is_retryable() {
                AppError::ServiceUnavailable(SOURCE_UNAVAILABLE_MESSAGE.to_string())
            } else {
                e
            }
        })?;
    Ok(Json(ApiResponse::success(Some(mosque.into()), None, None)))
}

fn request_origin(
    location_error: Option<&str>,
    lat: Option<f64>,
    lng: Option<f64>,
) -> Result<Coordinate> {
    if let Some(code) = location_error {
        let failure = LocationFailure::from_code(code);
        tracing::debug!("Client reported location failure: {}", failure);
        return Err(AppError::LocationUnavailable(failure.message()));
    }

    match (lat, lng) {
        (Some(lat), Some(lng)) => Ok(Coordinate::new(lat, lng)?),
        _ => Err(AppError::LocationUnavailable(
            LOCATION_REQUIRED_MESSAGE.to_string(),
        )),
    }
}
