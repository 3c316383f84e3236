//! Great-circle distance helpers and validated WGS84 coordinates.

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Mean Earth radius in kilometers (for Haversine formula)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Added to the search radius when building a prefilter box, so a record that
/// rounds down onto the radius is still fetched
const BOUNDING_PADDING_KM: f64 = 0.01;

/// Calculate Haversine distance between two points in kilometers
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Round a distance to 2 decimal places
pub fn round_km(distance_km: f64) -> f64 {
    (distance_km * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("latitude must be a number between -90 and 90")]
    Latitude,
    #[error("longitude must be a number between -180 and 180")]
    Longitude,
}

/// A latitude/longitude pair in degrees, guaranteed to be in range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        // NaN fails both range checks
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::Latitude);
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::Longitude);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Unrounded great-circle distance to `other`
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    /// Latitude/longitude box that fully contains the circle of `radius_km`
    /// around this point.
    ///
    /// The longitude span wraps across the antimeridian when needed and covers
    /// every longitude when the circle reaches a pole.
    pub fn bounding_box(&self, radius_km: f64) -> BoundingBox {
        let angular = (radius_km + BOUNDING_PADDING_KM) / EARTH_RADIUS_KM;
        let lat_delta = angular.to_degrees();
        let min_latitude = self.latitude - lat_delta;
        let max_latitude = self.latitude + lat_delta;

        let cos_lat = self.latitude.to_radians().cos();
        let longitude = if min_latitude <= -90.0 || max_latitude >= 90.0 || angular.sin() >= cos_lat
        {
            LongitudeSpan::All
        } else {
            // widest longitude offset of a small circle at this latitude
            let lng_delta = (angular.sin() / cos_lat).asin().to_degrees();
            let west = self.longitude - lng_delta;
            let east = self.longitude + lng_delta;
            if lng_delta >= 180.0 {
                LongitudeSpan::All
            } else if west < -180.0 {
                LongitudeSpan::Wrapped {
                    from: west + 360.0,
                    to: east,
                }
            } else if east > 180.0 {
                LongitudeSpan::Wrapped {
                    from: west,
                    to: east - 360.0,
                }
            } else {
                LongitudeSpan::Range {
                    from: west,
                    to: east,
                }
            }
        };

        BoundingBox {
            min_latitude: min_latitude.max(-90.0),
            max_latitude: max_latitude.min(90.0),
            longitude,
        }
    }
}

/// Longitude part of a [`BoundingBox`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LongitudeSpan {
    /// Every longitude (the circle touches a pole)
    All,
    /// `from <= longitude <= to`
    Range { from: f64, to: f64 },
    /// Crosses the antimeridian: `longitude >= from OR longitude <= to`
    Wrapped { from: f64, to: f64 },
}

impl LongitudeSpan {
    pub fn contains(&self, longitude: f64) -> bool {
        match *self {
            LongitudeSpan::All => true,
            LongitudeSpan::Range { from, to } => (from..=to).contains(&longitude),
            LongitudeSpan::Wrapped { from, to } => longitude >= from || longitude <= to,
        }
    }
}

/// Coarse prefilter region for a radius search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub longitude: LongitudeSpan,
}

impl BoundingBox {
    pub fn contains(&self, point: &Coordinate) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&point.latitude)
            && self.longitude.contains(point.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;

    #[test]
    fn test_haversine_jakarta_bandung() {
        let jakarta = (-6.2088, 106.8456);
        let bandung = (-6.9175, 107.6191);

        let distance = haversine_km(jakarta.0, jakarta.1, bandung.0, bandung.1);

        // Haversine distance is roughly 116km (road distance is ~140km)
        assert!(distance > 110.0 && distance < 125.0);
    }

    #[test]
    fn test_haversine_same_point_is_zero() {
        let distance = haversine_km(-6.2, 106.8167, -6.2, 106.8167);
        assert_eq!(round_km(distance), 0.0);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        for _ in 0..100 {
            let a = ((-90.0..=90.0).fake::<f64>(), (-180.0..=180.0).fake::<f64>());
            let b = ((-90.0..=90.0).fake::<f64>(), (-180.0..=180.0).fake::<f64>());

            let ab = round_km(haversine_km(a.0, a.1, b.0, b.1));
            let ba = round_km(haversine_km(b.0, b.1, a.0, a.1));
            assert_eq!(ab, ba, "asymmetric distance for {:?} -> {:?}", a, b);
        }
    }

    #[test]
    fn test_one_radian_along_meridian_is_earth_radius() {
        let distance = haversine_km(0.0, 0.0, 1.0_f64.to_degrees(), 0.0);
        assert!((distance - EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_round_km() {
        assert_eq!(round_km(1.234), 1.23);
        assert_eq!(round_km(1.235_000_1), 1.24);
        assert_eq!(round_km(0.004), 0.0);
    }

    #[test]
    fn test_coordinate_accepts_bounds() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(-6.2, 106.8167).is_ok());
    }

    #[test]
    fn test_coordinate_rejects_out_of_range() {
        assert_eq!(Coordinate::new(91.0, 0.0), Err(CoordinateError::Latitude));
        assert_eq!(Coordinate::new(-90.5, 0.0), Err(CoordinateError::Latitude));
        assert_eq!(Coordinate::new(0.0, 180.01), Err(CoordinateError::Longitude));
        assert_eq!(Coordinate::new(f64::NAN, 0.0), Err(CoordinateError::Latitude));
        assert_eq!(
            Coordinate::new(0.0, f64::INFINITY),
            Err(CoordinateError::Longitude)
        );
    }

    #[test]
    fn test_bounding_box_is_plain_range_away_from_edges() {
        let origin = Coordinate::new(-6.2, 106.8167).unwrap();
        let bbox = origin.bounding_box(5.0);

        match bbox.longitude {
            LongitudeSpan::Range { from, to } => {
                let east = Coordinate::new(-6.2, to).unwrap();
                let west = Coordinate::new(-6.2, from).unwrap();
                assert!(origin.distance_km(&east) >= 5.0);
                assert!(origin.distance_km(&west) >= 5.0);
            }
            other => panic!("unexpected span: {:?}", other),
        }
        let north = Coordinate::new(bbox.max_latitude, 106.8167).unwrap();
        assert!(origin.distance_km(&north) >= 5.0);
    }

    #[test]
    fn test_bounding_box_wraps_across_antimeridian() {
        let origin = Coordinate::new(0.0, 179.99).unwrap();
        let bbox = origin.bounding_box(5.0);
        let across = Coordinate::new(0.0, -179.99).unwrap();

        assert!(origin.distance_km(&across) < 5.0);
        assert!(matches!(bbox.longitude, LongitudeSpan::Wrapped { .. }));
        assert!(bbox.contains(&across));
        assert!(bbox.contains(&Coordinate::new(0.0, 179.97).unwrap()));
        assert!(!bbox.contains(&Coordinate::new(0.0, 0.0).unwrap()));

        let west_origin = Coordinate::new(0.0, -179.99).unwrap();
        assert!(west_origin
            .bounding_box(5.0)
            .contains(&Coordinate::new(0.0, 179.99).unwrap()));
    }

    #[test]
    fn test_bounding_box_near_pole_covers_all_longitudes() {
        let origin = Coordinate::new(89.99, 0.0).unwrap();
        let bbox = origin.bounding_box(5.0);
        let far_side = Coordinate::new(89.99, 180.0).unwrap();

        assert!(origin.distance_km(&far_side) < 5.0);
        assert_eq!(bbox.longitude, LongitudeSpan::All);
        assert_eq!(bbox.max_latitude, 90.0);
        assert!(bbox.contains(&far_side));
    }

    #[test]
    fn test_bounding_box_contains_every_point_within_radius() {
        for _ in 0..200 {
            let origin = Coordinate::new(
                (-89.9..=89.9).fake::<f64>(),
                (-180.0..=180.0).fake::<f64>(),
            )
            .unwrap();
            let bbox = origin.bounding_box(5.0);

            // points on the 5 km circle in several directions
            for step in 0..16 {
                let bearing = (step as f64 * 22.5).to_radians();
                let point = destination(&origin, bearing, 5.0);
                assert!(
                    bbox.contains(&point),
                    "{:?} not in box of {:?}: {:?}",
                    point,
                    origin,
                    bbox
                );
            }
        }
    }

    /// Point reached by travelling `distance_km` from `origin` along `bearing`
    fn destination(origin: &Coordinate, bearing: f64, distance_km: f64) -> Coordinate {
        let angular = distance_km / EARTH_RADIUS_KM;
        let lat1 = origin.latitude().to_radians();
        let lng1 = origin.longitude().to_radians();

        let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
        let lng2 = lng1
            + (bearing.sin() * angular.sin() * lat1.cos())
                .atan2(angular.cos() - lat1.sin() * lat2.sin());

        let mut lng = lng2.to_degrees();
        if lng > 180.0 {
            lng -= 360.0;
        } else if lng < -180.0 {
            lng += 360.0;
        }
        Coordinate::new(lat2.to_degrees().clamp(-90.0, 90.0), lng).unwrap()
    }
}
