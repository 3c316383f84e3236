use async_trait::async_trait;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::config::MockSourceConfig;
use crate::core::error::Result;
use crate::features::mosques::models::{AcStatus, Mosque, ShoeStorage, WudhuCleanliness};
use crate::features::mosques::repositories::MosqueRepository;
use crate::shared::geo::Coordinate;

/// Smallest per-axis offset from the query point, in degrees
const MIN_OFFSET_DEG: f64 = 0.01;

/// Largest per-axis offset from the query point, in degrees
const MAX_OFFSET_DEG: f64 = 0.05;

const MOSQUE_NAMES: [(&str, &str); 10] = [
    ("Masjid Al-Ikhlas", "Jl. Merdeka No. 12"),
    ("Masjid Nurul Huda", "Jl. Pahlawan No. 45"),
    ("Masjid At-Taqwa", "Jl. Sudirman No. 8"),
    ("Masjid Baiturrahman", "Jl. Diponegoro No. 27"),
    ("Masjid Al-Hidayah", "Jl. Kenanga Raya No. 3"),
    ("Masjid Jami Al-Muttaqin", "Jl. Masjid No. 1"),
    ("Masjid Raya Al-Falah", "Jl. Ahmad Yani No. 101"),
    ("Masjid Nurul Iman", "Jl. Melati No. 19"),
    ("Masjid Al-Furqon", "Jl. Cendana No. 6"),
    ("Masjid Ar-Rahman", "Jl. Gatot Subroto No. 55"),
];

const AC_STATUSES: [Option<AcStatus>; 5] = [
    Some(AcStatus::Working),
    Some(AcStatus::Working),
    Some(AcStatus::Partial),
    Some(AcStatus::Broken),
    None,
];

const CLEANLINESS: [Option<WudhuCleanliness>; 5] = [
    Some(WudhuCleanliness::VeryClean),
    Some(WudhuCleanliness::Clean),
    Some(WudhuCleanliness::Average),
    Some(WudhuCleanliness::NeedsCleaning),
    None,
];

const SHOE_STORAGE: [Option<ShoeStorage>; 5] = [
    Some(ShoeStorage::Shelves),
    Some(ShoeStorage::Lockers),
    Some(ShoeStorage::FloorOnly),
    Some(ShoeStorage::None),
    None,
];

const KHUTBAH_TIMES: [&str; 3] = ["11:45", "12:00", "12:15"];

/// Deterministic stand-in for a real geospatial store.
///
/// Generates `count` mosques scattered 0.01-0.05 degrees (per axis) around the
/// query point. The RNG is seeded from the configured seed and the query
/// coordinate, so the same request always yields the same records.
pub struct MockMosqueRepository {
    count: usize,
    seed: u64,
}

impl MockMosqueRepository {
    pub fn new(config: &MockSourceConfig) -> Self {
        Self {
            count: config.count,
            seed: config.seed,
        }
    }

    fn rng_for(&self, origin: &Coordinate) -> ChaCha8Rng {
        let mixed = self.seed
            ^ origin.latitude().to_bits().rotate_left(21)
            ^ origin.longitude().to_bits();
        ChaCha8Rng::seed_from_u64(mixed)
    }

    /// Generate the synthetic records for `origin`
    pub fn generate(&self, origin: &Coordinate) -> Vec<Mosque> {
        let mut rng = self.rng_for(origin);
        (0..self.count)
            .map(|index| generate_single_mosque(&mut rng, origin, index))
            .collect()
    }
}

fn pick<T: Copy>(rng: &mut ChaCha8Rng, options: &[T]) -> T {
    options[rng.random_range(0..options.len())]
}

fn random_offset(rng: &mut ChaCha8Rng) -> f64 {
    let magnitude = rng.random_range(MIN_OFFSET_DEG..=MAX_OFFSET_DEG);
    if rng.random_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}

fn wrap_longitude(longitude: f64) -> f64 {
    if longitude > 180.0 {
        longitude - 360.0
    } else if longitude < -180.0 {
        longitude + 360.0
    } else {
        longitude
    }
}

fn generate_single_mosque(rng: &mut ChaCha8Rng, origin: &Coordinate, index: usize) -> Mosque {
    let (base_name, street) = MOSQUE_NAMES[index % MOSQUE_NAMES.len()];
    let round = index / MOSQUE_NAMES.len();
    let name = if round == 0 {
        base_name.to_string()
    } else {
        format!("{} {}", base_name, round + 1)
    };

    let latitude = (origin.latitude() + random_offset(rng)).clamp(-90.0, 90.0);
    let longitude = wrap_longitude(origin.longitude() + random_offset(rng));

    let has_ac = rng.random_ratio(3, 4);
    let ac_status = if has_ac { pick(rng, &AC_STATUSES) } else { None };

    let phone = rng
        .random_ratio(2, 3)
        .then(|| format!("021-{}", rng.random_range(5_000_000..9_999_999)));
    let google_maps_link = rng.random_bool(0.5).then(|| {
        format!(
            "https://www.google.com/maps/search/?api=1&query={:.6},{:.6}",
            latitude, longitude
        )
    });

    Mosque {
        id: i64::try_from(index).unwrap_or(i64::MAX - 1) + 1,
        description: Some(format!(
            "{} melayani jamaah sekitar dengan kegiatan salat berjamaah dan kajian rutin.",
            name
        )),
        name,
        address: street.to_string(),
        latitude,
        longitude,
        distance_km: None,
        has_ac,
        ac_status,
        wudhu_cleanliness: pick(rng, &CLEANLINESS),
        separate_wudhu_areas: Some(rng.random_bool(0.6)),
        parking_available: rng.random_ratio(7, 10),
        bike_parking_available: rng.random_ratio(4, 5),
        wheelchair_accessible: rng.random_ratio(2, 5),
        prayer_mats_provided: rng.random_ratio(9, 10),
        shoe_storage: pick(rng, &SHOE_STORAGE),
        open_24_hours: rng.random_ratio(1, 5),
        friday_khutbah_time: Some(pick(rng, &KHUTBAH_TIMES).to_string()),
        phone,
        website: None,
        google_maps_link,
        image_url: None,
    }
}

#[async_trait]
impl MosqueRepository for MockMosqueRepository {
    async fn find_within_radius(&self, origin: Coordinate, radius_km: f64) -> Result<Vec<Mosque>> {
        // same coarse prefilter a spatial store applies
        let bbox = origin.bounding_box(radius_km);
        let mosques: Vec<Mosque> = self
            .generate(&origin)
            .into_iter()
            .filter(|m| {
                Coordinate::new(m.latitude, m.longitude).is_ok_and(|point| bbox.contains(&point))
            })
            .collect();
        tracing::debug!(
            "Generated {} synthetic mosques around ({}, {}) for radius {}km",
            mosques.len(),
            origin.latitude(),
            origin.longitude(),
            radius_km
        );
        Ok(mosques)
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn repository(count: usize, seed: u64) -> MockMosqueRepository {
        MockMosqueRepository::new(&MockSourceConfig { count, seed })
    }

    fn jakarta() -> Coordinate {
        Coordinate::new(-6.2, 106.8167).unwrap()
    }

    #[test]
    fn test_generate_is_deterministic() {
        let repo = repository(8, 42);
        assert_eq!(repo.generate(&jakarta()), repo.generate(&jakarta()));
    }

    #[test]
    fn test_generate_depends_on_seed_and_origin() {
        let first = repository(8, 42).generate(&jakarta());
        let other_seed = repository(8, 43).generate(&jakarta());
        let other_origin = repository(8, 42).generate(&Coordinate::new(-7.25, 112.75).unwrap());

        assert_ne!(first, other_seed);
        assert_ne!(
            first.iter().map(|m| m.latitude - -6.2).collect::<Vec<_>>(),
            other_origin
                .iter()
                .map(|m| m.latitude - -7.25)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_generate_assigns_unique_sequential_ids() {
        let mosques = repository(12, 7).generate(&jakarta());
        let ids: HashSet<i64> = mosques.iter().map(|m| m.id).collect();

        assert_eq!(mosques.len(), 12);
        assert_eq!(ids.len(), 12);
        assert_eq!(mosques.first().unwrap().id, 1);
        assert_eq!(mosques.last().unwrap().id, 12);
        // names past the fixed list get a round suffix
        assert_eq!(mosques[10].name, "Masjid Al-Ikhlas 2");
    }

    #[test]
    fn test_offsets_stay_within_bounds() {
        let origin = jakarta();
        for mosque in repository(50, 99).generate(&origin) {
            let lat_offset = (mosque.latitude - origin.latitude()).abs();
            let lng_offset = (mosque.longitude - origin.longitude()).abs();
            assert!((MIN_OFFSET_DEG - 1e-9..=MAX_OFFSET_DEG + 1e-9).contains(&lat_offset));
            assert!((MIN_OFFSET_DEG - 1e-9..=MAX_OFFSET_DEG + 1e-9).contains(&lng_offset));
        }
    }

    #[test]
    fn test_no_ac_status_without_ac() {
        for mosque in repository(50, 1).generate(&jakarta()) {
            if !mosque.has_ac {
                assert_eq!(mosque.ac_status, None);
            }
        }
    }

    #[test]
    fn test_generated_coordinates_stay_valid_near_edges() {
        let origin = Coordinate::new(89.99, 179.99).unwrap();
        for mosque in repository(30, 5).generate(&origin) {
            assert!(Coordinate::new(mosque.latitude, mosque.longitude).is_ok());
        }
    }

    #[tokio::test]
    async fn test_find_within_radius_returns_unannotated_candidates() {
        let repo = repository(6, 3);
        let mosques = repo.find_within_radius(jakarta(), 10.0).await.unwrap();

        assert_eq!(mosques.len(), 6);
        assert!(mosques.iter().all(|m| m.distance_km.is_none()));
        assert_eq!(repo.source_name(), "mock");
    }

    #[tokio::test]
    async fn test_find_within_radius_prefilters_by_bounding_box() {
        let repo = repository(40, 8);
        let origin = jakarta();
        let bbox = origin.bounding_box(2.0);
        let mosques = repo.find_within_radius(origin, 2.0).await.unwrap();

        assert!(mosques.len() < 40);
        for m in &mosques {
            assert!(bbox.contains(&Coordinate::new(m.latitude, m.longitude).unwrap()));
        }
    }

    #[tokio::test]
    async fn test_find_within_radius_across_antimeridian() {
        let repo = repository(30, 2);
        let origin = Coordinate::new(0.0, 179.99).unwrap();
        let mosques = repo.find_within_radius(origin, 10.0).await.unwrap();

        // offsets of up to 0.05 degrees push some records past 180
        assert_eq!(mosques.len(), 30);
        assert!(mosques.iter().any(|m| m.longitude < 0.0));
    }
}
