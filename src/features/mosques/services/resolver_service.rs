use std::sync::Arc;

use crate::core::config::SearchConfig;
use crate::core::error::{AppError, Result};
use crate::features::mosques::models::Mosque;
use crate::features::mosques::repositories::MosqueRepository;
use crate::shared::constants::MAX_SEARCH_RADIUS_KM;
use crate::shared::geo::Coordinate;

/// Turns a user coordinate into a distance-sorted list of mosques within the
/// search radius.
///
/// Stateless per call: the same coordinate (and the same data source state)
/// always yields the same list.
pub struct NearbyMosqueResolver {
    repository: Arc<dyn MosqueRepository>,
    config: SearchConfig,
}

impl NearbyMosqueResolver {
    pub fn new(repository: Arc<dyn MosqueRepository>, config: SearchConfig) -> Self {
        Self { repository, config }
    }

    pub fn default_radius_km(&self) -> f64 {
        self.config.radius_km
    }

    /// Resolve mosques near `(lat, lng)` using the configured radius
    pub async fn resolve_nearby(&self, lat: f64, lng: f64) -> Result<Vec<Mosque>> {
        let origin = Coordinate::new(lat, lng)?;
        self.resolve_within(origin, self.config.radius_km).await
    }

    /// Resolve mosques near `origin` with an explicit radius
    pub async fn resolve_within(&self, origin: Coordinate, radius_km: f64) -> Result<Vec<Mosque>> {
        validate_radius(radius_km)?;

        let source = self.repository.source_name();
        let candidates = tokio::time::timeout(
            self.config.source_timeout,
            self.repository.find_within_radius(origin, radius_km),
        )
        .await
        .map_err(|_| {
            tracing::warn!(
                "Mosque source '{}' timed out after {:?}",
                source,
                self.config.source_timeout
            );
            AppError::SourceTimeout(format!("Mosque source '{}' did not respond in time", source))
        })?
        .inspect_err(|e| tracing::error!("Mosque source '{}' failed: {}", source, e))?;

        let candidate_count = candidates.len();
        let mosques = rank_candidates(candidates, &origin, radius_km, self.config.max_results);

        tracing::debug!(
            "Resolved {} of {} candidates from '{}' within {}km of ({}, {})",
            mosques.len(),
            candidate_count,
            source,
            radius_km,
            origin.latitude(),
            origin.longitude()
        );

        Ok(mosques)
    }

    /// A single mosque from the set resolved around `origin` with `radius_km`
    pub async fn find_nearby_by_id(
        &self,
        origin: Coordinate,
        radius_km: f64,
        id: i64,
    ) -> Result<Mosque> {
        self.resolve_within(origin, radius_km)
            .await?
            .into_iter()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Masjid dengan id {} tidak ditemukan", id)))
    }
}

fn validate_radius(radius_km: f64) -> Result<()> {
    if radius_km.is_finite() && radius_km > 0.0 && radius_km <= MAX_SEARCH_RADIUS_KM {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "radius_km must be greater than 0 and at most {}",
            MAX_SEARCH_RADIUS_KM
        )))
    }
}

/// Annotate candidates with their rounded distance, keep those within
/// `radius_km` (inclusive), order by distance then id, and cap the count.
pub fn rank_candidates(
    candidates: Vec<Mosque>,
    origin: &Coordinate,
    radius_km: f64,
    max_results: usize,
) -> Vec<Mosque> {
    let mut mosques: Vec<(f64, Mosque)> = candidates
        .into_iter()
        .map(|m| m.with_distance_from(origin))
        .filter_map(|m| m.distance_km.map(|d| (d, m)))
        .filter(|(distance, _)| *distance <= radius_km)
        .collect();

    mosques.sort_by(|(da, a), (db, b)| da.total_cmp(db).then(a.id.cmp(&b.id)));
    mosques.truncate(max_results);

    mosques.into_iter().map(|(_, m)| m).collect()
}
