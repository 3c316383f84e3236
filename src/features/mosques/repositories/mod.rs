//! Data sources for mosque records.
//!
//! The resolver only talks to [`MosqueRepository`], so the synthetic generator
//! and the Postgres-backed store are interchangeable.

mod mock_repository;
mod pg_repository;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::mosques::models::Mosque;
use crate::shared::geo::Coordinate;

pub use mock_repository::MockMosqueRepository;
pub use pg_repository::PgMosqueRepository;

#[async_trait]
pub trait MosqueRepository: Send + Sync {
    /// Candidates around `origin` that may lie within `radius_km`.
    ///
    /// Implementations may return records slightly outside the radius; the
    /// resolver computes exact distances and filters.
    async fn find_within_radius(&self, origin: Coordinate, radius_km: f64) -> Result<Vec<Mosque>>;

    /// Short identifier used in logs
    fn source_name(&self) -> &'static str;
}
