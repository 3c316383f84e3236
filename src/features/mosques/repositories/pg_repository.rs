use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::mosques::models::Mosque;
use crate::features::mosques::repositories::MosqueRepository;
use crate::shared::geo::{Coordinate, LongitudeSpan};

/// Mosques stored in Postgres, prefiltered with a lat/lng bounding box
pub struct PgMosqueRepository {
    pool: PgPool,
}

impl PgMosqueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MosqueRepository for PgMosqueRepository {
    async fn find_within_radius(&self, origin: Coordinate, radius_km: f64) -> Result<Vec<Mosque>> {
        let bbox = origin.bounding_box(radius_km);
        // ($3, $4, $5): every longitude, or from..to which wraps when from > to
        let (all_longitudes, lng_from, lng_to) = match bbox.longitude {
            LongitudeSpan::All => (true, -180.0, 180.0),
            LongitudeSpan::Range { from, to } | LongitudeSpan::Wrapped { from, to } => {
                (false, from, to)
            }
        };

        let mosques = sqlx::query_as::<_, Mosque>(
            r#"
            SELECT
                id, name, address, latitude, longitude,
                has_ac, ac_status, wudhu_cleanliness, separate_wudhu_areas,
                parking_available, bike_parking_available, wheelchair_accessible,
                prayer_mats_provided, shoe_storage, open_24_hours, friday_khutbah_time,
                phone, website, google_maps_link, image_url, description
            FROM mosques
            WHERE is_published = TRUE
            AND latitude BETWEEN $1 AND $2
            AND (
                $3
                OR ($4 <= $5 AND longitude BETWEEN $4 AND $5)
                OR ($4 > $5 AND (longitude >= $4 OR longitude <= $5))
            )
            ORDER BY id
            "#,
        )
        .bind(bbox.min_latitude)
        .bind(bbox.max_latitude)
        .bind(all_longitudes)
        .bind(lng_from)
        .bind(lng_to)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to query nearby mosques: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(mosques)
    }

    fn source_name(&self) -> &'static str {
        "postgres"
    }
}
