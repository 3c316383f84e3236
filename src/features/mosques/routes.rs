use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::mosques::handlers;
use crate::features::mosques::services::{NearbyMosqueResolver, SubmissionService};

/// Create routes for the mosques feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(resolver: Arc<NearbyMosqueResolver>, submissions: Arc<SubmissionService>) -> Router {
    let lookup = Router::new()
        .route("/api/mosques/nearby", get(handlers::get_nearby_mosques))
        .route("/api/mosques/nearby/{id}", get(handlers::get_nearby_mosque))
        .with_state(resolver);

    let submit = Router::new()
        .route("/api/mosques/submissions", post(handlers::submit_mosque))
        .with_state(submissions);

    lookup.merge(submit)
}
