use utoipa::{Modify, OpenApi};

use crate::features::mosques::{dtos as mosques_dtos, handlers as mosques_handlers, models};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Mosques (public)
        mosques_handlers::get_nearby_mosques,
        mosques_handlers::get_nearby_mosque,
        mosques_handlers::submit_mosque,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Mosques
            models::AcStatus,
            models::WudhuCleanliness,
            models::ShoeStorage,
            models::SubmissionStatus,
            models::LabelTone,
            models::FacilityLabel,
            models::LocationFailure,
            mosques_dtos::SourceStatus,
            mosques_dtos::MosqueResponseDto,
            mosques_dtos::MosqueDetailDto,
            mosques_dtos::NearbyMosquesDto,
            mosques_dtos::SubmitMosqueDto,
            mosques_dtos::SubmissionResponseDto,
            ApiResponse<mosques_dtos::NearbyMosquesDto>,
            ApiResponse<mosques_dtos::MosqueDetailDto>,
            ApiResponse<mosques_dtos::SubmissionResponseDto>,
        )
    ),
    tags(
        (name = "mosques", description = "Nearby mosque discovery and submissions (public)"),
    ),
    info(
        title = "Masjid Finder API",
        version = "0.1.0",
        description = "API documentation for Masjid Finder",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
