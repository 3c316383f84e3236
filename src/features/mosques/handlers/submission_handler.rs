use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::mosques::dtos::{SubmissionResponseDto, SubmitMosqueDto};
use crate::features::mosques::services::SubmissionService;
use crate::shared::constants::{SUBMISSION_FAILURE_MESSAGE, SUBMISSION_SUCCESS_MESSAGE};
use crate::shared::types::ApiResponse;

/// Submit a new mosque for verification
#[utoipa::path(
    post,
    path = "/api/mosques/submissions",
    request_body = SubmitMosqueDto,
    responses(
        (status = 201, description = "Submission accepted", body = ApiResponse<SubmissionResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Submission failed"),
        (status = 503, description = "Submission sink unavailable")
    ),
    tag = "mosques"
)]
pub async fn submit_mosque(
    State(service): State<Arc<SubmissionService>>,
    AppJson(dto): AppJson<SubmitMosqueDto>,
) -> Result<Response> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    match service.submit(dto.into()).await {
        Ok(receipt) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(SubmissionResponseDto::from(receipt)),
                Some(SUBMISSION_SUCCESS_MESSAGE.to_string()),
                None,
            )),
        )
            .into_response()),
        Err(e) => {
            let status = if e.is_retryable() {
                StatusCode::SERVICE_UNAVAILABLE
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            Ok((
                status,
                Json(ApiResponse::<()>::error(
                    Some(SUBMISSION_FAILURE_MESSAGE.to_string()),
                    None,
                )),
            )
                .into_response())
        }
    }
}
