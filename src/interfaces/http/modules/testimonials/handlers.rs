//! Testimony API handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::dto::{CreateTestimonyRequest, CreateTestimonyResponse, TestimonyForm};
use crate::application::TestimonyService;
use crate::interfaces::http::common::{
    InternalErrorResponse, ValidatedJson, ValidationErrorResponse,
};

/// Testimony handler state
#[derive(Clone)]
pub struct TestimonyHandlerState {
    pub testimony_service: Arc<TestimonyService>,
}

#[utoipa::path(
    post,
    path = "/testimonials",
    tag = "Testimonials",
    request_body = CreateTestimonyRequest,
    responses(
        (status = 201, description = "Testimony created", body = CreateTestimonyResponse),
        (status = 400, description = "Malformed JSON", body = ValidationErrorResponse),
        (status = 422, description = "Field validation failed", body = ValidationErrorResponse),
        (status = 500, description = "Internal error", body = InternalErrorResponse)
    )
)]
pub async fn create_testimony(
    State(state): State<TestimonyHandlerState>,
    ValidatedJson(form): ValidatedJson<TestimonyForm>,
) -> Response {
    match state
        .testimony_service
        .create(form.into_new_testimony())
        .await
    {
        Ok(testimony) => (
            StatusCode::CREATED,
            Json(CreateTestimonyResponse::created(testimony)),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to create testimony");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(InternalErrorResponse::new(e.code())),
            )
                .into_response()
        }
    }
}
