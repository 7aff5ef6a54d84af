//! Validated JSON extractor for Axum
//!
//! `ValidatedJson<T>` works like `axum::Json<T>`, but additionally runs
//! `validator::Validate::validate()` on the deserialized value.
//! On validation failure it returns an automatic 422 response with
//! structured field-level error details, so the handler never runs.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;
use validator::Validate;

/// `ValidationError` param carrying the position of the failed rule.
/// Errors that set it are reported in that order; the rest follow by field name.
pub const RULE_ORDER_PARAM: &str = "rule_order";

fn rule_order(err: &validator::ValidationError) -> u64 {
    err.params
        .get(RULE_ORDER_PARAM)
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(u64::MAX)
}

/// An extractor that deserializes JSON and validates it.
///
/// # Usage
///
/// ```ignore
/// async fn handler(ValidatedJson(body): ValidatedJson<TestimonyForm>) {
///     // `body` is guaranteed to pass validation
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

/// One failed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

/// `{"ok": false, "errors": [{"field": ..., "message": ...}]}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub ok: bool,
    pub errors: Vec<FieldErrorDto>,
}

impl ValidationErrorResponse {
    fn new(errors: Vec<FieldErrorDto>) -> Self {
        Self { ok: false, errors }
    }
}

/// Error type for `ValidatedJson` extraction failures.
pub enum ValidatedJsonRejection {
    /// JSON parsing failed.
    JsonError(JsonRejection),
    /// Validation failed.
    ValidationError(validator::ValidationErrors),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::JsonError(rejection) => {
                let body = ValidationErrorResponse::new(vec![FieldErrorDto {
                    field: "body".to_string(),
                    message: format!("Invalid JSON: {}", rejection.body_text()),
                }]);
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Self::ValidationError(errors) => {
                let mut ordered: Vec<(u64, FieldErrorDto)> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errs)| {
                        errs.iter().map(move |e| {
                            let dto = FieldErrorDto {
                                field: field.to_string(),
                                message: e
                                    .message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string()),
                            };
                            (rule_order(e), dto)
                        })
                    })
                    .collect();
                ordered.sort_by(|(a_pos, a), (b_pos, b)| {
                    a_pos.cmp(b_pos).then_with(|| a.field.cmp(&b.field))
                });
                let field_errors: Vec<FieldErrorDto> =
                    ordered.into_iter().map(|(_, dto)| dto).collect();

                debug!(errors = field_errors.len(), "Request body failed validation");
                let body = ValidationErrorResponse::new(field_errors);
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
        }
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────
