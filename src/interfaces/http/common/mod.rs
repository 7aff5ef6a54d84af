//! Shared HTTP building blocks: extractors and error envelopes.

mod page_link;
mod validated_json;

pub use page_link::RequestPageLink;
pub use validated_json::{
    FieldErrorDto, ValidatedJson, ValidatedJsonRejection, ValidationErrorResponse,
    RULE_ORDER_PARAM,
};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Client-facing error detail. Only an opaque code; the underlying error is
/// logged server-side.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorData {
    pub code: String,
}

impl ErrorData {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// `500` body: `{"message": "internal server error", "data": {"code": ...}}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InternalErrorResponse {
    pub message: String,
    pub data: ErrorData,
}

impl InternalErrorResponse {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            message: "internal server error".to_string(),
            data: ErrorData::new(code),
        }
    }
}
