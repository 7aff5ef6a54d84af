//! Testimony DTOs

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::{failing_rules, NewTestimony, Testimony, TESTIMONY_RULES};
use crate::interfaces::http::common::RULE_ORDER_PARAM;

/// Raw submission body.
///
/// Kept as untyped JSON so a missing field, a `null`, or a number in place of
/// a string each reach the testimony rules instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct TestimonyForm(pub Value);

impl Validate for TestimonyForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let failed = failing_rules(TESTIMONY_RULES, &self.0);
        for (position, rule) in failed.into_iter().enumerate() {
            let mut err = ValidationError::new(rule.rule.code());
            err.message = Some(Cow::Borrowed(rule.message));
            err.add_param(Cow::Borrowed(RULE_ORDER_PARAM), &position);
            errors.add(rule.field, err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl TestimonyForm {
    /// Only meaningful after `validate` succeeded; both fields are strings then.
    pub fn into_new_testimony(self) -> NewTestimony {
        let field = |name: &str| {
            self.0
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        NewTestimony {
            name: field("name"),
            content: field("content"),
        }
    }
}

/// Documented shape of `POST /testimonials`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTestimonyRequest {
    /// At least 5 characters
    #[schema(example = "Roberto")]
    pub name: String,
    #[schema(example = "Great service")]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TestimonyDto {
    pub id: i32,
    pub name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Testimony> for TestimonyDto {
    fn from(t: Testimony) -> Self {
        Self {
            id: t.id,
            name: t.name,
            content: t.content,
            created_at: t.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTestimonyResponse {
    pub ok: bool,
    pub msg: String,
    pub data: TestimonyDto,
}

impl CreateTestimonyResponse {
    pub fn created(testimony: Testimony) -> Self {
        Self {
            ok: true,
            msg: "testimony created".to_string(),
            data: testimony.into(),
        }
    }
}
