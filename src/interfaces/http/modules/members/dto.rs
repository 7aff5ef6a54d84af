//! Member DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Member;
use crate::interfaces::http::common::ErrorData;
use crate::shared::Page;

pub const NO_MEMBERS_MESSAGE: &str = "There are no members created";

/// Member API representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MemberDto {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Member> for MemberDto {
    fn from(m: Member) -> Self {
        Self {
            id: m.id,
            name: m.name,
            image: m.image,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// List members query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListMembersParams {
    /// Page number (1-based). Missing or invalid values mean page 1.
    pub page: Option<String>,
}

/// One page of members with links to the neighbouring pages.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MemberPageResponse {
    pub prev: Option<String>,
    pub next: Option<String>,
    pub results: Vec<MemberDto>,
}

impl From<Page<Member>> for MemberPageResponse {
    fn from(page: Page<Member>) -> Self {
        Self {
            prev: page.prev,
            next: page.next,
            results: page.results.into_iter().map(MemberDto::from).collect(),
        }
    }
}

/// Returned with `204` when the requested page holds no members.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NoMembersResponse {
    pub ok: bool,
    pub msg: String,
}

impl Default for NoMembersResponse {
    fn default() -> Self {
        Self {
            ok: false,
            msg: NO_MEMBERS_MESSAGE.to_string(),
        }
    }
}

/// Outcome of `DELETE /members/{id}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteMemberResponse {
    pub del: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ErrorData>,
}

impl DeleteMemberResponse {
    pub fn deleted(id: &str) -> Self {
        Self {
            del: true,
            message: Some(format!("member with id {}, was deleted successfully", id)),
            data: None,
        }
    }

    pub fn not_found(id: &str) -> Self {
        Self {
            del: false,
            message: Some(format!("the id {} does not correspond to any member", id)),
            data: None,
        }
    }

    pub fn failed(code: &str) -> Self {
        Self {
            del: false,
            message: None,
            data: Some(ErrorData::new(code)),
        }
    }
}
