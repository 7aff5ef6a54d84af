//! Member API handlers
//!
//! Thin wrappers over `MemberService`; each maps the service outcome onto
//! the endpoint's own response shape.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::dto::{
    DeleteMemberResponse, ListMembersParams, MemberPageResponse, NoMembersResponse,
};
use crate::application::MemberService;
use crate::domain::DomainError;
use crate::interfaces::http::common::{InternalErrorResponse, RequestPageLink};
use crate::shared::parse_page;

/// Member handler state
#[derive(Clone)]
pub struct MemberHandlerState {
    pub member_service: Arc<MemberService>,
}

#[utoipa::path(
    get,
    path = "/members",
    tag = "Members",
    params(ListMembersParams),
    responses(
        (status = 200, description = "A page of members", body = MemberPageResponse),
        (status = 204, description = "Empty page (no members, or page out of range)", body = NoMembersResponse),
        (status = 500, description = "Internal error", body = InternalErrorResponse)
    )
)]
pub async fn list_members(
    State(state): State<MemberHandlerState>,
    Query(params): Query<ListMembersParams>,
    RequestPageLink(link): RequestPageLink,
) -> Response {
    let page = parse_page(params.page.as_deref());

    match state.member_service.list_page(page, &link).await {
        Ok(page) if page.is_empty() => {
            (StatusCode::NO_CONTENT, Json(NoMembersResponse::default())).into_response()
        }
        Ok(page) => (StatusCode::OK, Json(MemberPageResponse::from(page))).into_response(),
        Err(e) => {
            error!(error = %e, page, "Failed to list members");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(InternalErrorResponse::new(e.code())),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "Members",
    params(("id" = String, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member deleted", body = DeleteMemberResponse),
        (status = 404, description = "No member with this id", body = DeleteMemberResponse),
        (status = 500, description = "Internal error", body = DeleteMemberResponse)
    )
)]
pub async fn delete_member(
    State(state): State<MemberHandlerState>,
    Path(id): Path<String>,
) -> Response {
    // A non-numeric id cannot match any row.
    let Ok(member_id) = id.parse::<i32>() else {
        return (StatusCode::NOT_FOUND, Json(DeleteMemberResponse::not_found(&id))).into_response();
    };

    match state.member_service.delete(member_id).await {
        Ok(()) => (StatusCode::OK, Json(DeleteMemberResponse::deleted(&id))).into_response(),
        Err(DomainError::NotFound { .. }) => {
            (StatusCode::NOT_FOUND, Json(DeleteMemberResponse::not_found(&id))).into_response()
        }
        Err(e) => {
            error!(error = %e, member_id, "Failed to delete member");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DeleteMemberResponse::failed(e.code())),
            )
                .into_response()
        }
    }
}
