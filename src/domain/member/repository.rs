//! Member repository interface

use async_trait::async_trait;

use super::model::Member;
use crate::domain::DomainResult;

#[async_trait]
pub trait MemberRepositoryInterface: Send + Sync {
    /// Every member, ordered by id. Unbounded read.
    async fn find_all(&self) -> DomainResult<Vec<Member>>;

    /// Hard delete. `NotFound` when no row matched `id`.
    async fn delete_by_id(&self, id: i32) -> DomainResult<()>;
}
