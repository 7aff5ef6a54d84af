use async_trait::async_trait;

use super::{Comment, CreateUserDto, Role, User};
use crate::domain::DomainResult;

/// User access layer.
///
/// Every read excludes soft-deleted rows; `restore` is the only way to reach
/// one again.
#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User>;

    async fn get_user_by_id(&self, id: i32) -> DomainResult<Option<User>>;
    async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<User>>;
    async fn list_active_users(&self) -> DomainResult<Vec<User>>;

    /// The user together with the role it belongs to.
    async fn get_user_with_role(&self, id: i32) -> DomainResult<Option<(User, Option<Role>)>>;
    /// Comments written by an active user.
    async fn get_user_comments(&self, id: i32) -> DomainResult<Vec<Comment>>;

    async fn soft_delete_user(&self, id: i32) -> DomainResult<()>;
    async fn restore_user(&self, id: i32) -> DomainResult<User>;
}
