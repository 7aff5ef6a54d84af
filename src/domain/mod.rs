//! Domain layer: entities, DTOs and repository interfaces.

pub mod member;
pub mod repositories;
pub mod testimony;
pub mod user;

pub use member::{Member, MemberRepositoryInterface};
pub use repositories::RepositoryProvider;
pub use testimony::{
    failing_rules, FieldRule, NewTestimony, Rule, Testimony, TestimonyRepositoryInterface,
    TESTIMONY_RULES,
};
pub use user::{Comment, CreateUserDto, Role, User, UserRepositoryInterface};

pub use crate::shared::types::errors::{DomainError, DomainResult};
