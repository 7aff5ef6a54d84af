//! Repository provider
//!
//! A single handle to every aggregate repository, so services depend on one
//! `Arc<dyn RepositoryProvider>` instead of a concrete database type.

use super::member::MemberRepositoryInterface;
use super::testimony::TestimonyRepositoryInterface;
use super::user::UserRepositoryInterface;

pub trait RepositoryProvider: Send + Sync {
    fn members(&self) -> &dyn MemberRepositoryInterface;
    fn testimonies(&self) -> &dyn TestimonyRepositoryInterface;
    fn users(&self) -> &dyn UserRepositoryInterface;
}
