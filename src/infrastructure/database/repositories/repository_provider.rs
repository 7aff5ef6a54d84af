//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{
    MemberRepositoryInterface, RepositoryProvider, TestimonyRepositoryInterface,
    UserRepositoryInterface,
};

use super::member_repository::MemberRepository;
use super::testimony_repository::TestimonyRepository;
use super::user_repository::UserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let members = repos.members().find_all().await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    members: MemberRepository,
    testimonies: TestimonyRepository,
    users: UserRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            members: MemberRepository::new(db.clone()),
            testimonies: TestimonyRepository::new(db.clone()),
            users: UserRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn members(&self) -> &dyn MemberRepositoryInterface {
        &self.members
    }

    fn testimonies(&self) -> &dyn TestimonyRepositoryInterface {
        &self.testimonies
    }

    fn users(&self) -> &dyn UserRepositoryInterface {
        &self.users
    }
}
