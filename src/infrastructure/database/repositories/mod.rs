//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod member_repository;
pub mod repository_provider;
pub mod testimony_repository;
pub mod user_repository;

pub use member_repository::MemberRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use testimony_repository::TestimonyRepository;
pub use user_repository::UserRepository;
