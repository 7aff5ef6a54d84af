//! Member aggregate

pub mod model;
pub mod repository;

pub use model::Member;
pub use repository::MemberRepositoryInterface;
