//! Database entities module

pub mod comment;
pub mod member;
pub mod role;
pub mod testimony;
pub mod user;

pub use comment::Entity as Comment;
pub use member::Entity as Member;
pub use role::Entity as Role;
pub use testimony::Entity as Testimony;
pub use user::Entity as User;
