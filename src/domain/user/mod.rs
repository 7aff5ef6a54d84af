//! User aggregate
//!
//! Contains the User entity, its Role / Comment associations, DTOs, and the
//! repository interface.

pub mod model;
pub mod repository;

mod dto_create;

pub use model::{Comment, Role, User};

pub use dto_create::CreateUserDto;

pub use repository::UserRepositoryInterface;
