//! Members module: paginated listing and deletion

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
