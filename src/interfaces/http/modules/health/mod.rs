//! Health module: liveness plus a database probe

pub mod handlers;

pub use handlers::*;
