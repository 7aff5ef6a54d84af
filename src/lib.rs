//! # ONG Service
//!
//! Backend for a non-profit organization's website: paginated member
//! listing, member deletion and public testimony submission.
//!
//! ## Architecture
//!
//! - **domain**: Models, repository traits, testimony field rules
//! - **application**: Services orchestrating repositories
//! - **infrastructure**: SeaORM entities, migrations, repositories, password hashing
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Errors, pagination, input helpers, graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig, ConfigError};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::create_api_router;
