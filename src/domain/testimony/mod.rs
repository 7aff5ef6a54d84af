//! Testimony aggregate
//!
//! The submission rules live in [`rules`]; persistence behind
//! [`TestimonyRepositoryInterface`].

pub mod model;
pub mod repository;
pub mod rules;

pub use model::{NewTestimony, Testimony};
pub use repository::TestimonyRepositoryInterface;
pub use rules::{failing_rules, FieldRule, Rule, TESTIMONY_RULES};
