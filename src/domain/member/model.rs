//! Member domain entity

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Organization member shown on the public site.
///
/// Members are hard-deleted; there is no soft-delete column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
