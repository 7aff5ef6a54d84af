use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimony {
    pub id: i32,
    pub name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A submission that already passed the testimony rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTestimony {
    pub name: String,
    pub content: String,
}
