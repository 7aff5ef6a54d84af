//! Testimony submission

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainResult, NewTestimony, RepositoryProvider, Testimony};

pub struct TestimonyService {
    repos: Arc<dyn RepositoryProvider>,
}

impl TestimonyService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Persist a submission. Callers must have run the testimony rules first.
    pub async fn create(&self, testimony: NewTestimony) -> DomainResult<Testimony> {
        let created = self.repos.testimonies().create(testimony).await?;
        info!(testimony_id = created.id, "Testimony created");
        Ok(created)
    }
}
