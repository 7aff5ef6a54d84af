use async_trait::async_trait;

use super::model::{NewTestimony, Testimony};
use crate::domain::DomainResult;

#[async_trait]
pub trait TestimonyRepositoryInterface: Send + Sync {
    async fn create(&self, testimony: NewTestimony) -> DomainResult<Testimony>;
}
