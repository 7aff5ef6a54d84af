use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::domain::{DomainResult, NewTestimony, Testimony, TestimonyRepositoryInterface};
use crate::infrastructure::database::entities::testimony;

pub struct TestimonyRepository {
    db: DatabaseConnection,
}

impl TestimonyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn testimony_model_to_domain(model: testimony::Model) -> Testimony {
    Testimony {
        id: model.id,
        name: model.name,
        content: model.content,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl TestimonyRepositoryInterface for TestimonyRepository {
    async fn create(&self, dto: NewTestimony) -> DomainResult<Testimony> {
        let now = Utc::now();
        let created = testimony::ActiveModel {
            name: Set(dto.name),
            content: Set(dto.content),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(testimony_model_to_domain(created))
    }
}
