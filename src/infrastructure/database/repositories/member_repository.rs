use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::domain::{DomainError, DomainResult, Member, MemberRepositoryInterface};
use crate::infrastructure::database::entities::member;

pub struct MemberRepository {
    db: DatabaseConnection,
}

impl MemberRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn member_model_to_domain(model: member::Model) -> Member {
    Member {
        id: model.id,
        name: model.name,
        image: model.image,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl MemberRepositoryInterface for MemberRepository {
    async fn find_all(&self) -> DomainResult<Vec<Member>> {
        let models = member::Entity::find()
            .order_by_asc(member::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(member_model_to_domain).collect())
    }

    async fn delete_by_id(&self, id: i32) -> DomainResult<()> {
        let result = member::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Member",
                field: "id",
                value: id.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::infrastructure::database::test_database;
    use chrono::Utc;
    use sea_orm::{ActiveModelTrait, Set};

    /// Insert `count` members named `Member 1..=count`; ids follow insertion order.
    pub(crate) async fn seed_members(db: &DatabaseConnection, count: usize) {
        for i in 1..=count {
            let now = Utc::now();
            member::ActiveModel {
                name: Set(format!("Member {}", i)),
                image: Set(None),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await
            .unwrap();
        }
    }

    #[tokio::test]
    async fn find_all_returns_members_in_id_order() {
        let db = test_database().await;
        seed_members(&db, 3).await;
        let repo = MemberRepository::new(db);

        let members = repo.find_all().await.unwrap();
        let ids: Vec<i32> = members.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(members[0].name, "Member 1");
    }

    #[tokio::test]
    async fn find_all_on_empty_table() {
        let repo = MemberRepository::new(test_database().await);
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let db = test_database().await;
        seed_members(&db, 2).await;
        let repo = MemberRepository::new(db);

        repo.delete_by_id(1).await.unwrap();

        let remaining: Vec<i32> = repo.find_all().await.unwrap().iter().map(|m| m.id).collect();
        assert_eq!(remaining, vec![2]);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let repo = MemberRepository::new(test_database().await);

        let err = repo.delete_by_id(99).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Member", .. }));
    }
}
