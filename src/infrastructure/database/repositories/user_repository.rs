use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, Select, Set, SqlErr,
};
use tracing::info;
use validator::Validate;

use crate::domain::{
    Comment, CreateUserDto, DomainError, DomainResult, Role, User, UserRepositoryInterface,
};
use crate::infrastructure::crypto::password::hash_password_with_cost;
use crate::infrastructure::database::entities::{comment, role, user};

pub struct UserRepository {
    db: DatabaseConnection,
    hash_cost: u32,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            hash_cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Override the bcrypt work factor.
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    async fn email_taken(&self, email: &str) -> DomainResult<bool> {
        Ok(self.get_user_by_email(email).await?.is_some())
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        photo: model.photo,
        password_hash: model.password,
        role_id: model.role_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
        deleted_at: model.deleted_at,
    }
}

fn role_model_to_domain(model: role::Model) -> Role {
    Role {
        id: model.id,
        name: model.name,
        description: model.description,
    }
}

fn comment_model_to_domain(model: comment::Model) -> Comment {
    Comment {
        id: model.id,
        user_id: model.user_id,
        body: model.body,
        created_at: model.created_at,
    }
}

fn user_not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "User",
        field: "id",
        value: id.to_string(),
    }
}

fn email_conflict(email: &str) -> DomainError {
    DomainError::Conflict(format!("Email {} is in use by an active user", email))
}

/// `idx_users_email_active` rejects a second active row with the same email.
/// The pre-checks in `create_user`/`restore_user` only short-circuit the
/// common case; this mapping covers writes that race past them.
fn map_write_err(err: DbErr, email: &str) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => email_conflict(email),
        _ => DomainError::Database(err),
    }
}

/// Base query for every read: soft-deleted users are invisible.
fn active() -> Select<user::Entity> {
    user::Entity::find().filter(user::Column::DeletedAt.is_null())
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        dto.validate()
            .map_err(|e| DomainError::Validation(e.to_string()))?;

        if self.email_taken(&dto.email).await? {
            return Err(email_conflict(&dto.email));
        }

        let password_hash = hash_password_with_cost(&dto.password, self.hash_cost)
            .map_err(|e| DomainError::Crypto(format!("Failed to hash password: {}", e)))?;

        let now = Utc::now();
        let new_user = user::ActiveModel {
            first_name: Set(dto.first_name),
            last_name: Set(dto.last_name),
            email: Set(dto.email.clone()),
            photo: Set(dto.photo),
            password: Set(password_hash),
            role_id: Set(dto.role_id),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        let created = new_user
            .insert(&self.db)
            .await
            .map_err(|e| map_write_err(e, &dto.email))?;
        let created = user_model_to_domain(created);

        info!(user_id = created.id, name = %created.full_name(), "User created");
        Ok(created)
    }

    async fn get_user_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        let model = active()
            .filter(user::Column::Id.eq(id))
            .one(&self.db)
            .await?;

        Ok(model.map(user_model_to_domain))
    }

    async fn get_user_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = active()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(model.map(user_model_to_domain))
    }

    async fn list_active_users(&self) -> DomainResult<Vec<User>> {
        let models = active()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(user_model_to_domain).collect())
    }

    async fn get_user_with_role(&self, id: i32) -> DomainResult<Option<(User, Option<Role>)>> {
        let row = active()
            .filter(user::Column::Id.eq(id))
            .find_also_related(role::Entity)
            .one(&self.db)
            .await?;

        Ok(row.map(|(u, r)| (user_model_to_domain(u), r.map(role_model_to_domain))))
    }

    async fn get_user_comments(&self, id: i32) -> DomainResult<Vec<Comment>> {
        let Some(owner) = active()
            .filter(user::Column::Id.eq(id))
            .one(&self.db)
            .await?
        else {
            return Err(user_not_found(id));
        };

        let comments = owner
            .find_related(comment::Entity)
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await?;

        Ok(comments.into_iter().map(comment_model_to_domain).collect())
    }

    async fn soft_delete_user(&self, id: i32) -> DomainResult<()> {
        let Some(existing) = active()
            .filter(user::Column::Id.eq(id))
            .one(&self.db)
            .await?
        else {
            return Err(user_not_found(id));
        };

        let now = Utc::now();
        let mut active_model: user::ActiveModel = existing.into();
        active_model.deleted_at = Set(Some(now));
        active_model.updated_at = Set(now);
        active_model.update(&self.db).await?;

        info!(user_id = id, "User soft-deleted");
        Ok(())
    }

    async fn restore_user(&self, id: i32) -> DomainResult<User> {
        let Some(existing) = user::Entity::find()
            .filter(user::Column::Id.eq(id))
            .filter(user::Column::DeletedAt.is_not_null())
            .one(&self.db)
            .await?
        else {
            return Err(user_not_found(id));
        };

        if self.email_taken(&existing.email).await? {
            return Err(email_conflict(&existing.email));
        }

        let email = existing.email.clone();
        let mut active_model: user::ActiveModel = existing.into();
        active_model.deleted_at = Set(None);
        active_model.updated_at = Set(Utc::now());
        let restored = active_model
            .update(&self.db)
            .await
            .map_err(|e| map_write_err(e, &email))?;

        info!(user_id = id, "User restored");
        Ok(user_model_to_domain(restored))
    }
}
