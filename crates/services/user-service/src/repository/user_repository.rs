//! User repository: the persistence contract and its SeaORM implementation.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{DomainError, Email, User, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Email lookups use the normalized address held by [`Email`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or update the user keyed by id.
    ///
    /// Fails with [`AppError::UserAlreadyExists`] when another user already
    /// holds the email.
    async fn save(&self, user: &User) -> AppResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>>;

    /// Check whether any user holds this email
    async fn exists_by_email(&self, email: &Email) -> AppResult<bool>;

    /// Remove the user. No-op if absent.
    async fn delete(&self, user: &User) -> AppResult<()>;

    /// List all users, oldest first
    async fn find_all(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn save(&self, user: &User) -> AppResult<()> {
        // created_at is written on insert only
        let upsert = OnConflict::column(user::Column::Id)
            .update_columns([
                user::Column::Email,
                user::Column::FirstName,
                user::Column::LastName,
                user::Column::UpdatedAt,
            ])
            .to_owned();

        let result = UserEntity::insert(ActiveModel::from(user))
            .on_conflict(upsert)
            .exec_without_returning(&self.db)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                tracing::warn!(
                    user_id = %user.id(),
                    "Unique constraint rejected user write"
                );
                Err(DomainError::user_already_exists(user.email().value()).into())
            }
            Err(err) => Err(AppError::from(err)),
        }
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id.value().to_string())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email.value()))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(User::try_from).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AppResult<bool> {
        let count = UserEntity::find()
            .filter(user::Column::Email.eq(email.value()))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn delete(&self, user: &User) -> AppResult<()> {
        UserEntity::delete_by_id(user.id().value().to_string())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(User::try_from).collect()
    }
}
