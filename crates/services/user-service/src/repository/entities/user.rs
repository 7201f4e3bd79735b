//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use common::{AppError, AppResult};
use domain::{Email, User, UserId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Rehydrate the aggregate from a stored row.
impl TryFrom<Model> for User {
    type Error = AppError;

    fn try_from(model: Model) -> AppResult<Self> {
        let email = Email::new(&model.email).map_err(|e| {
            AppError::internal(format!("Stored user {} has an invalid email: {}", model.id, e))
        })?;

        Ok(User::reconstitute(
            UserId::from_string(model.id),
            email,
            model.first_name,
            model.last_name,
            model.created_at,
            model.updated_at,
        ))
    }
}

/// Snapshot the aggregate's persistent state
impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        ActiveModel {
            id: Set(user.id().value().to_string()),
            email: Set(user.email().value().to_string()),
            first_name: Set(user.first_name().to_string()),
            last_name: Set(user.last_name().to_string()),
            created_at: Set(user.created_at()),
            updated_at: Set(user.updated_at()),
        }
    }
}
