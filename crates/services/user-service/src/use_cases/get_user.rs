//! Get user use case.

use std::sync::Arc;

use common::AppResult;
use domain::{DomainError, UserId};

use crate::dto::UserResponse;
use crate::repository::UserRepository;

/// Looks a user up by id. Read-only, raises no events.
pub struct GetUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &str) -> AppResult<UserResponse> {
        let id = UserId::from_string(user_id);

        let user = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(user_id))?;

        Ok(UserResponse::from(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use common::AppError;
    use chrono::{Duration, Utc};
    use domain::{Email, User};

    #[tokio::test]
    async fn test_get_user_success() {
        let created_at = Utc::now() - Duration::days(1);
        let updated_at = Utc::now();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .withf(|id: &UserId| id.value() == "user-1")
            .times(1)
            .returning(move |id| {
                Ok(Some(User::reconstitute(
                    id.clone(),
                    Email::new("test@example.com").unwrap(),
                    "John".into(),
                    "Doe".into(),
                    created_at,
                    updated_at,
                )))
            });

        let use_case = GetUserUseCase::new(Arc::new(repo));
        let response = use_case.execute("user-1").await.unwrap();

        assert_eq!(response.id, "user-1");
        assert_eq!(response.full_name, "John Doe");
        assert_eq!(
            response.created_at,
            created_at.format("%Y-%m-%d %H:%M:%S").to_string()
        );
        assert_ne!(response.created_at, response.updated_at);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetUserUseCase::new(Arc::new(repo));
        let result = use_case.execute("non-existent-id").await;

        assert!(matches!(
            result,
            Err(AppError::UserNotFound { ref id }) if id == "non-existent-id"
        ));
    }
}
