//! Create user use case.

use std::sync::Arc;

use common::AppResult;
use domain::{DomainError, Email, User, UserId};

use crate::dto::{CreateUserRequest, UserResponse};
use crate::events::DomainEventDispatcher;
use crate::repository::UserRepository;

/// Registers a new user, enforcing one account per email.
///
/// The `exists_by_email` pre-check is an early exit only. Two concurrent
/// requests can both pass it; the repository's unique constraint rejects the
/// losing write as [`common::AppError::UserAlreadyExists`].
pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
    dispatcher: Arc<dyn DomainEventDispatcher>,
    dispatch_events: bool,
}

impl CreateUserUseCase {
    /// Create the use case with event dispatch enabled
    pub fn new(repo: Arc<dyn UserRepository>, dispatcher: Arc<dyn DomainEventDispatcher>) -> Self {
        Self {
            repo,
            dispatcher,
            dispatch_events: true,
        }
    }

    /// Enable or disable event dispatch. Disabled, drained events are dropped.
    pub fn with_event_dispatch(mut self, enabled: bool) -> Self {
        self.dispatch_events = enabled;
        self
    }

    pub async fn execute(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let email = Email::new(&request.email)?;

        if self.repo.exists_by_email(&email).await? {
            return Err(DomainError::user_already_exists(email.value()).into());
        }

        let mut user = User::new(UserId::new(), email, request.first_name, request.last_name);
        self.repo.save(&user).await?;

        let events = user.pull_domain_events();
        if self.dispatch_events {
            self.dispatcher.dispatch(events).await?;
        } else {
            tracing::debug!(discarded = events.len(), "Domain event dispatch disabled");
        }

        tracing::info!(user_id = %user.id(), email = %user.email(), "User created");

        Ok(UserResponse::from(&user))
    }
}
