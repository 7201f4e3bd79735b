//! Built-in event handlers.

use async_trait::async_trait;

use common::AppResult;
use domain::DomainEvent;

use super::EventHandler;

/// Records every created user in the structured log.
pub struct UserCreatedListener;

#[async_trait]
impl EventHandler for UserCreatedListener {
    async fn handle(&self, event: &DomainEvent) -> AppResult<()> {
        match event {
            DomainEvent::UserCreated(created) => {
                tracing::info!(
                    user_id = %created.user_id(),
                    email = %created.email(),
                    first_name = created.first_name(),
                    last_name = created.last_name(),
                    "User created event received"
                );
            }
        }

        Ok(())
    }
}
