//! User Service Library
//!
//! Application and infrastructure layers for user management: the create/get
//! use cases, the SeaORM-backed repository, the domain event bus and database
//! migrations. The HTTP layer embeds it through [`UserServices`].

pub mod config;
pub mod dto;
pub mod events;
pub mod infra;
pub mod repository;
pub mod use_cases;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::config::UserServiceConfig;
use crate::events::{DomainEventDispatcher, EventBus};
use crate::infra::Database;
use crate::repository::{UserRepository, UserStore};
use crate::use_cases::{CreateUserUseCase, GetUserUseCase};

/// Wired use cases, shared across request handlers.
#[derive(Clone)]
pub struct UserServices {
    pub create_user: Arc<CreateUserUseCase>,
    pub get_user: Arc<GetUserUseCase>,
}

impl UserServices {
    /// Wire the use cases from their collaborators.
    pub fn new(
        repo: Arc<dyn UserRepository>,
        dispatcher: Arc<dyn DomainEventDispatcher>,
        dispatch_events: bool,
    ) -> Self {
        let create_user = CreateUserUseCase::new(repo.clone(), dispatcher)
            .with_event_dispatch(dispatch_events);

        Self {
            create_user: Arc::new(create_user),
            get_user: Arc::new(GetUserUseCase::new(repo)),
        }
    }

    /// Wire the use cases against a database connection with the default bus.
    pub fn from_connection(db: DatabaseConnection, config: &UserServiceConfig) -> Self {
        let repo = Arc::new(UserStore::new(db));
        let dispatcher = Arc::new(EventBus::with_default_listeners());

        Self::new(repo, dispatcher, config.events.enabled)
    }
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = UserServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
