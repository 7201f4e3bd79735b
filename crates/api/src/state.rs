//! Application state for dependency injection.

use user_service_lib::infra::Database;
use user_service_lib::UserServices;

use crate::config::ApiConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub services: UserServices,
    pub database: Database,
    pub config: ApiConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(services: UserServices, database: Database, config: ApiConfig) -> Self {
        Self {
            services,
            database,
            config,
        }
    }

    /// Wire the use cases against the database with the configured event policy.
    pub fn from_database(database: Database, config: ApiConfig) -> Self {
        let services =
            UserServices::from_connection(database.get_connection(), &config.user_service);
        Self::new(services, database, config)
    }
}
