//! API configuration.

use std::env;

use common::ServiceConfig;
use user_service_lib::config::UserServiceConfig;

/// Service name reported in logs and health checks.
pub const SERVICE_NAME: &str = "user-api";

/// API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind address and logging
    pub service: ServiceConfig,
    /// Database and event settings of the embedded user service
    pub user_service: UserServiceConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig {
                service_name: SERVICE_NAME.to_string(),
                host: env::var("USER_API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("USER_API_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
            },
            user_service: UserServiceConfig::from_env(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: SERVICE_NAME.to_string(),
                ..ServiceConfig::default()
            },
            user_service: UserServiceConfig::default(),
        }
    }
}
