//! User API Library
//!
//! HTTP surface of the user service: request validation, JSON envelopes,
//! health checks and API docs. Use cases run in-process through
//! [`user_service_lib::UserServices`].

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use tracing::info;

use user_service_lib::infra::Database;

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the application router from a connected database.
pub fn create_app(database: Database, config: ApiConfig) -> Router {
    create_router(AppState::from_database(database, config))
}

/// Connect, migrate and run the HTTP server.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let database = Database::connect(&config.user_service.database).await?;

    let addr: SocketAddr = config.service.bind_address().parse()?;
    info!(
        service = %config.service.service_name,
        events_enabled = config.user_service.events.enabled,
        "Listening on {}",
        addr
    );

    let app = create_app(database, config);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
