//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::{HealthResponse, ServiceHealth, ServiceStatus};
use crate::handlers::user_handler::{CreateUserPayload, UserEnvelope};
use user_service_lib::dto::UserResponse;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::get_user,
        crate::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            CreateUserPayload,
            UserResponse,
            UserEnvelope,
            HealthResponse,
            ServiceStatus,
            ServiceHealth,
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
