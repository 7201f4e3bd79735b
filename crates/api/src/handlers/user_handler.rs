//! User handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use user_service_lib::dto::{CreateUserRequest, UserResponse};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// User creation request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPayload {
    /// Email address, stored lowercased
    #[validate(
        email(message = "This value is not a valid email address."),
        length(max = 255, message = "This value is too long. It should have 255 characters or less.")
    )]
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    #[validate(length(
        min = 1,
        max = 100,
        message = "This value should be between 1 and 100 characters long."
    ))]
    #[schema(example = "John")]
    pub first_name: String,
    #[validate(length(
        min = 1,
        max = 100,
        message = "This value should be between 1 and 100 characters long."
    ))]
    #[schema(example = "Doe")]
    pub last_name: String,
}

impl From<CreateUserPayload> for CreateUserRequest {
    fn from(payload: CreateUserPayload) -> Self {
        CreateUserRequest::new(payload.email, payload.first_name, payload.last_name)
    }
}

/// Success envelope around a single user.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserEnvelope {
    pub data: UserResponse,
}

impl From<UserResponse> for UserEnvelope {
    fn from(data: UserResponse) -> Self {
        Self { data }
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/:id", get(get_user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "User created", body = UserEnvelope),
        (status = 400, description = "Malformed body or validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserPayload>,
) -> AppResult<(StatusCode, Json<UserEnvelope>)> {
    let user = state.services.create_user.execute(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(UserEnvelope::from(user))))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserEnvelope),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserEnvelope>> {
    let user = state.services.get_user.execute(&id).await?;
    Ok(Json(UserEnvelope::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(email: &str, first: &str, last: &str) -> CreateUserPayload {
        CreateUserPayload {
            email: email.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    #[test]
    fn test_valid_payload() {
        assert!(payload("john@example.com", "John", "Doe").validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_email_and_blank_names() {
        let errors = payload("not-an-email", "", "").validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("last_name"));
    }

    #[test]
    fn test_rejects_long_names() {
        let long = "a".repeat(101);
        assert!(payload("john@example.com", &long, "Doe").validate().is_err());
        assert!(payload("john@example.com", &"a".repeat(100), "Doe")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_into_request() {
        let request: CreateUserRequest = payload("John@Example.com", "John", "Doe").into();
        assert_eq!(request.email, "John@Example.com");
        assert_eq!(request.first_name, "John");
    }
}
