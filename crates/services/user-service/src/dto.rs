//! Application data transfer objects.

use serde::{Deserialize, Serialize};

use domain::User;

/// Input of [`crate::use_cases::CreateUserUseCase`].
///
/// Field format and length are checked by the caller; the email syntax is
/// checked again when the use case builds the `Email` value object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl CreateUserRequest {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// User snapshot returned to callers (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Unique user identifier
    #[cfg_attr(feature = "openapi", schema(example = "550e8400-e29b-41d4-a716-446655440000"))]
    pub id: String,
    /// Normalized email address
    #[cfg_attr(feature = "openapi", schema(example = "user@example.com"))]
    pub email: String,
    #[cfg_attr(feature = "openapi", schema(example = "John"))]
    pub first_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Doe"))]
    pub last_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "John Doe"))]
    pub full_name: String,
    /// Creation time, `YYYY-MM-DD HH:MM:SS`
    #[cfg_attr(feature = "openapi", schema(example = "2024-01-01 12:00:00"))]
    pub created_at: String,
    /// Last modification time, `YYYY-MM-DD HH:MM:SS`
    #[cfg_attr(feature = "openapi", schema(example = "2024-01-01 12:00:00"))]
    pub updated_at: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value().to_string(),
            email: user.email().value().to_string(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            full_name: user.full_name(),
            created_at: user.created_at_formatted(),
            updated_at: user.updated_at_formatted(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse::from(&user)
    }
}
