//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Email address is not syntactically valid
    #[error("Invalid email format: {value}")]
    InvalidFormat { value: String },

    /// A user with this email is already registered
    #[error("User with email \"{email}\" already exists")]
    UserAlreadyExists { email: String },

    /// No user with this id
    #[error("User with id \"{id}\" not found")]
    UserNotFound { id: String },
}

impl DomainError {
    /// Create an invalid email format error
    pub fn invalid_format(value: impl Into<String>) -> Self {
        DomainError::InvalidFormat {
            value: value.into(),
        }
    }

    /// Create a duplicate email error
    pub fn user_already_exists(email: impl Into<String>) -> Self {
        DomainError::UserAlreadyExists {
            email: email.into(),
        }
    }

    /// Create a missing user error
    pub fn user_not_found(id: impl Into<String>) -> Self {
        DomainError::UserNotFound { id: id.into() }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_offending_value() {
        assert_eq!(
            DomainError::user_already_exists("test@example.com").to_string(),
            "User with email \"test@example.com\" already exists"
        );
        assert_eq!(
            DomainError::user_not_found("abc").to_string(),
            "User with id \"abc\" not found"
        );
        assert_eq!(
            DomainError::invalid_format("nope").to_string(),
            "Invalid email format: nope"
        );
    }
}
