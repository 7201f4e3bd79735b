//! Email value object.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::constants::MAX_EMAIL_LENGTH;
use crate::error::{DomainError, DomainResult};

/// Normalized, syntactically valid email address.
///
/// The raw input is trimmed and lower-cased before it is validated, so two
/// emails differing only in case or surrounding whitespace compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email {
    value: String,
}

impl Email {
    /// Parse and normalize an email address.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidFormat`] if the normalized value is not a
    /// valid email address.
    pub fn new(raw: &str) -> DomainResult<Self> {
        let value = raw.trim().to_lowercase();

        if value.len() > MAX_EMAIL_LENGTH || !value.as_str().validate_email() {
            return Err(DomainError::invalid_format(raw));
        }

        Ok(Self { value })
    }

    /// Get the normalized address.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::new(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.value
    }
}
