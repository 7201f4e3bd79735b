//! User identifier value object.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque user identifier.
///
/// Freshly generated ids are random v4 UUIDs. Ids rehydrated with
/// [`UserId::from_string`] are stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Generate a new random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an identifier known to exist (from storage or a request path).
    ///
    /// Any string is accepted, including an empty one; an id that matches
    /// no stored user surfaces as a not-found lookup.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier string.
    pub fn value(&self) -> &str {
        &self.0
    }

}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}
