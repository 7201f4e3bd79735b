//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Field limits
// =============================================================================

/// Maximum length of an email address
pub const MAX_EMAIL_LENGTH: usize = 255;

/// Minimum length of a first or last name
pub const MIN_NAME_LENGTH: u64 = 1;

/// Maximum length of a first or last name
pub const MAX_NAME_LENGTH: u64 = 100;

/// Length of a generated user identifier (hyphenated UUID)
pub const USER_ID_LENGTH: usize = 36;

// =============================================================================
// Formatting
// =============================================================================

/// Timestamp format used in responses and event logs (`YYYY-MM-DD HH:MM:SS`)
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Events
// =============================================================================

/// Event name emitted when a user is created
pub const EVENT_USER_CREATED: &str = "user.created";
