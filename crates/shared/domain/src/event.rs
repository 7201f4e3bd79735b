//! Domain events - immutable records of facts that happened in the domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::EVENT_USER_CREATED;
use crate::value_objects::{Email, UserId};

/// Identity and timestamp shared by every event, assigned at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    pub event_id: Uuid,
    pub occurred_on: DateTime<Utc>,
}

impl EventMetadata {
    /// Stamp a new event with a fresh id and the current instant
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_on: Utc::now(),
        }
    }
}

impl Default for EventMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// Raised once when a user aggregate is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreatedEvent {
    #[serde(flatten)]
    metadata: EventMetadata,
    user_id: UserId,
    email: Email,
    first_name: String,
    last_name: String,
}

impl UserCreatedEvent {
    pub fn new(user_id: UserId, email: Email, first_name: String, last_name: String) -> Self {
        Self {
            metadata: EventMetadata::new(),
            user_id,
            email,
            first_name,
            last_name,
        }
    }

    pub fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

/// All events the domain can raise.
///
/// Closed set: dispatchers route on [`DomainEvent::name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload")]
pub enum DomainEvent {
    #[serde(rename = "user.created")]
    UserCreated(UserCreatedEvent),
}

impl DomainEvent {
    /// Event kind name used as the routing key
    pub fn name(&self) -> &'static str {
        match self {
            DomainEvent::UserCreated(_) => EVENT_USER_CREATED,
        }
    }

    pub fn metadata(&self) -> &EventMetadata {
        match self {
            DomainEvent::UserCreated(event) => event.metadata(),
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.metadata().event_id
    }

    pub fn occurred_on(&self) -> DateTime<Utc> {
        self.metadata().occurred_on
    }
}

impl From<UserCreatedEvent> for DomainEvent {
    fn from(event: UserCreatedEvent) -> Self {
        DomainEvent::UserCreated(event)
    }
}
