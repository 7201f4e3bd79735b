//! User aggregate root.

use chrono::{DateTime, Utc};

use crate::constants::DATE_TIME_FORMAT;
use crate::event::{DomainEvent, UserCreatedEvent};
use crate::value_objects::{Email, UserId};

/// User aggregate.
///
/// Owns a buffer of pending domain events until a caller drains it with
/// [`User::pull_domain_events`]. `updated_at` never precedes `created_at`.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    email: Email,
    first_name: String,
    last_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    domain_events: Vec<DomainEvent>,
}

impl User {
    /// Create a new user and record a [`UserCreatedEvent`]
    pub fn new(id: UserId, email: Email, first_name: String, last_name: String) -> Self {
        let now = Utc::now();
        let event = UserCreatedEvent::new(
            id.clone(),
            email.clone(),
            first_name.clone(),
            last_name.clone(),
        );

        let mut user = Self {
            id,
            email,
            first_name,
            last_name,
            created_at: now,
            updated_at: now,
            domain_events: Vec::new(),
        };
        user.record_domain_event(event.into());
        user
    }

    /// Rebuild a user from storage. Records no event.
    pub fn reconstitute(
        id: UserId,
        email: Email,
        first_name: String,
        last_name: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            first_name,
            last_name,
            created_at,
            updated_at: updated_at.max(created_at),
            domain_events: Vec::new(),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
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

    /// First and last name joined by a space, trimmed at both ends
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// `created_at` formatted as `YYYY-MM-DD HH:MM:SS`
    pub fn created_at_formatted(&self) -> String {
        self.created_at.format(DATE_TIME_FORMAT).to_string()
    }

    /// `updated_at` formatted as `YYYY-MM-DD HH:MM:SS`
    pub fn updated_at_formatted(&self) -> String {
        self.updated_at.format(DATE_TIME_FORMAT).to_string()
    }

    /// Replace the email address
    pub fn update_email(&mut self, email: Email) {
        self.email = email;
        self.touch();
    }

    /// Replace both name fields
    pub fn update_name(&mut self, first_name: String, last_name: String) {
        self.first_name = first_name;
        self.last_name = last_name;
        self.touch();
    }

    /// Queue an event for later dispatch
    pub fn record_domain_event(&mut self, event: DomainEvent) {
        self.domain_events.push(event);
    }

    /// Take all pending events, leaving the buffer empty
    pub fn pull_domain_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.domain_events)
    }

    /// Number of events waiting to be pulled
    pub fn pending_event_count(&self) -> usize {
        self.domain_events.len()
    }

    fn touch(&mut self) {
        // Monotonic even if the wall clock steps backwards
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn create_user(first: &str, last: &str) -> User {
        User::new(
            UserId::new(),
            Email::new("test@example.com").unwrap(),
            first.to_string(),
            last.to_string(),
        )
    }

    #[test]
    fn test_user_creation() {
        let id = UserId::new();
        let email = Email::new("test@example.com").unwrap();
        let user = User::new(id.clone(), email.clone(), "John".into(), "Doe".into());

        assert_eq!(user.id(), &id);
        assert_eq!(user.email(), &email);
        assert_eq!(user.first_name(), "John");
        assert_eq!(user.last_name(), "Doe");
        assert_eq!(user.full_name(), "John Doe");
        assert_eq!(user.created_at(), user.updated_at());
    }

    #[test]
    fn test_full_name_with_missing_part() {
        assert_eq!(create_user("John", "").full_name(), "John");
        assert_eq!(create_user("", "Doe").full_name(), "Doe");
        assert_eq!(create_user("", "").full_name(), "");
    }

    #[test]
    fn test_full_name_keeps_inner_spaces() {
        assert_eq!(create_user(" Mary  Ann", "Lee ").full_name(), "Mary  Ann Lee");
    }

    #[test]
    fn test_user_emits_created_event() {
        let mut user = create_user("John", "Doe");
        assert_eq!(user.pending_event_count(), 1);

        let events = user.pull_domain_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            DomainEvent::UserCreated(event) => {
                assert_eq!(event.user_id(), user.id());
                assert_eq!(event.email().value(), "test@example.com");
                assert_eq!(event.first_name(), "John");
                assert_eq!(event.last_name(), "Doe");
            }
        }

        assert!(user.pull_domain_events().is_empty());
    }

    #[test]
    fn test_update_email() {
        let mut user = create_user("John", "Doe");
        let created_at = user.created_at();
        let before = user.updated_at();
        user.pull_domain_events();

        let new_email = Email::new("new@example.com").unwrap();
        user.update_email(new_email.clone());

        assert_eq!(user.email(), &new_email);
        assert!(user.updated_at() >= before);
        assert_eq!(user.created_at(), created_at);
        assert!(user.pull_domain_events().is_empty());
    }

    #[test]
    fn test_update_name() {
        let mut user = create_user("John", "Doe");
        let created_at = user.created_at();
        let before = user.updated_at();

        user.update_name("Jane".into(), "Smith".into());

        assert_eq!(user.first_name(), "Jane");
        assert_eq!(user.last_name(), "Smith");
        assert_eq!(user.full_name(), "Jane Smith");
        assert!(user.updated_at() >= before);
        assert_eq!(user.created_at(), created_at);
        // Only the creation event is pending
        assert_eq!(user.pending_event_count(), 1);
    }

    #[test]
    fn test_reconstitute_records_nothing_and_keeps_timestamps() {
        let created_at = Utc::now() - Duration::days(2);
        let updated_at = created_at + Duration::hours(1);
        let mut user = User::reconstitute(
            UserId::from_string("abc"),
            Email::new("test@example.com").unwrap(),
            "John".into(),
            "Doe".into(),
            created_at,
            updated_at,
        );

        assert!(user.pull_domain_events().is_empty());
        assert_eq!(user.created_at(), created_at);
        assert_eq!(user.updated_at(), updated_at);
    }

    #[test]
    fn test_reconstitute_clamps_updated_at() {
        let created_at = Utc::now();
        let user = User::reconstitute(
            UserId::new(),
            Email::new("test@example.com").unwrap(),
            "John".into(),
            "Doe".into(),
            created_at,
            created_at - Duration::seconds(5),
        );

        assert_eq!(user.updated_at(), created_at);
    }

    #[test]
    fn test_formatted_timestamps() {
        let created_at = chrono::DateTime::parse_from_rfc3339("2024-03-05T07:08:09Z")
            .unwrap()
            .with_timezone(&Utc);
        let user = User::reconstitute(
            UserId::new(),
            Email::new("test@example.com").unwrap(),
            "John".into(),
            "Doe".into(),
            created_at,
            created_at,
        );

        assert_eq!(user.created_at_formatted(), "2024-03-05 07:08:09");
        assert_eq!(user.updated_at_formatted(), "2024-03-05 07:08:09");
    }
}
