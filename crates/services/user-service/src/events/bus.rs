//! Event dispatcher contract and the in-process bus implementing it.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::{DomainEvent, DATE_TIME_FORMAT, EVENT_USER_CREATED};

use super::UserCreatedListener;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Hands drained domain events to the outside world.
///
/// Implementations must process events in the order received and must report
/// a failure instead of treating the remaining events as delivered.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DomainEventDispatcher: Send + Sync {
    async fn dispatch(&self, events: Vec<DomainEvent>) -> AppResult<()>;
}

/// Subscriber for one or more event kinds.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: &DomainEvent) -> AppResult<()>;
}

/// In-process pub/sub keyed by event name.
#[derive(Clone, Default)]
pub struct EventBus {
    handlers: HashMap<&'static str, Vec<Arc<dyn EventHandler>>>,
}

impl EventBus {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bus with the built-in listeners registered.
    pub fn with_default_listeners() -> Self {
        Self::new().subscribe(EVENT_USER_CREATED, Arc::new(UserCreatedListener))
    }

    /// Register a handler for an event name. Handlers run in registration order.
    pub fn subscribe(mut self, event_name: &'static str, handler: Arc<dyn EventHandler>) -> Self {
        self.handlers.entry(event_name).or_default().push(handler);
        self
    }

    /// Number of handlers registered for an event name.
    pub fn handler_count(&self, event_name: &str) -> usize {
        self.handlers.get(event_name).map_or(0, Vec::len)
    }
}

#[async_trait]
impl DomainEventDispatcher for EventBus {
    async fn dispatch(&self, events: Vec<DomainEvent>) -> AppResult<()> {
        for event in &events {
            tracing::info!(
                event_name = event.name(),
                event_id = %event.event_id(),
                occurred_on = %event.occurred_on().format(DATE_TIME_FORMAT),
                "Dispatching domain event"
            );

            let Some(handlers) = self.handlers.get(event.name()) else {
                continue;
            };

            for handler in handlers {
                handler.handle(event).await.map_err(|err| match err {
                    AppError::EventDispatch { .. } => err,
                    other => AppError::event_dispatch(event.name(), other.to_string()),
                })?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use domain::{Email, User, UserId};

    /// Remembers the emails of the events it saw.
    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<String>>,
        fail_on: Option<String>,
    }

    #[async_trait]
    impl EventHandler for Recorder {
        async fn handle(&self, event: &DomainEvent) -> AppResult<()> {
            let DomainEvent::UserCreated(created) = event;
            let email = created.email().value().to_string();
            if self.fail_on.as_deref() == Some(email.as_str()) {
                return Err(AppError::internal("subscriber down"));
            }
            self.seen.lock().unwrap().push(email);
            Ok(())
        }
    }

    fn created_event(email: &str) -> DomainEvent {
        let mut user = User::new(
            UserId::new(),
            Email::new(email).unwrap(),
            "John".into(),
            "Doe".into(),
        );
        user.pull_domain_events().remove(0)
    }

    #[tokio::test]
    async fn test_dispatches_in_order() {
        let recorder = Arc::new(Recorder::default());
        let bus = EventBus::new().subscribe(EVENT_USER_CREATED, recorder.clone());

        bus.dispatch(vec![
            created_event("a@example.com"),
            created_event("b@example.com"),
            created_event("c@example.com"),
        ])
        .await
        .unwrap();

        assert_eq!(
            *recorder.seen.lock().unwrap(),
            vec!["a@example.com", "b@example.com", "c@example.com"]
        );
    }

    #[tokio::test]
    async fn test_failure_stops_dispatch() {
        let recorder = Arc::new(Recorder {
            fail_on: Some("b@example.com".into()),
            ..Recorder::default()
        });
        let bus = EventBus::new().subscribe(EVENT_USER_CREATED, recorder.clone());

        let result = bus
            .dispatch(vec![
                created_event("a@example.com"),
                created_event("b@example.com"),
                created_event("c@example.com"),
            ])
            .await;

        assert!(matches!(
            result,
            Err(AppError::EventDispatch { ref event, .. }) if event == "user.created"
        ));
        assert_eq!(*recorder.seen.lock().unwrap(), vec!["a@example.com"]);
    }

    #[tokio::test]
    async fn test_events_without_subscribers_are_fine() {
        let bus = EventBus::new();
        assert!(bus.dispatch(vec![created_event("a@example.com")]).await.is_ok());
        assert!(bus.dispatch(Vec::new()).await.is_ok());
    }

    #[test]
    fn test_default_listeners() {
        let bus = EventBus::with_default_listeners();
        assert_eq!(bus.handler_count(EVENT_USER_CREATED), 1);
        assert_eq!(bus.handler_count("user.deleted"), 0);
    }
}
