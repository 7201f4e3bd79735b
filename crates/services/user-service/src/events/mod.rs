//! Domain event dispatching.
//!
//! Events are dispatched strictly after the repository write commits.

mod bus;
mod listeners;

pub use bus::{DomainEventDispatcher, EventBus, EventHandler};
pub use listeners::UserCreatedListener;

#[cfg(any(test, feature = "test-utils"))]
pub use bus::MockDomainEventDispatcher;
