//! Domain layer - Core business entities, value objects and events.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod constants;
pub mod error;
pub mod event;
pub mod user;
pub mod value_objects;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use event::{DomainEvent, EventMetadata, UserCreatedEvent};
pub use user::User;
pub use value_objects::{Email, UserId};
