//! Application use cases.
//!
//! Each use case orchestrates the aggregate against the repository and the
//! event dispatcher. They depend on abstractions (traits) for dependency
//! inversion.

mod create_user;
mod get_user;

pub use create_user::CreateUserUseCase;
pub use get_user::GetUserUseCase;
