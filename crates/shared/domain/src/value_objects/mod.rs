//! Value objects - immutable types compared by value.

mod email;
mod user_id;

pub use email::Email;
pub use user_id::UserId;
