//! Business rules for accounts and messages.
//!
//! Services own validation and orchestration; they talk to the stores
//! through the `chirp-db` traits and report outcomes as
//! [`ServiceError`]s. Nothing in this crate knows about HTTP.

pub mod accounts;
pub mod error;
pub mod messages;

pub use accounts::AccountService;
pub use error::ServiceError;
pub use messages::MessageService;

#[cfg(test)]
pub(crate) mod testing;
