//! Capability contracts for the persistence layer. Services receive
//! these through their constructors and never name [`crate::Database`]
//! directly.

use chirp_types::models::Message;
use thiserror::Error;

use crate::models::AccountRow;

/// Store-layer failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("unique constraint violated")]
    Constraint,
    /// The connection mutex was poisoned by a panicking holder.
    #[error("connection lock poisoned")]
    Poisoned,
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

/// Persistence operations for accounts.
pub trait AccountStore: Send + Sync {
    /// Inserts a new account and returns the stored row with its
    /// assigned id. A taken username surfaces as
    /// [`StoreError::Constraint`].
    fn insert_account(&self, username: &str, password: &str) -> Result<AccountRow, StoreError>;

    fn get_account_by_id(&self, id: i64) -> Result<Option<AccountRow>, StoreError>;

    fn get_account_by_username(&self, username: &str) -> Result<Option<AccountRow>, StoreError>;

    fn username_exists(&self, username: &str) -> Result<bool, StoreError>;

    /// Exact-match lookup on the username+password pair.
    fn get_account_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AccountRow>, StoreError>;
}

/// Persistence operations for messages.
pub trait MessageStore: Send + Sync {
    /// Inserts a new message and returns it with its assigned id.
    fn insert_message(
        &self,
        author_id: i64,
        text: &str,
        posted_at: i64,
    ) -> Result<Message, StoreError>;

    fn get_message_by_id(&self, id: i64) -> Result<Option<Message>, StoreError>;

    fn get_all_messages(&self) -> Result<Vec<Message>, StoreError>;

    fn get_messages_by_author(&self, author_id: i64) -> Result<Vec<Message>, StoreError>;

    fn message_exists(&self, id: i64) -> Result<bool, StoreError>;

    /// Removes the message if present. Returns rows removed (0 or 1).
    fn delete_message(&self, id: i64) -> Result<usize, StoreError>;

    /// Overwrites the text of a stored message. Returns rows updated
    /// (0 when the id is unknown).
    fn update_message_text(&self, id: i64, text: &str) -> Result<usize, StoreError>;
}
