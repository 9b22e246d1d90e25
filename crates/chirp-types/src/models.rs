use serde::{Deserialize, Serialize};

/// A registered account, as served to clients. The stored password lives
/// in the store layer only and never appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub username: String,
}

/// A text post authored by an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub author_id: i64,
    pub text: String,
    /// Epoch seconds. Carried through from the client when supplied,
    /// stamped at creation time otherwise; never validated.
    pub posted_at: i64,
}
