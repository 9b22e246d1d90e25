//! In-memory store fakes for service tests.

use std::sync::Mutex;

use chirp_db::{AccountRow, AccountStore, MessageStore, StoreError};
use chirp_types::models::Message;

/// Vec-backed [`AccountStore`].
pub struct MemoryAccounts {
    inner: Mutex<AccountsInner>,
}

struct AccountsInner {
    rows: Vec<AccountRow>,
    next_id: i64,
}

impl MemoryAccounts {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(AccountsInner {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

impl AccountStore for MemoryAccounts {
    fn insert_account(&self, username: &str, password: &str) -> Result<AccountRow, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.rows.iter().any(|r| r.username == username) {
            return Err(StoreError::Constraint);
        }
        let row = AccountRow {
            id: inner.next_id,
            username: username.to_string(),
            password: password.to_string(),
        };
        inner.next_id += 1;
        inner.rows.push(row.clone());
        Ok(row)
    }

    fn get_account_by_id(&self, id: i64) -> Result<Option<AccountRow>, StoreError> {
        Ok(self.inner.lock().unwrap().rows.iter().find(|r| r.id == id).cloned())
    }

    fn get_account_by_username(&self, username: &str) -> Result<Option<AccountRow>, StoreError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|r| r.username == username)
            .cloned())
    }

    fn username_exists(&self, username: &str) -> Result<bool, StoreError> {
        Ok(self.inner.lock().unwrap().rows.iter().any(|r| r.username == username))
    }

    fn get_account_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AccountRow>, StoreError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|r| r.username == username && r.password == password)
            .cloned())
    }
}

/// Vec-backed [`MessageStore`].
pub struct MemoryMessages {
    inner: Mutex<MessagesInner>,
}

struct MessagesInner {
    rows: Vec<Message>,
    next_id: i64,
}

impl MemoryMessages {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MessagesInner {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub fn count(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    /// The row as persisted, for assertions against service returns.
    pub fn stored(&self, id: i64) -> Option<Message> {
        self.inner.lock().unwrap().rows.iter().find(|m| m.id == id).cloned()
    }
}

impl MessageStore for MemoryMessages {
    fn insert_message(
        &self,
        author_id: i64,
        text: &str,
        posted_at: i64,
    ) -> Result<Message, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let message = Message {
            id: inner.next_id,
            author_id,
            text: text.to_string(),
            posted_at,
        };
        inner.next_id += 1;
        inner.rows.push(message.clone());
        Ok(message)
    }

    fn get_message_by_id(&self, id: i64) -> Result<Option<Message>, StoreError> {
        Ok(self.inner.lock().unwrap().rows.iter().find(|m| m.id == id).cloned())
    }

    fn get_all_messages(&self) -> Result<Vec<Message>, StoreError> {
        Ok(self.inner.lock().unwrap().rows.clone())
    }

    fn get_messages_by_author(&self, author_id: i64) -> Result<Vec<Message>, StoreError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|m| m.author_id == author_id)
            .cloned()
            .collect())
    }

    fn message_exists(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.inner.lock().unwrap().rows.iter().any(|m| m.id == id))
    }

    fn delete_message(&self, id: i64) -> Result<usize, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.rows.len();
        inner.rows.retain(|m| m.id != id);
        Ok(before - inner.rows.len())
    }

    fn update_message_text(&self, id: i64, text: &str) -> Result<usize, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                message.text = text.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
