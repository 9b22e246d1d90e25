use std::sync::Arc;

use chirp_db::{AccountStore, MessageStore};
use chirp_types::api::{CreateMessageRequest, UpdateMessageRequest};
use chirp_types::models::Message;

use crate::error::ServiceError;

/// Longest message text the service accepts, in characters.
const MAX_TEXT_CHARS: usize = 255;

pub struct MessageService {
    messages: Arc<dyn MessageStore>,
    accounts: Arc<dyn AccountStore>,
}

impl MessageService {
    pub fn new(messages: Arc<dyn MessageStore>, accounts: Arc<dyn AccountStore>) -> Self {
        Self { messages, accounts }
    }

    /// Validate and persist a new message.
    ///
    /// `posted_at` is carried through from the request when supplied,
    /// otherwise stamped with the current time.
    pub fn create(&self, req: CreateMessageRequest) -> Result<Message, ServiceError> {
        let text = validate_text(req.text.as_deref())?;
        let author_id = req
            .author_id
            .ok_or_else(|| ServiceError::Invalid("message author is required".to_string()))?;
        if self.accounts.get_account_by_id(author_id)?.is_none() {
            return Err(ServiceError::Invalid(format!("no account with id {author_id}")));
        }
        let posted_at = req
            .posted_at
            .unwrap_or_else(|| chrono::Utc::now().timestamp());
        Ok(self.messages.insert_message(author_id, text, posted_at)?)
    }

    /// Every message, in store order.
    pub fn all(&self) -> Result<Vec<Message>, ServiceError> {
        Ok(self.messages.get_all_messages()?)
    }

    /// Absence is data here, not an error.
    pub fn by_id(&self, id: i64) -> Result<Option<Message>, ServiceError> {
        Ok(self.messages.get_message_by_id(id)?)
    }

    /// Remove a message, reporting the rows removed. Deleting an absent
    /// id is a no-op.
    pub fn delete(&self, id: i64) -> Result<usize, ServiceError> {
        Ok(self.messages.delete_message(id)?)
    }

    /// Overwrite a message's text in place, reporting the rows updated.
    ///
    /// The target must exist before the replacement text is examined;
    /// id, author, and timestamp never change.
    pub fn update_text(&self, id: i64, req: UpdateMessageRequest) -> Result<usize, ServiceError> {
        if !self.messages.message_exists(id)? {
            return Err(ServiceError::NotFound("message not found".to_string()));
        }
        let text = validate_text(req.text.as_deref())?;
        Ok(self.messages.update_message_text(id, text)?)
    }

    /// All messages by one author, in store order. Unknown accounts
    /// simply have no messages.
    pub fn by_author(&self, account_id: i64) -> Result<Vec<Message>, ServiceError> {
        Ok(self.messages.get_messages_by_author(account_id)?)
    }
}

/// Text must be present, non-blank after trimming, and at most
/// [`MAX_TEXT_CHARS`] characters. The value itself is kept verbatim;
/// trimming is only for the blank check.
fn validate_text(text: Option<&str>) -> Result<&str, ServiceError> {
    let text = text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ServiceError::Invalid("message text is required".to_string()))?;
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(ServiceError::Invalid(format!(
            "message text must be at most {MAX_TEXT_CHARS} characters"
        )));
    }
    Ok(text)
}
