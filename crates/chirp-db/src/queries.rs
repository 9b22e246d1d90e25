use chirp_types::models::Message;
use rusqlite::{OptionalExtension, params};

use crate::Database;
use crate::models::AccountRow;
use crate::store::{AccountStore, MessageStore, StoreError};

impl AccountStore for Database {
    fn insert_account(&self, username: &str, password: &str) -> Result<AccountRow, StoreError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO accounts (username, password) VALUES (?1, ?2)",
                params![username, password],
            )
            .map_err(constraint_or_sqlite)?;
            Ok(AccountRow {
                id: conn.last_insert_rowid(),
                username: username.to_string(),
                password: password.to_string(),
            })
        })
    }

    fn get_account_by_id(&self, id: i64) -> Result<Option<AccountRow>, StoreError> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, username, password FROM accounts WHERE id = ?1",
                    params![id],
                    account_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    fn get_account_by_username(&self, username: &str) -> Result<Option<AccountRow>, StoreError> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, username, password FROM accounts WHERE username = ?1",
                    params![username],
                    account_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    fn username_exists(&self, username: &str) -> Result<bool, StoreError> {
        self.with_conn(|conn| {
            let exists: i64 = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM accounts WHERE username = ?1)",
                params![username],
                |row| row.get(0),
            )?;
            Ok(exists == 1)
        })
    }

    fn get_account_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AccountRow>, StoreError> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, username, password FROM accounts
                     WHERE username = ?1 AND password = ?2",
                    params![username, password],
                    account_row,
                )
                .optional()?;
            Ok(row)
        })
    }
}

impl MessageStore for Database {
    fn insert_message(
        &self,
        author_id: i64,
        text: &str,
        posted_at: i64,
    ) -> Result<Message, StoreError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO messages (author_id, text, posted_at) VALUES (?1, ?2, ?3)",
                params![author_id, text, posted_at],
            )?;
            Ok(Message {
                id: conn.last_insert_rowid(),
                author_id,
                text: text.to_string(),
                posted_at,
            })
        })
    }

    fn get_message_by_id(&self, id: i64) -> Result<Option<Message>, StoreError> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, author_id, text, posted_at FROM messages WHERE id = ?1",
                    params![id],
                    message_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    fn get_all_messages(&self) -> Result<Vec<Message>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, author_id, text, posted_at FROM messages")?;
            let rows = stmt
                .query_map([], message_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    fn get_messages_by_author(&self, author_id: i64) -> Result<Vec<Message>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, author_id, text, posted_at FROM messages WHERE author_id = ?1",
            )?;
            let rows = stmt
                .query_map(params![author_id], message_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    fn message_exists(&self, id: i64) -> Result<bool, StoreError> {
        self.with_conn(|conn| {
            let exists: i64 = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM messages WHERE id = ?1)",
                params![id],
                |row| row.get(0),
            )?;
            Ok(exists == 1)
        })
    }

    fn delete_message(&self, id: i64) -> Result<usize, StoreError> {
        self.with_conn(|conn| {
            let removed = conn.execute("DELETE FROM messages WHERE id = ?1", params![id])?;
            Ok(removed)
        })
    }

    fn update_message_text(&self, id: i64, text: &str) -> Result<usize, StoreError> {
        self.with_conn(|conn| {
            let updated = conn.execute(
                "UPDATE messages SET text = ?2 WHERE id = ?1",
                params![id, text],
            )?;
            Ok(updated)
        })
    }
}

fn account_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<AccountRow> {
    Ok(AccountRow {
        id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
    })
}

fn message_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Message> {
    Ok(Message {
        id: row.get(0)?,
        author_id: row.get(1)?,
        text: row.get(2)?,
        posted_at: row.get(3)?,
    })
}

fn constraint_or_sqlite(err: rusqlite::Error) -> StoreError {
    match err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            StoreError::Constraint
        }
        other => StoreError::Sqlite(other),
    }
}
