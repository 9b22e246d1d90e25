use chirp_types::models::Account;

/// Database row for an account. Distinct from the API-facing
/// [`Account`]: this is the only type that carries the stored password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRow {
    pub id: i64,
    pub username: String,
    pub password: String,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: row.id,
            username: row.username,
        }
    }
}

// Messages are served exactly as stored; the shared `Message` model is
// the row type.
