use std::sync::Arc;

use chirp_db::{AccountStore, StoreError};
use chirp_types::api::{LoginRequest, RegisterRequest};
use chirp_types::models::Account;

use crate::error::ServiceError;

/// Shortest password registration accepts.
const MIN_PASSWORD_CHARS: usize = 4;

pub struct AccountService {
    accounts: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(accounts: Arc<dyn AccountStore>) -> Self {
        Self { accounts }
    }

    /// Register a new account and return it with its assigned id.
    ///
    /// Every refusal is a conflict: blank username, short password, and
    /// taken username all answer the same way.
    pub fn register(&self, req: RegisterRequest) -> Result<Account, ServiceError> {
        let username = required(req.username.as_deref())
            .ok_or_else(|| ServiceError::Conflict("username is required".to_string()))?;
        let password = req
            .password
            .as_deref()
            .filter(|p| p.chars().count() >= MIN_PASSWORD_CHARS)
            .ok_or_else(|| {
                ServiceError::Conflict(format!(
                    "password must be at least {MIN_PASSWORD_CHARS} characters"
                ))
            })?;

        let taken = || ServiceError::Conflict(format!("username '{username}' is already taken"));
        if self.accounts.username_exists(username)? {
            return Err(taken());
        }
        let row = match self.accounts.insert_account(username, password) {
            Ok(row) => row,
            // Two registrations raced past the existence check; the
            // UNIQUE constraint settles it.
            Err(StoreError::Constraint) => return Err(taken()),
            Err(err) => return Err(err.into()),
        };
        Ok(row.into())
    }

    /// Log in, succeeding only on an exact username and password match.
    pub fn login(&self, req: LoginRequest) -> Result<Account, ServiceError> {
        let missing = || ServiceError::Invalid("username and password are required".to_string());
        let username = required(req.username.as_deref()).ok_or_else(missing)?;
        let password = required(req.password.as_deref()).ok_or_else(missing)?;

        let row = self
            .accounts
            .get_account_by_credentials(username, password)?
            .ok_or(ServiceError::Unauthorized)?;
        Ok(row.into())
    }
}

fn required(field: Option<&str>) -> Option<&str> {
    field.filter(|v| !v.trim().is_empty())
}
