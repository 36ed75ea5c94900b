//! In-memory staff account table (username -> password).

use std::collections::HashMap;

use thiserror::Error;

use crate::Principal;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "1234";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("account already exists: {0}")]
    AccountExists(String),

    /// Unknown user and wrong password are deliberately indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("validation failed: {0}")]
    Validation(String),
}

/// Staff credential table, scoped to the process that owns it.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    accounts: HashMap<String, String>,
}

impl CredentialStore {
    /// Empty table (no one can log in).
    pub fn new() -> Self {
        Self::default()
    }

    /// Table seeded with one staff account.
    pub fn with_admin(username: impl Into<String>, password: impl Into<String>) -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(username.into(), password.into());
        Self { accounts }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn contains(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    /// Register a new staff account. Existing accounts are never overwritten.
    pub fn create_account(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<(), AuthError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(AuthError::Validation("username cannot be empty".to_string()));
        }
        if self.accounts.contains_key(&username) {
            return Err(AuthError::AccountExists(username));
        }

        tracing::info!(username = %username, "staff account created");
        self.accounts.insert(username, password.into());
        Ok(())
    }

    /// Check a username/password pair and resolve the staff principal.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Principal, AuthError> {
        match self.accounts.get(username) {
            Some(stored) if stored == password => Ok(Principal::staff(username)),
            _ => {
                tracing::warn!(username, "failed login attempt");
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}
