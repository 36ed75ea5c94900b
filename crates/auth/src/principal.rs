use serde::{Deserialize, Serialize};

use crate::Role;

/// Who is driving the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Account name; `None` for anonymous patrons.
    pub username: Option<String>,
    pub role: Role,
}

impl Principal {
    pub fn staff(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            role: Role::Staff,
        }
    }

    pub fn patron() -> Self {
        Self {
            username: None,
            role: Role::Patron,
        }
    }

    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("patron")
    }
}
