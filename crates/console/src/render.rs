//! Text rendering of store outcomes.

use libris_auth::{AuthError, AuthzError};
use libris_core::LendingError;
use libris_inventory::{ItemSummary, ReturnReceipt};

use crate::config::OutputFormat;

pub fn added(summary: &ItemSummary) -> String {
    format!("{} added successfully: {summary}", summary.kind.noun())
}

pub fn removed(summary: &ItemSummary) -> String {
    format!("Item removed: {summary}")
}

pub fn borrowed(summary: &ItemSummary) -> String {
    format!("Borrowed successfully: {summary}")
}

/// Overdue notice (when a fine is owed) followed by the return line.
pub fn returned(receipt: &ReturnReceipt) -> Vec<String> {
    let mut lines = Vec::with_capacity(2);
    if receipt.is_overdue() {
        lines.push(format!("This item is overdue! Fine: {} units.", receipt.fine));
    }
    lines.push(format!("Returned successfully: {}", receipt.item));
    lines
}

pub fn lending_error(err: &LendingError) -> String {
    match err {
        LendingError::NotFound(id) => format!("Item with ID {id} not found."),
        LendingError::AlreadyBorrowed { .. } => "Item is already borrowed.".to_string(),
        LendingError::NotBorrowed(_) => "This item was not borrowed.".to_string(),
        LendingError::InvalidHolder => "Holder ID cannot be empty.".to_string(),
    }
}

pub fn auth_error(err: &AuthError) -> String {
    match err {
        AuthError::AccountExists(_) => "Account already exists!".to_string(),
        AuthError::InvalidCredentials => "Invalid credentials. Returning to main menu.".to_string(),
        AuthError::Validation(msg) => format!("Invalid account: {msg}."),
    }
}

pub fn denied(err: &AuthzError) -> String {
    format!("Access denied ({err}).")
}

/// Full inventory listing in the requested format.
pub fn listing(items: &[ItemSummary], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(items),
        OutputFormat::Text if items.is_empty() => Ok("No items in the library.".to_string()),
        OutputFormat::Text => {
            let mut out = String::from("Items in the library:");
            for item in items {
                out.push('\n');
                out.push_str(&item.to_string());
            }
            Ok(out)
        }
    }
}
