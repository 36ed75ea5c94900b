//! Read-only snapshots handed to callers of the store.

use serde::{Deserialize, Serialize};

use libris_core::{HolderId, ItemId};

use crate::item::ItemKind;

/// Lending status as seen by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ItemStatus {
    Available,
    Borrowed { holder: HolderId },
}

impl ItemStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, ItemStatus::Available)
    }
}

impl core::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ItemStatus::Available => f.write_str("Available"),
            ItemStatus::Borrowed { holder } => write!(f, "Borrowed by: {holder}"),
        }
    }
}

/// Point-in-time description of one item.
///
/// Renders as `ID: 1, Title: Dune, Author: Herbert (Available)`; electronic
/// items append `, File Format: <format>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub id: ItemId,
    pub title: String,
    pub author: String,
    pub kind: ItemKind,
    pub status: ItemStatus,
}

impl core::fmt::Display for ItemSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {} ({})",
            self.id, self.title, self.author, self.status
        )?;
        if let Some(format) = self.kind.format() {
            write!(f, ", File Format: {format}")?;
        }
        Ok(())
    }
}

/// Outcome of a successful return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnReceipt {
    /// The item as it stands after the return (available).
    pub item: ItemSummary,
    /// Fine owed at the moment of return.
    pub fine: u64,
}

impl ReturnReceipt {
    /// A positive fine means the caller should flag an overdue notice.
    pub fn is_overdue(&self) -> bool {
        self.fine > 0
    }
}
