use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use libris_core::{Entity, HolderId, ItemId, LendingError, LendingResult};

use crate::policy::FinePolicy;
use crate::summary::{ItemStatus, ItemSummary};

/// Physical or electronic item. Only electronic items carry a file format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemKind {
    Physical,
    Electronic { format: String },
}

impl ItemKind {
    pub fn electronic(format: impl Into<String>) -> Self {
        Self::Electronic {
            format: format.into(),
        }
    }

    /// File format label for electronic items.
    pub fn format(&self) -> Option<&str> {
        match self {
            ItemKind::Physical => None,
            ItemKind::Electronic { format } => Some(format),
        }
    }

    pub fn is_electronic(&self) -> bool {
        matches!(self, ItemKind::Electronic { .. })
    }

    /// Short noun used when reporting on an item ("Book", "EBook").
    pub fn noun(&self) -> &'static str {
        match self {
            ItemKind::Physical => "Book",
            ItemKind::Electronic { .. } => "EBook",
        }
    }
}

/// An active loan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    holder: HolderId,
    borrowed_at: DateTime<Utc>,
    accrued_fine: u64,
}

impl Loan {
    pub fn holder(&self) -> &HolderId {
        &self.holder
    }

    pub fn borrowed_at(&self) -> DateTime<Utc> {
        self.borrowed_at
    }

    /// Last computed fine; refreshed by [`LendableItem::calculate_fine`].
    pub fn accrued_fine(&self) -> u64 {
        self.accrued_fine
    }
}

/// Lending state machine: `Available` <-> `Borrowed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LendingState {
    #[default]
    Available,
    Borrowed(Loan),
}

/// One lendable catalog entry.
///
/// # Invariants
/// - `id` never changes after construction.
/// - Holder and borrow timestamp exist iff the item is borrowed (they live in
///   the [`Loan`]).
/// - The accrued fine is zero whenever the item is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LendableItem {
    id: ItemId,
    title: String,
    author: String,
    kind: ItemKind,
    state: LendingState,
}

impl LendableItem {
    pub fn new(
        id: ItemId,
        title: impl Into<String>,
        author: impl Into<String>,
        kind: ItemKind,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            kind,
            state: LendingState::Available,
        }
    }

    pub fn physical(id: ItemId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self::new(id, title, author, ItemKind::Physical)
    }

    pub fn electronic(
        id: ItemId,
        title: impl Into<String>,
        author: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self::new(id, title, author, ItemKind::electronic(format))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn state(&self) -> &LendingState {
        &self.state
    }

    pub fn loan(&self) -> Option<&Loan> {
        match &self.state {
            LendingState::Available => None,
            LendingState::Borrowed(loan) => Some(loan),
        }
    }

    pub fn is_borrowed(&self) -> bool {
        self.loan().is_some()
    }

    pub fn holder(&self) -> Option<&HolderId> {
        self.loan().map(Loan::holder)
    }

    pub fn borrowed_at(&self) -> Option<DateTime<Utc>> {
        self.loan().map(Loan::borrowed_at)
    }

    pub fn accrued_fine(&self) -> u64 {
        self.loan().map_or(0, Loan::accrued_fine)
    }

    /// Lend the item to `holder`, starting the loan at `at`.
    ///
    /// Fails with `AlreadyBorrowed` (and changes nothing) if the item is out.
    pub fn borrow(&mut self, holder: HolderId, at: DateTime<Utc>) -> LendingResult<()> {
        if let LendingState::Borrowed(loan) = &self.state {
            return Err(LendingError::already_borrowed(self.id, loan.holder.clone()));
        }

        self.state = LendingState::Borrowed(Loan {
            holder,
            borrowed_at: at,
            accrued_fine: 0,
        });
        Ok(())
    }

    /// Recompute the fine owed as of `now` and cache it on the loan.
    pub fn calculate_fine(&mut self, now: DateTime<Utc>, policy: &FinePolicy) -> LendingResult<u64> {
        match &mut self.state {
            LendingState::Available => Err(LendingError::not_borrowed(self.id)),
            LendingState::Borrowed(loan) => {
                loan.accrued_fine = policy.fine_between(loan.borrowed_at, now);
                Ok(loan.accrued_fine)
            }
        }
    }

    /// End the loan at `at`, returning the fine owed at that moment.
    ///
    /// Fails with `NotBorrowed` (and changes nothing) if the item is in.
    pub fn return_item(&mut self, at: DateTime<Utc>, policy: &FinePolicy) -> LendingResult<u64> {
        let fine = self.calculate_fine(at, policy)?;
        self.state = LendingState::Available;
        Ok(fine)
    }

    /// Snapshot for callers outside the store.
    pub fn summary(&self) -> ItemSummary {
        let status = match &self.state {
            LendingState::Available => ItemStatus::Available,
            LendingState::Borrowed(loan) => ItemStatus::Borrowed {
                holder: loan.holder.clone(),
            },
        };

        ItemSummary {
            id: self.id,
            title: self.title.clone(),
            author: self.author.clone(),
            kind: self.kind.clone(),
            status,
        }
    }
}

impl Entity for LendableItem {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
