//! In-memory inventory store.

use std::collections::BTreeMap;

use libris_core::{Clock, HolderId, ItemId, LendingError, LendingResult, SystemClock};

use crate::item::{ItemKind, LendableItem};
use crate::policy::FinePolicy;
use crate::summary::{ItemSummary, ReturnReceipt};

/// Owns every lendable item and mints their identifiers.
///
/// - Identifiers start at 1 and are never reused, even after removal.
/// - Listing is in ascending identifier order.
/// - Each operation mutates exactly its target or nothing at all.
///
/// The store is single-threaded; wrap it in [`crate::SharedInventory`] to
/// serve several callers.
#[derive(Debug)]
pub struct InventoryStore<C = SystemClock> {
    items: BTreeMap<ItemId, LendableItem>,
    next_id: ItemId,
    clock: C,
    policy: FinePolicy,
}

impl InventoryStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for InventoryStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InventoryStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: ItemId::new(1),
            clock,
            policy: FinePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FinePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> FinePolicy {
        self.policy
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&LendableItem> {
        self.items.get(&id)
    }

    /// Register a physical book.
    pub fn add_physical(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> ItemSummary {
        self.insert(title.into(), author.into(), ItemKind::Physical)
    }

    /// Register an electronic book with its file format label.
    pub fn add_electronic(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        format: impl Into<String>,
    ) -> ItemSummary {
        self.insert(title.into(), author.into(), ItemKind::electronic(format))
    }

    /// Delete an item, borrowed or not, returning its last summary.
    pub fn remove(&mut self, id: ItemId) -> LendingResult<ItemSummary> {
        let item = self.items.remove(&id).ok_or(LendingError::not_found(id))?;

        if let Some(holder) = item.holder() {
            tracing::info!(item_id = %id, %holder, "removed item that was still on loan");
        } else {
            tracing::debug!(item_id = %id, "item removed");
        }

        Ok(item.summary())
    }

    /// Lend an item to `holder` as of the store clock's current time.
    pub fn borrow(&mut self, id: ItemId, holder: HolderId) -> LendingResult<ItemSummary> {
        let now = self.clock.now();
        let item = self.item_mut(id)?;
        item.borrow(holder, now)?;

        tracing::debug!(item_id = %id, holder = ?item.holder(), "item borrowed");
        Ok(item.summary())
    }

    /// Accept a returned item, reporting any fine owed right now.
    pub fn return_item(&mut self, id: ItemId) -> LendingResult<ReturnReceipt> {
        let now = self.clock.now();
        let policy = self.policy;
        let item = self.item_mut(id)?;
        let fine = item.return_item(now, &policy)?;

        if fine > 0 {
            tracing::info!(item_id = %id, fine, "overdue item returned");
        } else {
            tracing::debug!(item_id = %id, "item returned");
        }

        Ok(ReturnReceipt {
            item: item.summary(),
            fine,
        })
    }

    /// Current fine for a borrowed item, without ending the loan.
    pub fn fine_for(&mut self, id: ItemId) -> LendingResult<u64> {
        let now = self.clock.now();
        let policy = self.policy;
        self.item_mut(id)?.calculate_fine(now, &policy)
    }

    /// Snapshot of every item, ordered by identifier.
    pub fn list_all(&self) -> Vec<ItemSummary> {
        self.items.values().map(LendableItem::summary).collect()
    }

    fn insert(&mut self, title: String, author: String, kind: ItemKind) -> ItemSummary {
        let id = self.next_id;
        self.next_id = id.successor();

        let item = LendableItem::new(id, title, author, kind);
        let summary = item.summary();
        self.items.insert(id, item);

        tracing::debug!(item_id = %id, kind = summary.kind.noun(), "item added");
        summary
    }

    fn item_mut(&mut self, id: ItemId) -> LendingResult<&mut LendableItem> {
        self.items.get_mut(&id).ok_or(LendingError::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use libris_core::ManualClock;

    use crate::item::LendingState;
    use crate::summary::ItemStatus;

    fn holder(raw: &str) -> HolderId {
        HolderId::parse(raw).unwrap()
    }

    fn manual_store() -> (InventoryStore<ManualClock>, ManualClock) {
        let clock = ManualClock::new(Utc::now());
        (InventoryStore::with_clock(clock.clone()), clock)
    }

    #[test]
    fn added_items_start_available_without_fine() {
        let mut store = InventoryStore::new();
        let book = store.add_physical("Dune", "Herbert");
        let ebook = store.add_electronic("Foo", "Bar", "PDF");

        for id in [book.id, ebook.id] {
            let item = store.get(id).unwrap();
            assert_eq!(item.state(), &LendingState::Available);
            assert_eq!(item.accrued_fine(), 0);
        }
        assert_eq!(ebook.kind, ItemKind::electronic("PDF"));
    }

    #[test]
    fn empty_strings_are_accepted() {
        let mut store = InventoryStore::new();
        let summary = store.add_electronic("", "", "");
        assert_eq!(summary.title, "");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn ids_increase_and_are_never_reused() {
        let mut store = InventoryStore::new();
        let a = store.add_physical("A", "a").id;
        let b = store.add_physical("B", "b").id;
        store.remove(b).unwrap();
        let c = store.add_electronic("C", "c", "EPUB").id;

        assert_eq!(a, ItemId::new(1));
        assert_eq!(b, ItemId::new(2));
        assert_eq!(c, ItemId::new(3));
    }

    #[test]
    fn remove_missing_id_is_not_found_and_changes_nothing() {
        let mut store = InventoryStore::new();
        store.add_physical("Dune", "Herbert");

        let err = store.remove(ItemId::new(99)).unwrap_err();
        assert_eq!(err, LendingError::NotFound(ItemId::new(99)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn borrowed_items_can_be_removed() {
        let mut store = InventoryStore::new();
        let id = store.add_physical("Dune", "Herbert").id;
        store.borrow(id, holder("S1")).unwrap();

        let removed = store.remove(id).unwrap();
        assert_eq!(removed.status, ItemStatus::Borrowed { holder: holder("S1") });
        assert!(store.is_empty());
        assert_eq!(store.return_item(id), Err(LendingError::NotFound(id)));
    }

    #[test]
    fn borrow_and_return_unknown_ids_are_not_found() {
        let mut store = InventoryStore::new();
        let missing = ItemId::new(5);
        assert_eq!(store.borrow(missing, holder("S1")), Err(LendingError::NotFound(missing)));
        assert_eq!(store.return_item(missing), Err(LendingError::NotFound(missing)));
        assert_eq!(store.fine_for(missing), Err(LendingError::NotFound(missing)));
    }

    #[test]
    fn double_borrow_keeps_first_holder() {
        let mut store = InventoryStore::new();
        let id = store.add_physical("Dune", "Herbert").id;

        let summary = store.borrow(id, holder("S1")).unwrap();
        assert_eq!(summary.status, ItemStatus::Borrowed { holder: holder("S1") });

        let err = store.borrow(id, holder("S2")).unwrap_err();
        assert!(matches!(err, LendingError::AlreadyBorrowed { .. }));
        assert_eq!(store.get(id).unwrap().holder(), Some(&holder("S1")));
    }

    #[test]
    fn double_return_is_not_borrowed() {
        let mut store = InventoryStore::new();
        let id = store.add_physical("Dune", "Herbert").id;
        store.borrow(id, holder("S1")).unwrap();

        let receipt = store.return_item(id).unwrap();
        assert_eq!(receipt.fine, 0);
        assert_eq!(receipt.item.status, ItemStatus::Available);
        assert!(store.get(id).unwrap().holder().is_none());
        assert_eq!(store.get(id).unwrap().accrued_fine(), 0);

        assert_eq!(store.return_item(id), Err(LendingError::NotBorrowed(id)));
    }

    #[test]
    fn overdue_return_reports_fine_from_clock() {
        let (mut store, clock) = manual_store();
        let id = store.add_physical("Dune", "Herbert").id;
        store.borrow(id, holder("S1")).unwrap();

        clock.advance(Duration::days(14));
        assert_eq!(store.fine_for(id).unwrap(), 0);

        clock.advance(Duration::days(6) + Duration::hours(23));
        assert_eq!(store.fine_for(id).unwrap(), 60);
        assert_eq!(store.get(id).unwrap().accrued_fine(), 60);

        let receipt = store.return_item(id).unwrap();
        assert!(receipt.is_overdue());
        assert_eq!(receipt.fine, 60);
        assert_eq!(store.get(id).unwrap().accrued_fine(), 0);
    }

    #[test]
    fn custom_policy_applies_to_returns() {
        let (store, clock) = manual_store();
        let mut store = store.with_policy(FinePolicy::new(3, 5));
        let id = store.add_electronic("Foo", "Bar", "PDF").id;
        store.borrow(id, holder("S1")).unwrap();

        clock.advance(Duration::days(5));
        assert_eq!(store.return_item(id).unwrap().fine, 10);
    }

    #[test]
    fn fine_for_available_item_is_not_borrowed() {
        let mut store = InventoryStore::new();
        let id = store.add_physical("Dune", "Herbert").id;
        assert_eq!(store.fine_for(id), Err(LendingError::NotBorrowed(id)));
    }

    #[test]
    fn list_all_reflects_current_state_in_id_order() {
        let mut store = InventoryStore::new();
        assert!(store.list_all().is_empty());

        let ids: Vec<_> = (0..5)
            .map(|i| store.add_physical(format!("T{i}"), "A").id)
            .collect();
        store.borrow(ids[3], holder("S3")).unwrap();

        let listed = store.list_all();
        assert_eq!(listed.len(), 5);
        assert_eq!(listed.iter().map(|s| s.id).collect::<Vec<_>>(), ids);
        for summary in &listed {
            assert_eq!(summary, &store.get(summary.id).unwrap().summary());
        }
        assert!(!listed[3].status.is_available());
    }

    #[test]
    fn end_to_end_lending_scenario() {
        let mut store = InventoryStore::new();

        let dune = store.add_physical("Dune", "Herbert");
        assert_eq!(dune.id, ItemId::new(1));
        let foo = store.add_electronic("Foo", "Bar", "PDF");
        assert_eq!(foo.id, ItemId::new(2));

        store.borrow(dune.id, holder("S100")).unwrap();
        assert!(matches!(
            store.borrow(dune.id, holder("S200")),
            Err(LendingError::AlreadyBorrowed { .. })
        ));

        let receipt = store.return_item(dune.id).unwrap();
        assert_eq!(receipt.fine, 0);

        let removed = store.remove(foo.id).unwrap();
        assert_eq!(
            removed.to_string(),
            "ID: 2, Title: Foo, Author: Bar (Available), File Format: PDF"
        );

        let listed = store.list_all();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, dune.id);
        assert_eq!(listed[0].status, ItemStatus::Available);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add,
            Remove(u64),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![Just(Op::Add), (1u64..40).prop_map(Op::Remove)]
        }

        proptest! {
            /// Property: minted ids strictly increase regardless of removals.
            #[test]
            fn minted_ids_strictly_increase(ops in proptest::collection::vec(op(), 1..80)) {
                let mut store = InventoryStore::new();
                let mut last: Option<ItemId> = None;
                let mut live = 0usize;

                for op in ops {
                    match op {
                        Op::Add => {
                            let id = store.add_physical("T", "A").id;
                            if let Some(prev) = last {
                                prop_assert!(id > prev);
                            }
                            last = Some(id);
                            live += 1;
                        }
                        Op::Remove(raw) => {
                            if store.remove(ItemId::new(raw)).is_ok() {
                                live -= 1;
                            }
                        }
                    }
                    prop_assert_eq!(store.len(), live);
                }
            }
        }
    }
}
