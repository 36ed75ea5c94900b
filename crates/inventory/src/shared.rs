//! Thread-safe handle over an [`InventoryStore`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use libris_core::{Clock, HolderId, ItemId, LendingResult, SystemClock};

use crate::store::InventoryStore;
use crate::summary::{ItemSummary, ReturnReceipt};

/// Cloneable, lock-guarded inventory for multiple concurrent callers.
///
/// Every operation runs inside one critical section, so the store operations
/// are atomic with respect to each other.
#[derive(Debug)]
pub struct SharedInventory<C = SystemClock> {
    inner: Arc<Mutex<InventoryStore<C>>>,
}

impl<C> Clone for SharedInventory<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clock> SharedInventory<C> {
    pub fn new(store: InventoryStore<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    // A panic inside a critical section cannot leave a half-applied
    // operation behind, so a poisoned lock still guards consistent state.
    fn lock(&self) -> MutexGuard<'_, InventoryStore<C>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the underlying store.
    pub fn with_store<R>(&self, f: impl FnOnce(&mut InventoryStore<C>) -> R) -> R {
        f(&mut *self.lock())
    }

    pub fn add_physical(&self, title: impl Into<String>, author: impl Into<String>) -> ItemSummary {
        self.lock().add_physical(title, author)
    }

    pub fn add_electronic(
        &self,
        title: impl Into<String>,
        author: impl Into<String>,
        format: impl Into<String>,
    ) -> ItemSummary {
        self.lock().add_electronic(title, author, format)
    }

    pub fn remove(&self, id: ItemId) -> LendingResult<ItemSummary> {
        self.lock().remove(id)
    }

    pub fn borrow(&self, id: ItemId, holder: HolderId) -> LendingResult<ItemSummary> {
        self.lock().borrow(id, holder)
    }

    pub fn return_item(&self, id: ItemId) -> LendingResult<ReturnReceipt> {
        self.lock().return_item(id)
    }

    pub fn fine_for(&self, id: ItemId) -> LendingResult<u64> {
        self.lock().fine_for(id)
    }

    pub fn list_all(&self) -> Vec<ItemSummary> {
        self.lock().list_all()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Default for SharedInventory<SystemClock> {
    fn default() -> Self {
        Self::new(InventoryStore::new())
    }
}
