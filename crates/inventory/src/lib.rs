//! Lending inventory domain module.
//!
//! This crate contains the lending rules for physical and electronic items
//! and the in-memory store that owns them (no IO, no rendering).

pub mod item;
pub mod policy;
pub mod shared;
pub mod store;
pub mod summary;

pub use item::{ItemKind, LendableItem, LendingState, Loan};
pub use policy::FinePolicy;
pub use shared::SharedInventory;
pub use store::InventoryStore;
pub use summary::{ItemStatus, ItemSummary, ReturnReceipt};
