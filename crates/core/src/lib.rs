//! `libris-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the lending
//! crates: identifiers, the lending error model and the clock seam.

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entity::Entity;
pub use error::{LendingError, LendingResult};
pub use id::{HolderId, ItemId};
