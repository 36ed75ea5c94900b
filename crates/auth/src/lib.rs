//! `libris-auth`: staff credentials and role-based access to the inventory.
//!
//! This crate is decoupled from the console and from the inventory itself:
//! it only decides who may invoke which kind of operation.

pub mod authorize;
pub mod credentials;
pub mod permissions;
pub mod principal;
pub mod roles;

pub use authorize::{authorize, AuthzError};
pub use credentials::{AuthError, CredentialStore, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
pub use permissions::Permission;
pub use principal::Principal;
pub use roles::Role;
