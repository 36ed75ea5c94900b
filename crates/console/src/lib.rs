//! `libris-console`: interactive text front end for the lending inventory.
//!
//! The menu loop is written against any `BufRead`/`Write` pair so it can be
//! driven by stdin/stdout in the binary and by scripted buffers in tests.

pub mod config;
pub mod render;
pub mod session;

pub use config::{Config, ConfigError, OutputFormat};
pub use session::{Action, Session, SessionError};
