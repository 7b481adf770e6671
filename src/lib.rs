//! Blockfall (workspace facade crate).
//!
//! Re-exports the game crates under short paths (`blockfall::core`,
//! `blockfall::input`, ...) and holds the binary's configuration and logging
//! setup.

pub mod config;
pub mod logging;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
