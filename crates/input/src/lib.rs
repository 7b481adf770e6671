//! Terminal input module.
//!
//! This crate is independent of the game core. It maps `crossterm` key
//! events and pointer hits into [`crate::types::Command`]s; the game decides
//! what each command does in its current mode.

pub mod map;
pub mod pointer;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::{handle_pointer, pointer_press};
