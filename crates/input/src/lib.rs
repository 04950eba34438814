//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::RoundAction`]. Independent
//! of any UI framework.

pub mod map;

pub use tui_charades_types as types;

pub use map::{handle_key_event, should_quit};
