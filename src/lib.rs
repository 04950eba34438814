//! TUI Charades (workspace facade crate).
//!
//! Re-exports the member crates as `tui_charades::{adapter,core,input,term,types}`
//! so the binary, integration tests and benches share one import root.

pub use tui_charades_adapter as adapter;
pub use tui_charades_core as core;
pub use tui_charades_input as input;
pub use tui_charades_term as term;
pub use tui_charades_types as types;
