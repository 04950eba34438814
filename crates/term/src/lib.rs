//! Terminal rendering for the round and score screens.
//!
//! Screens render into a plain framebuffer that is then flushed to the
//! terminal by [`TerminalRenderer`], which only rewrites changed cells.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep views pure so they can be asserted on cell by cell

pub mod fb;
pub mod renderer;
pub mod round_view;
pub mod score_view;

pub use tui_charades_core as core;
pub use tui_charades_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use round_view::{RoundView, Viewport};
pub use score_view::ScoreView;
