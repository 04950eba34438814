//! Core round logic - pure, deterministic, and testable
//!
//! This crate contains the word-guessing round: the shuffled word deck, the
//! one-minute countdown, scoring, and the one-shot events consumed by the
//! presentation layer. It has **zero dependencies** on UI or I/O:
//!
//! - **Deterministic**: the same seed deals the same words
//! - **Synchronous**: every operation completes before returning
//! - **Host-driven time**: the caller feeds elapsed milliseconds
//!
//! # Module Structure
//!
//! - [`countdown`]: fixed-period countdown emitting ticks and a single expiry
//! - [`rng`]: LCG and the FIFO word queue refilled with shuffled decks
//! - [`round`]: the round state machine
//! - [`snapshot`]: plain copy of the round for rendering
//!
//! # Example
//!
//! ```
//! use tui_charades_core::RoundState;
//! use tui_charades_types::Buzz;
//!
//! let mut round = RoundState::new(12345);
//! round.start();
//!
//! round.mark_correct();
//! assert_eq!(round.score(), 1);
//! assert_eq!(round.pending_buzz(), Buzz::Correct);
//! round.consume_buzz();
//!
//! // One minute later the round is over.
//! round.advance(60_000);
//! assert!(round.finished());
//! assert_eq!(round.pending_buzz(), Buzz::GameOver);
//! ```

pub mod countdown;
pub mod rng;
pub mod round;
pub mod snapshot;

pub use tui_charades_types as types;

pub use countdown::{Countdown, CountdownEvent};
pub use rng::{SimpleRng, WordQueue};
pub use round::RoundState;
pub use snapshot::RoundSnapshot;
