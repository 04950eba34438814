//! Presentation adapter - connects a round to the host screen.
//!
//! The round itself ([`crate::core::RoundState`]) only flips one-shot
//! fields. This crate is the consumer side of those fields:
//!
//! - [`presenter`]: forwards player intents and elapsed time into the round,
//!   then navigates and buzzes in response to its events
//! - [`navigation`]: the [`Route`]s a host can show and the [`Navigator`] seam
//! - [`haptics`]: the [`Haptics`] seam and a tokio-driven pattern player
//! - [`config`]: environment-variable configuration for the binary
//! - [`summary`]: serializable end-of-round tally
//!
//! # Example
//!
//! ```
//! use tui_charades_adapter::{CurrentRoute, NoHaptics, Presenter, Route};
//!
//! let mut presenter = Presenter::new(1, CurrentRoute::default(), NoHaptics);
//! presenter.start();
//! presenter.mark_correct();
//! presenter.advance(60_000);
//!
//! assert_eq!(presenter.navigator().0, Route::Score { score: 1 });
//! ```

pub mod config;
pub mod haptics;
pub mod navigation;
pub mod presenter;
pub mod summary;

pub use tui_charades_core as core;
pub use tui_charades_types as types;

pub use config::{Config, SummaryFormat};
pub use haptics::{play_pattern, HapticSignal, Haptics, HapticsRuntime, NoHaptics};
pub use navigation::{CurrentRoute, Navigator, Route};
pub use presenter::Presenter;
pub use summary::RoundSummary;
