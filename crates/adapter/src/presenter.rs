//! Presenter: drives a [`RoundState`] and acts on its one-shot events.
//!
//! After every mutation the presenter inspects the round:
//!
//! 1. `finished` -> navigate to [`Route::Score`] with the final score, then
//!    acknowledge with `consume_finished`.
//! 2. `pending_buzz` -> hand the buzz to [`Haptics`], then acknowledge with
//!    `consume_buzz`.
//!
//! Time is fed one countdown period at a time so each tick's buzz is
//! observed separately, even when the host stalls for several seconds.

use crate::core::{RoundSnapshot, RoundState};
use crate::haptics::Haptics;
use crate::navigation::{Navigator, Route};
use crate::summary::RoundSummary;
use crate::types::{RoundAction, RoundPhase};

pub struct Presenter<N, H> {
    round: RoundState,
    navigator: N,
    haptics: H,
}

impl<N: Navigator, H: Haptics> Presenter<N, H> {
    pub fn new(seed: u32, navigator: N, haptics: H) -> Self {
        Self {
            round: RoundState::new(seed),
            navigator,
            haptics,
        }
    }

    /// Start a round (or a new one after the score screen) and show it.
    pub fn start(&mut self) {
        if self.round.is_disposed() || self.round.phase() == RoundPhase::Running {
            return;
        }
        self.round.start();
        tracing::info!(first_word = self.round.current_word(), "round started");
        self.navigator.navigate(Route::Round);
        self.sync();
    }

    pub fn mark_correct(&mut self) {
        self.round.mark_correct();
        self.sync();
    }

    pub fn mark_skipped(&mut self) {
        self.round.mark_skipped();
        self.sync();
    }

    pub fn apply_action(&mut self, action: RoundAction) {
        tracing::trace!(action = action.as_str(), "action");
        match action {
            RoundAction::MarkCorrect => self.mark_correct(),
            RoundAction::MarkSkipped => self.mark_skipped(),
            RoundAction::Restart => {
                if self.round.phase() == RoundPhase::Finished {
                    self.start();
                }
            }
        }
    }

    /// Feed elapsed wall time into the round timer.
    pub fn advance(&mut self, elapsed_ms: u32) {
        let mut left = elapsed_ms;
        loop {
            let step = match self.round.until_next_tick_ms() {
                Some(due) => due.min(left as u64) as u32,
                None => left,
            };
            self.round.advance(step);
            self.sync();

            left -= step;
            if left == 0 || self.round.until_next_tick_ms().is_none() {
                break;
            }
        }
    }

    /// Stop the round timer. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        if !self.round.is_disposed() {
            tracing::info!(score = self.round.score(), "round disposed");
        }
        self.round.dispose();
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        self.round.snapshot()
    }

    pub fn summary(&self) -> RoundSummary {
        RoundSummary::from_round(&self.round)
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn haptics(&self) -> &H {
        &self.haptics
    }

    pub fn haptics_mut(&mut self) -> &mut H {
        &mut self.haptics
    }

    fn sync(&mut self) {
        if self.round.finished() {
            let score = self.round.score();
            tracing::info!(score, "round finished");
            self.navigator.navigate(Route::Score { score });
            self.round.consume_finished();
        }

        let buzz = self.round.pending_buzz();
        if !buzz.is_none() {
            tracing::debug!(buzz = buzz.as_str(), "buzz requested");
            self.haptics.buzz(buzz);
            self.round.consume_buzz();
        }
    }
}

impl<N, H> Drop for Presenter<N, H> {
    fn drop(&mut self) {
        self.round.dispose();
    }
}
