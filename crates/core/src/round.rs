//! Round state module - one timed play-through
//!
//! [`RoundState`] owns the word queue, the current word, the score, the time
//! left, and the countdown that drives it. It raises two one-shot events for
//! the presentation layer:
//!
//! - `finished`: set when the timer runs out; the consumer navigates to the
//!   score screen and then calls [`RoundState::consume_finished`].
//! - `pending_buzz`: set on a correct answer, on each tick inside the panic
//!   window, and at game over; the consumer plays the pattern and then calls
//!   [`RoundState::consume_buzz`].
//!
//! Events are never cleared by the producer. A panic tick re-raises
//! [`Buzz::Panic`] every second while the window lasts.
//!
//! Lifecycle: `NotStarted -> Running -> Finished`. User intents outside
//! `Running` are ignored.

use crate::countdown::{Countdown, CountdownEvent};
use crate::rng::WordQueue;
use crate::snapshot::RoundSnapshot;
use crate::types::{Buzz, RoundPhase, PANIC_THRESHOLD_SECONDS, ROUND_SECONDS, TICK_MS};

#[derive(Debug, Clone)]
pub struct RoundState {
    queue: WordQueue,
    current_word: &'static str,
    score: i32,
    remaining_seconds: u32,
    phase: RoundPhase,
    finished: bool,
    pending_buzz: Buzz,
    countdown: Countdown,
    correct: u32,
    skipped: u32,
    words_seen: u32,
    disposed: bool,
}

impl RoundState {
    /// Create a round that has not started yet. `seed` fixes the word order.
    pub fn new(seed: u32) -> Self {
        Self {
            queue: WordQueue::new(seed),
            current_word: "",
            score: 0,
            remaining_seconds: ROUND_SECONDS,
            phase: RoundPhase::NotStarted,
            finished: false,
            pending_buzz: Buzz::None,
            countdown: Countdown::new(ROUND_SECONDS, TICK_MS),
            correct: 0,
            skipped: 0,
            words_seen: 0,
            disposed: false,
        }
    }

    /// Begin the round: reset score and events, shuffle a fresh deck, deal the
    /// first word, arm the timer.
    ///
    /// Ignored while running or after [`RoundState::dispose`]. Calling it on a
    /// finished round starts a fresh one.
    pub fn start(&mut self) {
        if self.disposed || self.phase == RoundPhase::Running {
            return;
        }

        self.score = 0;
        self.correct = 0;
        self.skipped = 0;
        self.words_seen = 0;
        self.finished = false;
        self.pending_buzz = Buzz::None;
        self.remaining_seconds = ROUND_SECONDS;
        self.phase = RoundPhase::Running;
        self.queue.refill();
        self.next_word();
        self.countdown.arm();
    }

    /// The word was guessed: +1, request a correct buzz, move to the next word.
    pub fn mark_correct(&mut self) {
        if !self.accepts_events() {
            return;
        }
        self.score += 1;
        self.correct += 1;
        self.pending_buzz = Buzz::Correct;
        self.next_word();
    }

    /// The word was skipped: -1, move to the next word. No buzz.
    pub fn mark_skipped(&mut self) {
        if !self.accepts_events() {
            return;
        }
        self.score -= 1;
        self.skipped += 1;
        self.next_word();
    }

    /// One second elapsed with `seconds_remaining` left on the clock.
    pub fn on_tick(&mut self, seconds_remaining: u32) {
        if !self.accepts_events() {
            return;
        }
        self.remaining_seconds = self.remaining_seconds.min(seconds_remaining);
        if self.remaining_seconds <= PANIC_THRESHOLD_SECONDS {
            self.pending_buzz = Buzz::Panic;
        }
    }

    /// The clock ran out. Terminal for this round.
    pub fn on_timer_expired(&mut self) {
        if !self.accepts_events() {
            return;
        }
        self.countdown.cancel();
        self.remaining_seconds = 0;
        self.pending_buzz = Buzz::GameOver;
        self.finished = true;
        self.phase = RoundPhase::Finished;
    }

    /// Feed elapsed wall time into the owned countdown and apply every event
    /// that fell due.
    pub fn advance(&mut self, elapsed_ms: u32) {
        self.countdown.feed(elapsed_ms);
        while let Some(event) = self.countdown.next_event() {
            match event {
                CountdownEvent::Tick(seconds) => self.on_tick(seconds),
                CountdownEvent::Expired => self.on_timer_expired(),
            }
        }
    }

    /// Acknowledge the finished event after navigating away.
    pub fn consume_finished(&mut self) {
        self.finished = false;
    }

    /// Acknowledge the pending buzz after playing it.
    pub fn consume_buzz(&mut self) {
        self.pending_buzz = Buzz::None;
    }

    /// Cancel the timer. Safe to call repeatedly; no tick, expiry or intent is
    /// applied afterwards.
    pub fn dispose(&mut self) {
        self.countdown.cancel();
        self.disposed = true;
    }

    pub fn current_word(&self) -> &'static str {
        self.current_word
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn pending_buzz(&self) -> Buzz {
        self.pending_buzz
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn skipped(&self) -> u32 {
        self.skipped
    }

    /// Words shown this round, including the current one.
    pub fn words_seen(&self) -> u32 {
        self.words_seen
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn queue(&self) -> &WordQueue {
        &self.queue
    }

    /// Milliseconds until the next countdown event, if the timer is armed.
    pub fn until_next_tick_ms(&self) -> Option<u64> {
        self.countdown.until_next_ms()
    }

    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        out.word = self.current_word;
        out.score = self.score;
        out.remaining_seconds = self.remaining_seconds;
        out.phase = self.phase;
        out.finished = self.finished;
        out.pending_buzz = self.pending_buzz;
        out.correct = self.correct;
        out.skipped = self.skipped;
        out.words_seen = self.words_seen;
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let mut s = RoundSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn accepts_events(&self) -> bool {
        self.phase == RoundPhase::Running && !self.disposed
    }

    fn next_word(&mut self) {
        self.current_word = self.queue.pop();
        self.words_seen = self.words_seen.wrapping_add(1);
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new(1)
    }
}
