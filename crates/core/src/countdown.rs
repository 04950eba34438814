//! Countdown module - periodic round timer
//!
//! A fixed-period countdown driven by elapsed milliseconds. The host feeds
//! real elapsed time with [`Countdown::feed`] and drains due events with
//! [`Countdown::next_event`]. Each whole period yields one
//! [`CountdownEvent::Tick`] carrying the seconds left; the final period
//! yields [`CountdownEvent::Expired`] exactly once instead of a tick.

use crate::types::{ROUND_SECONDS, TICK_MS};

/// Event emitted by the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    /// One period elapsed; the payload is the number of periods left.
    Tick(u32),
    /// The last period elapsed. Emitted once.
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Idle,
    Armed,
    Expired,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    period_ms: u32,
    total_periods: u32,
    elapsed_periods: u32,
    pending_ms: u64,
    state: TimerState,
}

impl Countdown {
    pub fn new(total_periods: u32, period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            total_periods,
            elapsed_periods: 0,
            pending_ms: 0,
            state: TimerState::Idle,
        }
    }

    /// Start (or restart) the countdown from the full duration.
    pub fn arm(&mut self) {
        self.elapsed_periods = 0;
        self.pending_ms = 0;
        self.state = TimerState::Armed;
    }

    /// Stop the countdown. No further events are produced until re-armed.
    ///
    /// Safe to call any number of times.
    pub fn cancel(&mut self) {
        if self.state == TimerState::Armed || self.state == TimerState::Idle {
            self.state = TimerState::Cancelled;
        }
        self.pending_ms = 0;
    }

    pub fn is_armed(&self) -> bool {
        self.state == TimerState::Armed
    }

    /// Periods not yet elapsed.
    pub fn remaining_periods(&self) -> u32 {
        self.total_periods.saturating_sub(self.elapsed_periods)
    }

    /// Milliseconds until the next event, if armed.
    pub fn until_next_ms(&self) -> Option<u64> {
        if !self.is_armed() {
            return None;
        }
        Some((self.period_ms as u64).saturating_sub(self.pending_ms))
    }

    /// Accumulate elapsed time. Ignored unless armed.
    pub fn feed(&mut self, elapsed_ms: u32) {
        if self.is_armed() {
            self.pending_ms = self.pending_ms.saturating_add(elapsed_ms as u64);
        }
    }

    /// Pop the next due event, if any.
    pub fn next_event(&mut self) -> Option<CountdownEvent> {
        if !self.is_armed() || self.pending_ms < self.period_ms as u64 {
            return None;
        }

        self.pending_ms -= self.period_ms as u64;
        self.elapsed_periods += 1;

        let remaining = self.remaining_periods();
        if remaining == 0 {
            self.state = TimerState::Expired;
            self.pending_ms = 0;
            Some(CountdownEvent::Expired)
        } else {
            Some(CountdownEvent::Tick(remaining))
        }
    }
}

impl Default for Countdown {
    /// One round: 60 periods of one second.
    fn default() -> Self {
        Self::new(ROUND_SECONDS, TICK_MS)
    }
}
