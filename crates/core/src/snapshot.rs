use crate::types::{format_clock, Buzz, RoundPhase, ROUND_SECONDS};

/// Plain copy of the round for rendering and observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundSnapshot {
    pub word: &'static str,
    pub score: i32,
    pub remaining_seconds: u32,
    pub phase: RoundPhase,
    pub finished: bool,
    pub pending_buzz: Buzz,
    pub correct: u32,
    pub skipped: u32,
    pub words_seen: u32,
}

impl RoundSnapshot {
    /// Time left as `MM:SS`.
    pub fn clock(&self) -> String {
        format_clock(self.remaining_seconds)
    }
}

impl Default for RoundSnapshot {
    fn default() -> Self {
        Self {
            word: "",
            score: 0,
            remaining_seconds: ROUND_SECONDS,
            phase: RoundPhase::NotStarted,
            finished: false,
            pending_buzz: Buzz::None,
            correct: 0,
            skipped: 0,
            words_seen: 0,
        }
    }
}
