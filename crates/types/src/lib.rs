//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they can be used
//! by the round logic, the terminal renderer, and the haptics adapter alike.
//!
//! # Round Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ROUND_SECONDS` | 60 | Total length of one round |
//! | `TICK_MS` | 1000 | Countdown period |
//! | `PANIC_THRESHOLD_SECONDS` | 10 | Ticks at or below this raise a panic buzz |
//!
//! # Examples
//!
//! ```
//! use tui_charades_types::{format_clock, Buzz, RoundAction, WORDS};
//!
//! assert_eq!(WORDS.len(), 21);
//! assert_eq!(Buzz::Panic.pattern(), &[0, 200]);
//! assert_eq!(RoundAction::from_str("correct"), Some(RoundAction::MarkCorrect));
//! assert_eq!(format_clock(75), "01:15");
//! ```

/// Total round duration in seconds.
pub const ROUND_SECONDS: u32 = 60;

/// Countdown tick period in milliseconds (one tick per second).
pub const TICK_MS: u32 = 1000;

/// Ticks reporting this many seconds or fewer request a panic buzz.
pub const PANIC_THRESHOLD_SECONDS: u32 = 10;

/// Number of words in [`WORDS`].
pub const WORD_COUNT: usize = 21;

/// The fixed word list. Order is irrelevant: every refill is shuffled.
pub const WORDS: [&str; WORD_COUNT] = [
    "queen",
    "hospital",
    "basketball",
    "cat",
    "change",
    "snail",
    "soup",
    "calendar",
    "sad",
    "desk",
    "guitar",
    "home",
    "railway",
    "zebra",
    "jelly",
    "car",
    "crow",
    "trade",
    "bag",
    "roll",
    "bubble",
];

/// Returns true if `word` belongs to the fixed word list.
pub fn is_known_word(word: &str) -> bool {
    WORDS.contains(&word)
}

/// Format a second count as `MM:SS`.
///
/// ```
/// use tui_charades_types::format_clock;
///
/// assert_eq!(format_clock(60), "01:00");
/// assert_eq!(format_clock(9), "00:09");
/// assert_eq!(format_clock(0), "00:00");
/// ```
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Named vibration profiles requested by the round.
///
/// Each profile maps to a sequence of alternating pause/buzz durations in
/// milliseconds, starting with a pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Buzz {
    /// No vibration.
    #[default]
    None,
    /// A correct answer was marked.
    Correct,
    /// A tick inside the final seconds of the round.
    Panic,
    /// The round timer ran out.
    GameOver,
}

const NO_BUZZ_PATTERN: [u64; 1] = [0];
const CORRECT_BUZZ_PATTERN: [u64; 6] = [100, 100, 100, 100, 100, 100];
const PANIC_BUZZ_PATTERN: [u64; 2] = [0, 200];
const GAME_OVER_BUZZ_PATTERN: [u64; 2] = [0, 2000];

impl Buzz {
    /// Millisecond pattern for this buzz: even indices are pauses, odd
    /// indices are vibration durations.
    ///
    /// ```
    /// use tui_charades_types::Buzz;
    ///
    /// assert_eq!(Buzz::None.pattern(), &[0]);
    /// assert_eq!(Buzz::GameOver.pattern(), &[0, 2000]);
    /// ```
    pub fn pattern(&self) -> &'static [u64] {
        match self {
            Buzz::None => &NO_BUZZ_PATTERN,
            Buzz::Correct => &CORRECT_BUZZ_PATTERN,
            Buzz::Panic => &PANIC_BUZZ_PATTERN,
            Buzz::GameOver => &GAME_OVER_BUZZ_PATTERN,
        }
    }

    /// Total playback time of the pattern in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.pattern().iter().sum()
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Buzz::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Buzz::None => "none",
            Buzz::Correct => "correct",
            Buzz::Panic => "panic",
            Buzz::GameOver => "gameOver",
        }
    }
}

/// Round lifecycle: `NotStarted -> Running -> Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundPhase {
    #[default]
    NotStarted,
    Running,
    Finished,
}

impl RoundPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundPhase::NotStarted => "notStarted",
            RoundPhase::Running => "running",
            RoundPhase::Finished => "finished",
        }
    }
}

/// Player intents forwarded into the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAction {
    /// The team guessed the word (+1).
    MarkCorrect,
    /// The word was passed over (-1).
    MarkSkipped,
    /// Begin a new round from the score screen.
    Restart,
}

impl RoundAction {
    /// Parse action from string (case-insensitive)
    ///
    /// ```
    /// use tui_charades_types::RoundAction;
    ///
    /// assert_eq!(RoundAction::from_str("markCorrect"), Some(RoundAction::MarkCorrect));
    /// assert_eq!(RoundAction::from_str("skip"), Some(RoundAction::MarkSkipped));
    /// assert_eq!(RoundAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "markcorrect" | "correct" => Some(RoundAction::MarkCorrect),
            "markskipped" | "skip" | "skipped" => Some(RoundAction::MarkSkipped),
            "restart" => Some(RoundAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundAction::MarkCorrect => "markCorrect",
            RoundAction::MarkSkipped => "markSkipped",
            RoundAction::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_timing_defaults() {
        assert_eq!(ROUND_SECONDS, 60);
        assert_eq!(TICK_MS, 1000);
        assert_eq!(PANIC_THRESHOLD_SECONDS, 10);
    }

    #[test]
    fn word_list_has_no_duplicates() {
        let mut sorted = WORDS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), WORD_COUNT);
        assert!(WORDS.iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn buzz_patterns_match_haptic_contract() {
        assert_eq!(Buzz::None.pattern(), &[0]);
        assert_eq!(Buzz::Correct.pattern(), &[100, 100, 100, 100, 100, 100]);
        assert_eq!(Buzz::Panic.pattern(), &[0, 200]);
        assert_eq!(Buzz::GameOver.pattern(), &[0, 2000]);
        assert_eq!(Buzz::Correct.duration_ms(), 600);
        assert_eq!(Buzz::default(), Buzz::None);
    }

    #[test]
    fn clock_formatting_pads_minutes_and_seconds() {
        assert_eq!(format_clock(ROUND_SECONDS), "01:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(600), "10:00");
    }

    #[test]
    fn action_round_trips_through_as_str() {
        for action in [
            RoundAction::MarkCorrect,
            RoundAction::MarkSkipped,
            RoundAction::Restart,
        ] {
            assert_eq!(RoundAction::from_str(action.as_str()), Some(action));
        }
    }
}
