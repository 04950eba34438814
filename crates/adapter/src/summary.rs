use anyhow::Result;
use serde::Serialize;

use crate::core::RoundState;

/// Final tally of a round, printed on exit when requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    pub score: i32,
    pub correct: u32,
    pub skipped: u32,
    pub words_seen: u32,
}

impl RoundSummary {
    pub fn from_round(round: &RoundState) -> Self {
        Self {
            score: round.score(),
            correct: round.correct(),
            skipped: round.skipped(),
            words_seen: round.words_seen(),
        }
    }

    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
