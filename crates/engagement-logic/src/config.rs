//! Match configuration

use serde::{Deserialize, Serialize};
use crate::error::EngineError;

/// Best-of-five unless configured otherwise
pub const DEFAULT_TOTAL_ROUNDS: u8 = 5;

/// Length of a match
///
/// Only constructible through `new`, which rejects zero and even totals.
/// Deserialization runs the same check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatchConfig")]
pub struct MatchConfig {
    total_rounds: u8,
}

#[derive(Deserialize)]
struct RawMatchConfig {
    total_rounds: u8,
}

impl TryFrom<RawMatchConfig> for MatchConfig {
    type Error = EngineError;

    fn try_from(raw: RawMatchConfig) -> Result<Self, Self::Error> {
        MatchConfig::new(raw.total_rounds)
    }
}

impl MatchConfig {
    pub fn new(total_rounds: u8) -> Result<Self, EngineError> {
        if total_rounds == 0 || total_rounds % 2 == 0 {
            return Err(EngineError::InvalidConfig { total_rounds: total_rounds.to_string() });
        }
        Ok(Self { total_rounds })
    }

    /// Validate a total that arrives as a plain number (JavaScript, JSON)
    ///
    /// Fractions, negatives, non-finite values and anything above `u8::MAX`
    /// are rejected rather than rounded or truncated.
    pub fn from_number(total_rounds: f64) -> Result<Self, EngineError> {
        let whole = total_rounds.is_finite() && total_rounds.fract() == 0.0;
        if !whole || total_rounds < 0.0 || total_rounds > u8::MAX as f64 {
            return Err(EngineError::InvalidConfig { total_rounds: total_rounds.to_string() });
        }
        Self::new(total_rounds as u8)
    }

    pub fn total_rounds(&self) -> u8 {
        self.total_rounds
    }

    /// Score either side needs to take the match: floor(total / 2) + 1
    pub fn winning_score(&self) -> u8 {
        self.total_rounds / 2 + 1
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { total_rounds: DEFAULT_TOTAL_ROUNDS }
    }
}
