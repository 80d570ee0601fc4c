//! Engine error kinds

/// Errors returned by engine operations.
///
/// Every failing call leaves the match state untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// A move value outside Drone/Jammer/Interceptor.
    InvalidMove(String),
    /// `play_round` was called after the match was decided.
    MatchAlreadyConcluded,
    /// Total rounds must be a positive odd number.
    InvalidConfig { total_rounds: String },
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::InvalidMove(value) =>
                write!(f, "invalid move {:?} (expected Drone, Jammer or Interceptor)", value),
            EngineError::MatchAlreadyConcluded =>
                write!(f, "match already concluded; reset to start a new one"),
            EngineError::InvalidConfig { total_rounds } => write!(
                f,
                "total rounds must be a positive odd number up to 255, got {}",
                total_rounds
            ),
        }
    }
}

impl std::error::Error for EngineError {}
