//! Engagement Logic for Drone/Jammer/Interceptor
//!
//! Core rules for a best-of-N engagement between a pilot and a random
//! opponent. This crate is compiled to:
//! - Native (for the terminal front end)
//! - WASM (for the browser page)

mod config;
mod error;
mod game;
mod moves;
mod outcome;
mod random;
mod session;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{MatchConfig, DEFAULT_TOTAL_ROUNDS};
pub use error::EngineError;
pub use game::{Conclusion, MatchEngine, MatchState, MatchStatus, RoundResult, Side};
pub use moves::{describe_move, Move};
pub use outcome::{Outcome, OutcomeKind};
pub use random::{Entropy, Scripted, SeededRng};
pub use session::{Command, Presenter, Session};

/// Resolve one round from the pilot's point of view
pub fn resolve(player: Move, opponent: Move) -> Outcome {
    if player == opponent {
        Outcome::draw(player)
    } else if player.beats() == opponent {
        Outcome::win(player)
    } else {
        Outcome::lose(player)
    }
}
