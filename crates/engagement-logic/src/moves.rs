//! Move definitions and the beats-relation

use serde::{Deserialize, Serialize};
use crate::error::EngineError;

/// A move a side can deploy in one engagement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Beats Interceptor.
    Drone,
    /// Beats Drone.
    Jammer,
    /// Beats Jammer.
    Interceptor,
}

impl Move {
    /// All moves, in index order
    pub const ALL: [Move; 3] = [Move::Drone, Move::Jammer, Move::Interceptor];

    /// The move this move defeats
    pub const fn beats(self) -> Move {
        match self {
            Move::Drone => Move::Interceptor,
            Move::Jammer => Move::Drone,
            Move::Interceptor => Move::Jammer,
        }
    }

    /// The move that defeats this move
    pub const fn beaten_by(self) -> Move {
        match self {
            Move::Drone => Move::Jammer,
            Move::Jammer => Move::Interceptor,
            Move::Interceptor => Move::Drone,
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            Move::Drone => 0,
            Move::Jammer => 1,
            Move::Interceptor => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Move::Drone => "Drone",
            Move::Jammer => "Jammer",
            Move::Interceptor => "Interceptor",
        }
    }
}

impl core::fmt::Display for Move {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Move {
    type Error = EngineError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Move::ALL
            .get(index as usize)
            .copied()
            .ok_or_else(|| EngineError::InvalidMove(index.to_string()))
    }
}

/// Accepts the full name or its first letter, case-insensitive
impl core::str::FromStr for Move {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Move::ALL
            .into_iter()
            .find(|m| {
                trimmed.eq_ignore_ascii_case(m.name())
                    || trimmed.eq_ignore_ascii_case(&m.name()[..1])
            })
            .ok_or_else(|| EngineError::InvalidMove(s.to_string()))
    }
}

/// Get a human-readable description of a move
pub fn describe_move(m: Move) -> String {
    let role = match m {
        Move::Drone => "Unmanned recon craft. Slips past interceptors.",
        Move::Jammer => "Signal disruptor. Cuts drone comms.",
        Move::Interceptor => "Fast strike craft. Hunts down jammers.",
    };
    format!("{} Beats {}, loses to {}.", role, m.beats(), m.beaten_by())
}
