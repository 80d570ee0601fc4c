//! Round outcomes and their messages

use serde::{Deserialize, Serialize};
use crate::moves::Move;

/// Result kind, always from the pilot's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeKind {
    Win,
    Lose,
    Draw,
}

/// Resolved round outcome with its display message
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub message: String,
}

impl Outcome {
    pub fn win(player: Move) -> Self {
        Self { kind: OutcomeKind::Win, message: win_message(player).to_string() }
    }

    pub fn lose(player: Move) -> Self {
        Self { kind: OutcomeKind::Lose, message: lose_message(player).to_string() }
    }

    pub fn draw(shared: Move) -> Self {
        Self {
            kind: OutcomeKind::Draw,
            message: format!("Stand-off — both deployed {}.", shared),
        }
    }
}

fn win_message(player: Move) -> &'static str {
    match player {
        Move::Drone => "Your Drone evaded the Interceptor and completed the mission!",
        Move::Jammer => "Your Jammer disrupted enemy Drone comms — target neutralized!",
        Move::Interceptor => "Your Interceptor destroyed the enemy Jammer — signal restored!",
    }
}

fn lose_message(player: Move) -> &'static str {
    match player {
        Move::Drone => "Your Drone was jammed — communications lost!",
        Move::Jammer => "Enemy Interceptor destroyed your Jammer!",
        Move::Interceptor => "Enemy Drone outmaneuvered your Interceptor!",
    }
}
