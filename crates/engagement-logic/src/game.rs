//! Match execution engine

use serde::{Deserialize, Serialize};
use crate::config::MatchConfig;
use crate::error::EngineError;
use crate::moves::Move;
use crate::outcome::{Outcome, OutcomeKind};
use crate::random::Entropy;
use crate::resolve;

/// Whether rounds are still accepted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    #[default]
    InProgress,
    Concluded,
}

/// Snapshot of the scoreboard
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub player_score: u8,
    pub opponent_score: u8,
    pub round: u32,
    pub status: MatchStatus,
}

/// Result of a single round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    pub player_move: Move,
    pub opponent_move: Move,
    pub outcome: Outcome,
    pub state: MatchState,
}

/// The side that took the match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

/// Final word on a decided match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conclusion {
    pub winner: Side,
    pub player_score: u8,
    pub opponent_score: u8,
    pub rounds_played: u32,
    pub message: String,
}

impl Conclusion {
    fn from_state(state: &MatchState) -> Self {
        let (winner, message) = if state.player_score > state.opponent_score {
            (
                Side::Player,
                format!(
                    "Mission accomplished! You won the engagement {}-{}.",
                    state.player_score, state.opponent_score
                ),
            )
        } else {
            (
                Side::Opponent,
                format!(
                    "Mission failed. The enemy won the engagement {}-{}.",
                    state.opponent_score, state.player_score
                ),
            )
        };

        Self {
            winner,
            player_score: state.player_score,
            opponent_score: state.opponent_score,
            rounds_played: state.round,
            message,
        }
    }
}

/// Owns one match: configuration, scoreboard and the opponent's entropy
///
/// All mutation goes through `play_round` and `reset`. Callers only ever
/// see copies of the state.
#[derive(Clone, Debug)]
pub struct MatchEngine<E: Entropy> {
    config: MatchConfig,
    state: MatchState,
    entropy: E,
}

impl<E: Entropy> MatchEngine<E> {
    pub fn new(config: MatchConfig, entropy: E) -> Self {
        Self {
            config,
            state: MatchState::default(),
            entropy,
        }
    }

    pub fn config(&self) -> MatchConfig {
        self.config
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_concluded(&self) -> bool {
        self.state.status == MatchStatus::Concluded
    }

    /// Draw the opponent's move uniformly from the three moves
    pub fn choose_opponent_move(&mut self) -> Move {
        let index = self.entropy.next_below(Move::ALL.len() as u32);
        Move::ALL[index as usize % Move::ALL.len()]
    }

    /// Play one round against a freshly drawn opponent move
    ///
    /// Rejected without touching state once the match is concluded.
    pub fn play_round(&mut self, player_move: Move) -> Result<RoundResult, EngineError> {
        if self.is_concluded() {
            log::warn!(
                "rejected {} after round {}: match concluded",
                player_move,
                self.state.round,
            );
            return Err(EngineError::MatchAlreadyConcluded);
        }

        let opponent_move = self.choose_opponent_move();
        let outcome = resolve(player_move, opponent_move);

        self.state.round += 1;
        match outcome.kind {
            OutcomeKind::Win => self.state.player_score += 1,
            OutcomeKind::Lose => self.state.opponent_score += 1,
            OutcomeKind::Draw => {}
        }

        let target = self.config.winning_score();
        if self.state.player_score >= target || self.state.opponent_score >= target {
            self.state.status = MatchStatus::Concluded;
        }

        log::debug!(
            "round {}: {} vs {} -> {:?} ({}-{})",
            self.state.round,
            player_move,
            opponent_move,
            outcome.kind,
            self.state.player_score,
            self.state.opponent_score,
        );
        if self.is_concluded() {
            log::info!(
                "match concluded after {} rounds ({}-{})",
                self.state.round,
                self.state.player_score,
                self.state.opponent_score,
            );
        }

        Ok(RoundResult {
            round: self.state.round,
            player_move,
            opponent_move,
            outcome,
            state: self.state,
        })
    }

    /// Parse a move name, then play it. Parsing fails before any state change.
    pub fn play_named(&mut self, name: &str) -> Result<RoundResult, EngineError> {
        let player_move = name.parse::<Move>()?;
        self.play_round(player_move)
    }

    /// Present only once the match is concluded
    pub fn conclusion(&self) -> Option<Conclusion> {
        self.is_concluded().then(|| Conclusion::from_state(&self.state))
    }

    /// Back to round zero, scores zero, in progress. Idempotent.
    pub fn reset(&mut self) {
        self.state = MatchState::default();
        log::info!("match reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{Scripted, SeededRng};

    fn scripted(config: MatchConfig, moves: &[Move]) -> MatchEngine<Scripted> {
        MatchEngine::new(config, Scripted::new(moves.iter().copied()))
    }

    fn fresh() -> MatchState {
        MatchState::default()
    }

    #[test]
    fn test_initial_state() {
        let engine = MatchEngine::new(MatchConfig::default(), SeededRng::new(42));
        assert_eq!(engine.state(), fresh());
        assert_eq!(engine.state().status, MatchStatus::InProgress);
        assert!(!engine.is_concluded());
        assert!(engine.conclusion().is_none());
    }

    #[test]
    fn test_three_straight_wins_conclude() {
        let mut engine = scripted(MatchConfig::default(), &[Move::Interceptor]);

        for round in 1..=3u8 {
            let result = engine.play_round(Move::Drone).unwrap();
            assert_eq!(result.round, round as u32);
            assert_eq!(result.opponent_move, Move::Interceptor);
            assert_eq!(result.outcome.kind, OutcomeKind::Win);
            assert_eq!(result.state.player_score, round);
        }

        let state = engine.state();
        assert_eq!(state.status, MatchStatus::Concluded);
        assert_eq!(state.player_score, 3);
        assert_eq!(state.opponent_score, 0);
        assert_eq!(state.round, 3);
    }

    #[test]
    fn test_draw_changes_only_round() {
        let mut engine = scripted(MatchConfig::default(), &[Move::Jammer]);
        let result = engine.play_round(Move::Jammer).unwrap();

        assert_eq!(result.outcome.kind, OutcomeKind::Draw);
        assert_eq!(result.outcome.message, "Stand-off — both deployed Jammer.");
        assert_eq!(result.state.player_score, 0);
        assert_eq!(result.state.opponent_score, 0);
        assert_eq!(result.state.round, 1);
        assert_eq!(result.state.status, MatchStatus::InProgress);
    }

    #[test]
    fn test_play_after_conclusion_rejected() {
        let mut engine = scripted(MatchConfig::default(), &[Move::Drone]);
        // Jammer beats Drone every time
        for _ in 0..3 {
            engine.play_round(Move::Jammer).unwrap();
        }
        assert!(engine.is_concluded());
        let before = engine.state();

        assert_eq!(engine.play_round(Move::Jammer), Err(EngineError::MatchAlreadyConcluded));
        assert_eq!(engine.play_named("drone"), Err(EngineError::MatchAlreadyConcluded));
        assert_eq!(engine.state(), before);
    }

    #[test]
    fn test_opponent_win_conclusion() {
        let mut engine = scripted(MatchConfig::default(), &[Move::Jammer]);
        for _ in 0..3 {
            let result = engine.play_round(Move::Drone).unwrap();
            assert_eq!(result.outcome.kind, OutcomeKind::Lose);
        }

        let conclusion = engine.conclusion().unwrap();
        assert_eq!(conclusion.winner, Side::Opponent);
        assert_eq!(conclusion.opponent_score, 3);
        assert_eq!(conclusion.rounds_played, 3);
        assert_eq!(conclusion.message, "Mission failed. The enemy won the engagement 3-0.");
    }

    #[test]
    fn test_player_win_conclusion_message() {
        // win, lose, draw, win, win
        let mut engine = scripted(
            MatchConfig::default(),
            &[Move::Interceptor, Move::Jammer, Move::Drone, Move::Interceptor, Move::Interceptor],
        );
        for _ in 0..5 {
            engine.play_round(Move::Drone).unwrap();
        }

        let conclusion = engine.conclusion().unwrap();
        assert_eq!(conclusion.winner, Side::Player);
        assert_eq!(conclusion.rounds_played, 5);
        assert_eq!(conclusion.message, "Mission accomplished! You won the engagement 3-1.");
    }

    #[test]
    fn test_invalid_name_leaves_state() {
        let mut engine = scripted(MatchConfig::default(), &[Move::Drone]);
        engine.play_round(Move::Drone).unwrap();
        let before = engine.state();

        assert_eq!(
            engine.play_named("Laser"),
            Err(EngineError::InvalidMove("Laser".to_string()))
        );
        assert_eq!(engine.state(), before);

        let result = engine.play_named("jammer").unwrap();
        assert_eq!(result.outcome.kind, OutcomeKind::Win);
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let mut engine = scripted(MatchConfig::default(), &[Move::Interceptor, Move::Jammer]);
        for _ in 0..4 {
            let _ = engine.play_round(Move::Drone);
        }
        assert_ne!(engine.state(), fresh());

        engine.reset();
        assert_eq!(engine.state(), fresh());
        assert!(engine.conclusion().is_none());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut engine = MatchEngine::new(MatchConfig::default(), SeededRng::new(3));
        engine.reset();
        let once = engine.state();
        engine.reset();
        engine.reset();
        assert_eq!(engine.state(), once);
        assert_eq!(once, fresh());
    }

    #[test]
    fn test_reset_after_conclusion_reopens_match() {
        let mut engine = scripted(MatchConfig::default(), &[Move::Interceptor]);
        for _ in 0..3 {
            engine.play_round(Move::Drone).unwrap();
        }
        assert!(engine.is_concluded());

        engine.reset();
        let result = engine.play_round(Move::Drone).unwrap();
        assert_eq!(result.round, 1);
        assert_eq!(result.state.player_score, 1);
    }

    #[test]
    fn test_best_of_one() {
        let mut engine = scripted(MatchConfig::new(1).unwrap(), &[Move::Drone, Move::Jammer]);
        // draw does not decide it
        assert_eq!(engine.play_round(Move::Drone).unwrap().state.status, MatchStatus::InProgress);
        let decided = engine.play_round(Move::Interceptor).unwrap();
        assert_eq!(decided.state.status, MatchStatus::Concluded);
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut a = MatchEngine::new(MatchConfig::default(), SeededRng::new(99));
        let mut b = MatchEngine::new(MatchConfig::default(), SeededRng::new(99));

        while !a.is_concluded() {
            let ra = a.play_round(Move::Jammer).unwrap();
            let rb = b.play_round(Move::Jammer).unwrap();
            assert_eq!(ra, rb);
        }
        assert!(b.is_concluded());
    }

    #[test]
    fn test_long_run_of_draws_keeps_counting() {
        let mut engine = scripted(MatchConfig::default(), &[Move::Drone]);

        for i in 0..300u32 {
            let result = engine.play_round(Move::Drone).unwrap();
            assert_eq!(result.outcome.kind, OutcomeKind::Draw);
            assert_eq!(result.round, i + 1);
            assert_eq!(result.state.round, i + 1);
        }
        assert_eq!(engine.state().player_score, 0);
        assert_eq!(engine.state().opponent_score, 0);
        assert!(!engine.is_concluded());
    }

    #[test]
    fn test_choose_opponent_move_covers_all() {
        let mut engine = MatchEngine::new(MatchConfig::default(), SeededRng::new(5));
        let mut seen = [false; 3];
        for _ in 0..100 {
            seen[engine.choose_opponent_move().index() as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
        // drawing does not touch the scoreboard
        assert_eq!(engine.state(), fresh());
    }
}
