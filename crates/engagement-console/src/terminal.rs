//! Text rendering of engine events

use engagement_logic::{
    Conclusion, EngineError, MatchConfig, MatchState, Move, Presenter, RoundResult,
};
use serde_json::json;
use std::io::Write;

/// Writes prose (or JSON lines) to any writer
pub struct Terminal<W: Write> {
    out: W,
    json: bool,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            log::error!("terminal write failed: {}", e);
        }
    }

    pub fn banner(&mut self, config: &MatchConfig) {
        if self.json {
            let event = json!({
                "event": "start",
                "config": config,
                "winning_score": config.winning_score(),
            });
            self.line(&event.to_string());
            return;
        }
        let moves: Vec<_> = Move::ALL
            .iter()
            .map(|m| format!("{} ({})", m, &m.name()[..1].to_lowercase()))
            .collect();
        self.line(&format!(
            "Best of {}: first to {} wins the engagement.",
            config.total_rounds(),
            config.winning_score()
        ));
        self.line(&format!("Deploy {}, or type reset / quit.", moves.join(", ")));
    }

    pub fn prompt(&mut self) {
        if self.json {
            return;
        }
        let written = write!(self.out, "> ").and_then(|_| self.out.flush());
        if let Err(e) = written {
            log::error!("terminal write failed: {}", e);
        }
    }

    fn scoreboard(&mut self, state: &MatchState) {
        self.line(&format!(
            "  Pilot {} - {} Enemy   (engagement {})",
            state.player_score, state.opponent_score, state.round
        ));
    }
}

impl<W: Write> Presenter for Terminal<W> {
    fn round_played(&mut self, result: &RoundResult) {
        if self.json {
            self.line(&json!({ "event": "round", "result": result }).to_string());
            return;
        }
        self.line(&format!("Round {}: {}", result.round, result.outcome.message));
        self.line(&format!(
            "  You: {} | Enemy: {}",
            result.player_move, result.opponent_move
        ));
        self.scoreboard(&result.state);
    }

    fn match_concluded(&mut self, conclusion: &Conclusion) {
        if self.json {
            self.line(&json!({ "event": "concluded", "conclusion": conclusion }).to_string());
            return;
        }
        self.line(&conclusion.message);
        self.line("Type reset for a new engagement or quit to leave.");
    }

    fn match_reset(&mut self, state: &MatchState) {
        if self.json {
            self.line(&json!({ "event": "reset", "state": state }).to_string());
            return;
        }
        self.line("Engagement reset.");
        self.scoreboard(state);
    }

    fn play_rejected(&mut self, error: &EngineError) {
        if self.json {
            self.line(&json!({ "event": "rejected", "error": error.to_string() }).to_string());
            return;
        }
        self.line(&format!("! {}", error));
    }
}
