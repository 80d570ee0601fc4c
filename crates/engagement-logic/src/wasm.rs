//! WASM bindings for the browser page

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{describe_move, resolve, MatchConfig, MatchEngine, Move, SeededRng};

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn parse_move(name: &str) -> Result<Move, JsError> {
    name.parse::<Move>().map_err(|e| JsError::new(&e.to_string()))
}

/// One match, owned by the page
#[wasm_bindgen]
pub struct Engagement {
    engine: MatchEngine<SeededRng>,
}

#[wasm_bindgen]
impl Engagement {
    /// New match seeded from `Math.random`
    #[wasm_bindgen(constructor)]
    pub fn new(total_rounds: f64) -> Result<Engagement, JsError> {
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        Self::with_seed(total_rounds, seed)
    }

    /// Reproducible match for replays and tests
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(total_rounds: f64, seed: u64) -> Result<Engagement, JsError> {
        let config = MatchConfig::from_number(total_rounds)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { engine: MatchEngine::new(config, SeededRng::new(seed)) })
    }

    /// Play a round; returns the serialized RoundResult
    pub fn play(&mut self, player_move: &str) -> Result<JsValue, JsError> {
        let result = self
            .engine
            .play_named(player_move)
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&result)
    }

    /// Reset and return the fresh state
    pub fn reset(&mut self) -> Result<JsValue, JsError> {
        self.engine.reset();
        to_js(&self.engine.state())
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.engine.state())
    }

    #[wasm_bindgen(js_name = isConcluded)]
    pub fn is_concluded(&self) -> bool {
        self.engine.is_concluded()
    }

    /// Serialized Conclusion, or `null` while the match is running
    pub fn conclusion(&self) -> Result<JsValue, JsError> {
        match self.engine.conclusion() {
            Some(c) => to_js(&c),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = winningScore)]
    pub fn winning_score(&self) -> u8 {
        self.engine.config().winning_score()
    }
}

/// Resolve two moves without touching any match
#[wasm_bindgen]
pub fn resolve_moves(player: &str, opponent: &str) -> Result<JsValue, JsError> {
    let outcome = resolve(parse_move(player)?, parse_move(opponent)?);
    to_js(&outcome)
}

#[derive(serde::Serialize)]
struct MoveInfo {
    id: String,
    beats: String,
    description: String,
}

/// Get all selectable moves for building the button row
#[wasm_bindgen]
pub fn get_move_types() -> Result<JsValue, JsError> {
    let types: Vec<MoveInfo> = Move::ALL
        .iter()
        .map(|m| MoveInfo {
            id: m.name().to_string(),
            beats: m.beats().name().to_string(),
            description: describe_move(*m),
        })
        .collect();

    to_js(&types)
}
