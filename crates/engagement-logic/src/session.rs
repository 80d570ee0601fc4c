//! Presentation contract
//!
//! A `Session` routes user commands to the engine and reports every result
//! to a `Presenter`. The engine itself never talks to the presentation layer.

use crate::error::EngineError;
use crate::game::{Conclusion, MatchEngine, MatchState, RoundResult};
use crate::moves::Move;
use crate::random::Entropy;

/// Receives everything the player should see
pub trait Presenter {
    fn round_played(&mut self, result: &RoundResult);
    fn match_concluded(&mut self, conclusion: &Conclusion);
    fn match_reset(&mut self, state: &MatchState);
    fn play_rejected(&mut self, error: &EngineError);
}

/// A user action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Move),
    Reset,
}

/// `reset` or anything `Move` parses
impl core::str::FromStr for Command {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("reset") {
            Ok(Command::Reset)
        } else {
            s.parse().map(Command::Play)
        }
    }
}

/// One engine bound to one presenter
pub struct Session<E: Entropy, P: Presenter> {
    engine: MatchEngine<E>,
    presenter: P,
}

impl<E: Entropy, P: Presenter> Session<E, P> {
    pub fn new(engine: MatchEngine<E>, presenter: P) -> Self {
        Self { engine, presenter }
    }

    pub fn engine(&self) -> &MatchEngine<E> {
        &self.engine
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Run a command to completion, reporting to the presenter
    ///
    /// A concluding round is followed by `match_concluded`. Rejections are
    /// reported and returned.
    pub fn dispatch(&mut self, command: Command) -> Result<(), EngineError> {
        match command {
            Command::Play(m) => match self.engine.play_round(m) {
                Ok(result) => {
                    self.presenter.round_played(&result);
                    if let Some(conclusion) = self.engine.conclusion() {
                        self.presenter.match_concluded(&conclusion);
                    }
                    Ok(())
                }
                Err(e) => {
                    self.presenter.play_rejected(&e);
                    Err(e)
                }
            },
            Command::Reset => {
                self.engine.reset();
                self.presenter.match_reset(&self.engine.state());
                Ok(())
            }
        }
    }

    /// Parse raw input and dispatch it. Unparseable input is reported too.
    pub fn dispatch_input(&mut self, input: &str) -> Result<(), EngineError> {
        match input.parse::<Command>() {
            Ok(command) => self.dispatch(command),
            Err(e) => {
                self.presenter.play_rejected(&e);
                Err(e)
            }
        }
    }
}
