//! Turn-selection AI.
//!
//! Strategies only choose an `Action`; applying it is the rules engine's
//! job. Two strategies exist:
//!
//! - `RandomStrategy`: first applicable step of a fixed fallback chain,
//!   random within each step
//! - `WiseStrategy`: greedy desirability over cards within one turn's
//!   reach, falling back to random
//!
//! ## Experience gate
//!
//! An AI seat has an experience `e` in [0, 1]. Each turn draws a uniform
//! `r`; the wise strategy plays when `e > r`, otherwise the random one.
//! So `e = 0` is always random, `e = 1` always wise, and `e = 0.5` flips
//! a coin each turn.

pub mod pursuit;
pub mod random;
pub mod wise;

pub use pursuit::{pursuit_chips, turns_until_affordable, Need};
pub use random::RandomStrategy;
pub use wise::{rank_candidates, Candidate, WiseStrategy};

use crate::core::{Action, GameRng, GameState};
use crate::error::Result;
use crate::rules::apply_action;

/// Chooses the current player's action.
pub trait TurnStrategy: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Pick an action for `state.current_player`.
    ///
    /// Errors mean no move could be found; the game cannot continue.
    fn choose(&self, state: &GameState, rng: &mut GameRng) -> Result<Action>;
}

/// Pick the strategy for this turn through the experience gate.
pub fn gate(experience: f64, rng: &mut GameRng) -> &'static dyn TurnStrategy {
    static WISE: WiseStrategy = WiseStrategy::new();
    static RANDOM: RandomStrategy = RandomStrategy;
    if experience > rng.gen_unit() {
        &WISE
    } else {
        &RANDOM
    }
}

/// Choose an action for the current player with the given experience.
pub fn choose_ai_action(state: &GameState, experience: f64, rng: &mut GameRng) -> Result<Action> {
    let strategy = gate(experience, rng);
    let action = strategy.choose(state, rng)?;
    tracing::trace!(strategy = strategy.name(), action = %action, "ai chose");
    Ok(action)
}

/// Play the current player's turn and return the next state.
pub fn choose_ai_turn(state: &GameState, experience: f64, rng: &mut GameRng) -> Result<GameState> {
    let action = choose_ai_action(state, experience, rng)?;
    apply_action(state, &action)
}
