//! # rust-gems
//!
//! Engine for a gem-trading card game: players collect colored tokens,
//! buy development cards that grant permanent discounts and prestige
//! points, attract patrons, and race to 15 points.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every action is a function from one
//!    `GameState` to the next. The previous state is never touched, so
//!    snapshots, undo and replay come for free.
//!
//! 2. **Validation Is Separate**: The engine applies actions and fails
//!    only on structural impossibilities. Business rules (turn order,
//!    hand limit, chip patterns) live in `rules::validation`.
//!
//! 3. **Deterministic Randomness**: All shuffles and AI choices draw from
//!    an explicit `GameRng`, so a seed reproduces a whole simulation.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Card lists, decks and the action log
//!   use `im-rs`, so cloning a state is cheap.
//!
//! - **AI Outside the Engine**: Strategies choose an `Action`; the engine
//!   applies it. The engine never calls back into the AI.
//!
//! ## Modules
//!
//! - `core`: Gems, banks, players, actions, state, RNG, rules config
//! - `cards`: Card and patron definitions, tier decks, the standard set
//! - `query`: Read-only derived values (affordability, display, winner)
//! - `rules`: Game setup, action application, validation
//! - `ai`: Random and wise strategies behind an experience gate
//! - `simulation`: Batches of AI-only games with aggregate statistics

pub mod ai;
pub mod cards;
pub mod core;
pub mod error;
pub mod query;
pub mod rules;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Bank, ChipSelection, GameRng, GameRngState, GameState, Gem, Player,
    PlayerId, PlayerMap, RulesConfig,
};

pub use crate::cards::{Card, CardId, CardRegistry, Decks, Patron, PatronId, Tier, TierDeck};

pub use crate::error::{EngineError, Result, SimulationError, ValidationError};

pub use crate::rules::{apply_action, new_game, try_action, validate_action, PlayerSetup};

pub use crate::ai::{choose_ai_action, choose_ai_turn, RandomStrategy, TurnStrategy, WiseStrategy};

pub use crate::simulation::{run_simulation, SimulationConfig, SimulationSummary, Simulator};
