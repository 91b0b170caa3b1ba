//! Core engine types: gems, banks, players, state, actions, RNG, configuration.
//!
//! Everything here is plain data. The rules that move it around live in
//! `rules`; the derived read-only views live in `query`.

pub mod gem;
pub mod bank;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use gem::Gem;
pub use bank::Bank;
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::RulesConfig;
pub use action::{Action, ActionRecord, ChipSelection};
pub use state::GameState;
