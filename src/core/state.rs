//! Game state: the aggregate root of one game.
//!
//! ## GameState
//!
//! - General bank
//! - Three tier decks (visible window first)
//! - Patrons still available
//! - Players in seat order
//! - Current seat, winner once decided, round counter
//! - Append-only move log
//! - Rules constants the game was dealt with
//!
//! Every rules function takes a `&GameState` and returns a new one. The
//! `im` collections inside make that copy share structure with the
//! previous value, so callers keep the new state and drop the old one.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::bank::Bank;
use super::config::RulesConfig;
use super::player::{Player, PlayerId, PlayerMap};
use crate::cards::{Decks, Patron};
use crate::error::EngineError;

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    // === Table ===
    /// Tokens not held by any player.
    pub bank: Bank,

    /// Remaining cards per tier.
    pub decks: Decks,

    /// Patrons not yet claimed.
    pub patrons: Vector<Patron>,

    // === Players ===
    /// Seats in turn order.
    pub players: PlayerMap<Player>,

    // === Progression ===
    /// Seat whose turn it is.
    pub current_player: PlayerId,

    /// Set once, at a round wrap, and never changed afterwards.
    pub winner: Option<PlayerId>,

    /// Round number (starts at 1, increments when seat 0 is up again).
    pub round: u32,

    /// Every action applied so far, oldest first.
    pub log: Vector<ActionRecord>,

    /// Rules constants in effect.
    pub rules: RulesConfig,
}

impl GameState {
    /// Assemble a state at the start of round 1 with seat 0 to act.
    ///
    /// Use `rules::new_game` for a shuffled deal.
    #[must_use]
    pub fn new(
        bank: Bank,
        decks: Decks,
        patrons: impl IntoIterator<Item = Patron>,
        players: Vec<Player>,
        rules: RulesConfig,
    ) -> Self {
        Self {
            bank,
            decks,
            patrons: patrons.into_iter().collect(),
            players: PlayerMap::from_vec(players),
            current_player: PlayerId::FIRST,
            winner: None,
            round: 1,
            log: Vector::new(),
            rules,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count())
    }

    /// Seat holdings by ID.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Whether a winner has been decided.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Sequence number the next logged action will get.
    #[must_use]
    pub fn next_sequence(&self) -> u32 {
        self.log.len() as u32
    }

    /// Tokens in circulation: the bank plus every player's holdings.
    ///
    /// Constant for the whole game; tokens only ever move between the
    /// bank and players.
    #[must_use]
    pub fn token_supply(&self) -> Bank {
        self.players
            .values()
            .fold(self.bank, |supply, player| supply.plus(&player.bank))
    }

    /// Rendered move log, oldest first.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(|record| record.message.as_str())
    }

    // === Snapshots ===

    /// Serialize to a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        bincode::serialize(self).map_err(|e| EngineError::Snapshot(e.to_string()))
    }

    /// Restore from a binary snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        bincode::deserialize(bytes).map_err(|e| EngineError::Snapshot(e.to_string()))
    }
}
