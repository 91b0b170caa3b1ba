//! Rules configuration.
//!
//! `RulesConfig` gathers every numeric constant the rules depend on.
//! `Default` gives the standard rules; builder methods override single
//! values for variants and tests. The config is serde-serializable so
//! hosts can load it from JSON.

use serde::{Deserialize, Serialize};

/// Numeric rule constants.
///
/// ## Defaults
///
/// - Colored tokens per kind: 4 (2 players), 5 (3 players), 7 (4 players)
/// - Gold tokens: 5, independent of player count
/// - Winning threshold: 15 points
/// - Visible window: 4 cards per tier
/// - Reserve limit: 3 cards
/// - Hand limit: 10 tokens
/// - Take-two minimum: the bank must hold 4 of a kind to take 2 of it
/// - Patrons dealt: players + 1
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Colored tokens per kind, indexed by `player_count - 2`.
    pub colored_tokens: [u8; 3],

    /// Gold tokens at setup.
    pub gold_tokens: u8,

    /// Points that trigger the end of the game at round wrap.
    pub winning_points: u32,

    /// Face-up cards per tier.
    pub visible_window: usize,

    /// Maximum reserved cards per player.
    pub reserve_limit: usize,

    /// Maximum tokens a player may hold after taking chips.
    pub hand_limit: u32,

    /// Bank count of a kind required to take two of it.
    pub take_two_minimum: u8,

    /// Patrons dealt beyond one per player.
    pub extra_patrons: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            colored_tokens: [4, 5, 7],
            gold_tokens: 5,
            winning_points: 15,
            visible_window: 4,
            reserve_limit: 3,
            hand_limit: 10,
            take_two_minimum: 4,
            extra_patrons: 1,
        }
    }
}

impl RulesConfig {
    /// Smallest supported table.
    pub const MIN_PLAYERS: usize = 2;

    /// Largest supported table.
    pub const MAX_PLAYERS: usize = 4;

    /// Colored tokens per kind for a table size, if supported.
    #[must_use]
    pub fn colored_tokens_for(&self, player_count: usize) -> Option<u8> {
        if (Self::MIN_PLAYERS..=Self::MAX_PLAYERS).contains(&player_count) {
            Some(self.colored_tokens[player_count - Self::MIN_PLAYERS])
        } else {
            None
        }
    }

    /// Patrons dealt for a table size.
    #[must_use]
    pub fn patron_count(&self, player_count: usize) -> usize {
        player_count + self.extra_patrons
    }

    /// Set the gold token count.
    #[must_use]
    pub fn with_gold_tokens(mut self, gold: u8) -> Self {
        self.gold_tokens = gold;
        self
    }

    /// Set the winning threshold.
    #[must_use]
    pub fn with_winning_points(mut self, points: u32) -> Self {
        self.winning_points = points;
        self
    }

    /// Set the hand limit.
    #[must_use]
    pub fn with_hand_limit(mut self, limit: u32) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Set the reserve limit.
    #[must_use]
    pub fn with_reserve_limit(mut self, limit: usize) -> Self {
        self.reserve_limit = limit;
        self
    }
}
