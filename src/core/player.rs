//! Players: identification, per-player storage, and hand state.
//!
//! ## PlayerId
//!
//! Seat index in turn order. Seat 0 opens every round.
//!
//! ## PlayerMap
//!
//! Per-player data indexed by `PlayerId`, backed by a `Vec`.
//!
//! ## Player
//!
//! Everything a seat holds: tokens, owned and reserved cards, claimed
//! patrons, cached points, and the optional AI experience.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::bank::Bank;
use crate::cards::{Card, Patron};

/// Seat index in turn order (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Seat that opens every round.
    pub const FIRST: PlayerId = PlayerId(0);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Next seat in turn order, wrapping to seat 0 after the last.
    ///
    /// ```
    /// use rust_gems::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).next(3), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        if self.index() + 1 < player_count {
            Self(self.0 + 1)
        } else {
            Self::FIRST
        }
    }

    /// Iterate over all seats for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access by `PlayerId`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build from one value per seat, in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Create with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        Self::from_vec(PlayerId::all(player_count).map(factory).collect())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Transform every entry, keeping seat order.
    pub fn map<U>(&self, f: impl Fn(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap {
            data: self.iter().map(|(id, v)| f(id, v)).collect(),
        }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// One seat's holdings.
///
/// `points` is cached: it always equals owned-card points plus claimed
/// patron points, and the rules engine keeps it in step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,

    /// Tokens held.
    pub bank: Bank,

    /// Purchased cards, each a permanent one-gem discount.
    pub cards: Vector<Card>,

    /// Reserved, not yet purchased cards.
    pub reserved: Vector<Card>,

    /// Claimed patrons.
    pub patrons: Vector<Patron>,

    /// Cached victory points.
    pub points: u32,

    /// AI skill in [0, 1]. `None` marks a human-controlled seat.
    pub experience: Option<f64>,
}

impl Player {
    /// Create an empty-handed, human-controlled player.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bank: Bank::new(),
            cards: Vector::new(),
            reserved: Vector::new(),
            patrons: Vector::new(),
            points: 0,
            experience: None,
        }
    }

    /// Mark this seat as AI-controlled (builder pattern).
    #[must_use]
    pub fn with_experience(mut self, experience: f64) -> Self {
        self.experience = Some(experience);
        self
    }

    /// Whether an AI plays this seat.
    #[must_use]
    pub fn is_ai(&self) -> bool {
        self.experience.is_some()
    }

    /// Total tokens held, gold included.
    #[must_use]
    pub fn token_count(&self) -> u32 {
        self.bank.total()
    }

    /// Permanent discounts: one per owned card, of that card's gem.
    #[must_use]
    pub fn discounts(&self) -> Bank {
        let mut bank = Bank::new();
        for card in &self.cards {
            bank.add(card.gem, 1);
        }
        bank
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Tier};
    use crate::core::Gem;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        assert_eq!(p0.index(), 0);
        assert_eq!(p0, PlayerId::FIRST);
        assert_eq!(format!("{}", PlayerId::new(3)), "Player 3");
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(PlayerId::new(0).next(2), PlayerId::new(1));
        assert_eq!(PlayerId::new(1).next(2), PlayerId::new(0));
        assert_eq!(PlayerId::new(3).next(4), PlayerId::new(0));
    }

    #[test]
    fn test_player_map_indexing() {
        let mut map: PlayerMap<u32> = PlayerMap::new(3, |p| p.index() as u32 * 10);
        assert_eq!(map[PlayerId::new(2)], 20);

        map[PlayerId::new(1)] = 99;
        assert_eq!(map[PlayerId::new(1)], 99);
        assert_eq!(map.player_count(), 3);
    }

    #[test]
    fn test_player_map_map() {
        let map = PlayerMap::from_vec(vec![1, 2, 3]);
        let doubled = map.map(|_, v| v * 2);
        assert_eq!(doubled.values().copied().collect::<Vec<_>>(), vec![2, 4, 6]);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<u32> = PlayerMap::from_vec(vec![]);
    }

    #[test]
    fn test_new_player_is_empty_and_human() {
        let player = Player::new("Ada");
        assert_eq!(player.token_count(), 0);
        assert!(player.cards.is_empty());
        assert!(player.reserved.is_empty());
        assert_eq!(player.points, 0);
        assert!(!player.is_ai());
        assert!(Player::new("Bot").with_experience(0.5).is_ai());
    }

    #[test]
    fn test_discounts_count_owned_cards() {
        let mut player = Player::new("P1");
        player.cards.push_back(Card::new(CardId::new(1), Tier::One, Gem::Ruby, 0, &[Gem::Onyx]));
        player.cards.push_back(Card::new(CardId::new(2), Tier::One, Gem::Ruby, 0, &[Gem::Onyx]));
        player.cards.push_back(Card::new(CardId::new(3), Tier::One, Gem::Onyx, 0, &[Gem::Ruby]));
        player.bank.add(Gem::Gold, 2);

        let discounts = player.discounts();
        assert_eq!(discounts[Gem::Ruby], 2);
        assert_eq!(discounts[Gem::Onyx], 1);
        assert_eq!(discounts[Gem::Gold], 0);
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new("P1").with_experience(1.0);
        let json = serde_json::to_string(&player).unwrap();
        let restored: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, restored);
    }
}
