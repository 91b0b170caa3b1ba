//! Card and patron definitions - immutable game pieces.
//!
//! A `Card` never changes once dealt: it moves between a tier deck,
//! a player's reserved list and a player's owned list, but its tier,
//! produced gem, points and cost are fixed. Patrons are likewise fixed
//! and only move from the table to the player who qualifies first.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Bank, Gem};

/// Stable identifier of a development card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Stable identifier of a patron.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PatronId(pub u8);

impl std::fmt::Display for PatronId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Patron({})", self.0)
    }
}

/// Card strength bracket. Higher tiers cost more and score more.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    One,
    Two,
    Three,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Tier; 3] = [Tier::One, Tier::Two, Tier::Three];

    /// Dense 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Printed tier number (1-3).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Tier from its printed number.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Tier> {
        match number {
            1 => Some(Tier::One),
            2 => Some(Tier::Two),
            3 => Some(Tier::Three),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tier {}", self.number())
    }
}

/// Card cost: a multiset of colored gems.
///
/// Inline storage covers every card in the standard set; the most
/// expensive costs 14 gems.
pub type Cost = SmallVec<[Gem; 14]>;

/// A development card.
///
/// ## Example
///
/// ```
/// use rust_gems::cards::{Card, CardId, Tier};
/// use rust_gems::core::Gem;
///
/// let card = Card::new(CardId::new(7), Tier::One, Gem::Ruby, 1, &[Gem::Diamond; 4]);
/// assert_eq!(card.cost_bank()[Gem::Diamond], 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Stable identifier.
    pub id: CardId,

    /// Strength bracket.
    pub tier: Tier,

    /// Colored gem this card produces as a permanent discount.
    pub gem: Gem,

    /// Victory points (0-5).
    pub points: u8,

    /// Colored gems to pay, one entry per unit.
    pub cost: Cost,

    /// Cosmetic artwork reference. Ignored by the rules.
    pub image_id: u32,
}

impl Card {
    /// Create a card with no artwork reference.
    ///
    /// Panics if `gem` or any cost entry is the wildcard: gold is never
    /// produced by a card nor part of a cost.
    #[must_use]
    pub fn new(id: CardId, tier: Tier, gem: Gem, points: u8, cost: &[Gem]) -> Self {
        assert!(!gem.is_wildcard(), "Cards cannot produce gold");
        assert!(
            cost.iter().all(|g| !g.is_wildcard()),
            "Card costs cannot contain gold"
        );
        Self {
            id,
            tier,
            gem,
            points,
            cost: SmallVec::from_slice(cost),
            image_id: 0,
        }
    }

    /// Set the artwork reference (builder pattern).
    #[must_use]
    pub fn with_image(mut self, image_id: u32) -> Self {
        self.image_id = image_id;
        self
    }

    /// Cost as a per-kind count.
    #[must_use]
    pub fn cost_bank(&self) -> Bank {
        Bank::from_gems(self.cost.iter())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}, {} pts, cost: {}",
            self.tier,
            self.gem,
            self.points,
            self.cost_bank()
        )
    }
}

/// A bonus entity awarding points to whoever meets its discount thresholds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Patron {
    /// Stable identifier.
    pub id: PatronId,

    /// Points awarded on claim.
    pub points: u8,

    /// Owned-card discounts required per colored kind. Gold is always 0.
    pub requirement: Bank,
}

impl Patron {
    /// Points every patron in the standard set is worth.
    pub const STANDARD_POINTS: u8 = 3;

    /// Create a patron worth the standard points.
    #[must_use]
    pub fn new(id: PatronId, requirement: Bank) -> Self {
        Self {
            id,
            points: Self::STANDARD_POINTS,
            requirement,
        }
    }
}

impl std::fmt::Display for Patron {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} pts, needs {})", self.id, self.points, self.requirement)
    }
}
