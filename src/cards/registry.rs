//! Card registry: the pool of cards and patrons a game is dealt from.
//!
//! `CardRegistry::standard()` builds the printed set. Custom sets can be
//! loaded from JSON records in the same column layout the card data
//! files use (`Level`, `Color`, `PV`, `Black`, `Blue`, `White`, `Green`,
//! `Red`).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::catalog::{IMAGE_POOLS, STANDARD_CARDS, STANDARD_PATRONS};
use super::definition::{Card, CardId, Patron, PatronId, Tier};
use crate::core::{Bank, Gem};
use crate::error::EngineError;

/// One card as recorded in a card data file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CardRecord {
    pub level: u8,
    pub color: String,
    #[serde(rename = "PV")]
    pub points: u8,
    pub black: u8,
    pub blue: u8,
    pub white: u8,
    pub green: u8,
    pub red: u8,
}

/// One patron as recorded in a patron data file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatronRecord {
    pub black: u8,
    pub blue: u8,
    pub white: u8,
    pub green: u8,
    pub red: u8,
}

/// Cost entries in printed column order: black, blue, white, green, red.
fn printed_cost(black: u8, blue: u8, white: u8, green: u8, red: u8) -> Vec<Gem> {
    [
        (Gem::Onyx, black),
        (Gem::Sapphire, blue),
        (Gem::Diamond, white),
        (Gem::Emerald, green),
        (Gem::Ruby, red),
    ]
    .into_iter()
    .flat_map(|(gem, n)| std::iter::repeat(gem).take(usize::from(n)))
    .collect()
}

fn image_for(color: &str, id: CardId) -> u32 {
    IMAGE_POOLS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(color))
        .map(|(_, pool)| pool[usize::from(id.raw()) % pool.len()])
        .unwrap_or(0)
}

impl CardRecord {
    fn to_card(&self, id: CardId) -> Result<Card, EngineError> {
        let tier = Tier::from_number(self.level)
            .ok_or_else(|| EngineError::InvalidCardData(format!("level {}", self.level)))?;
        let gem = Gem::from_color_name(&self.color)
            .ok_or_else(|| EngineError::InvalidCardData(format!("color {:?}", self.color)))?;
        let cost = printed_cost(self.black, self.blue, self.white, self.green, self.red);
        Ok(Card::new(id, tier, gem, self.points, &cost).with_image(image_for(&self.color, id)))
    }
}

impl PatronRecord {
    fn requirement(&self) -> Bank {
        Bank::from_gems(&printed_cost(self.black, self.blue, self.white, self.green, self.red))
    }
}

/// Registry of every card and patron available to deal from.
///
/// ## Example
///
/// ```
/// use rust_gems::cards::{CardRegistry, Tier};
///
/// let registry = CardRegistry::standard();
/// assert_eq!(registry.cards().len(), 90);
/// assert_eq!(registry.patrons().len(), 10);
/// assert_eq!(registry.cards_of_tier(Tier::Three).count(), 20);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: Vec<Card>,
    patrons: Vec<Patron>,
    by_id: FxHashMap<CardId, usize>,
}

impl CardRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard 90-card, 10-patron set.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for (i, &(level, color, pv, black, blue, white, green, red)) in
            STANDARD_CARDS.iter().enumerate()
        {
            let record = CardRecord {
                level,
                color: color.to_string(),
                points: pv,
                black,
                blue,
                white,
                green,
                red,
            };
            if let Ok(card) = record.to_card(CardId::new(i as u16)) {
                registry.register_card(card);
            }
        }
        for (i, &(black, blue, white, green, red)) in STANDARD_PATRONS.iter().enumerate() {
            let record = PatronRecord { black, blue, white, green, red };
            registry.register_patron(Patron::new(PatronId(i as u8), record.requirement()));
        }
        registry
    }

    /// Load a card set from JSON arrays of card and patron records.
    ///
    /// Card and patron IDs are assigned by position.
    pub fn from_json(cards_json: &str, patrons_json: &str) -> Result<Self, EngineError> {
        let card_records: Vec<CardRecord> = serde_json::from_str(cards_json)
            .map_err(|e| EngineError::InvalidCardData(e.to_string()))?;
        let patron_records: Vec<PatronRecord> = serde_json::from_str(patrons_json)
            .map_err(|e| EngineError::InvalidCardData(e.to_string()))?;

        let mut registry = Self::new();
        for (i, record) in card_records.iter().enumerate() {
            registry.register_card(record.to_card(CardId::new(i as u16))?);
        }
        for (i, record) in patron_records.iter().enumerate() {
            registry.register_patron(Patron::new(PatronId(i as u8), record.requirement()));
        }
        Ok(registry)
    }

    /// Register a card.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register_card(&mut self, card: Card) {
        if self.by_id.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.by_id.insert(card.id, self.cards.len());
        self.cards.push(card);
    }

    /// Register a patron.
    pub fn register_patron(&mut self, patron: Patron) {
        self.patrons.push(patron);
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.by_id.get(&id).map(|&i| &self.cards[i])
    }

    /// All cards in registration order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards of one tier.
    pub fn cards_of_tier(&self, tier: Tier) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.tier == tier)
    }

    /// All patrons in registration order.
    #[must_use]
    pub fn patrons(&self) -> &[Patron] {
        &self.patrons
    }
}
