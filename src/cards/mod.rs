//! Cards and patrons: definitions, tier decks, and the registry.
//!
//! Cards are immutable values. They flow from a `TierDeck` into a
//! player's reserved or owned list; nothing about a card changes on
//! the way.

pub(crate) mod catalog;
pub mod deck;
pub mod definition;
pub mod registry;

pub use deck::{Decks, TierDeck};
pub use definition::{Card, CardId, Cost, Patron, PatronId, Tier};
pub use registry::{CardRecord, CardRegistry, PatronRecord};
