//! Game setup: dealing a new game.
//!
//! A deal shuffles every card and patron in the registry, splits the
//! cards into tier decks, keeps `players + 1` patrons, and fills the bank
//! according to the table size. The resulting deal can be written as a
//! compact setup string and dealt again from it.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::{Card, CardId, CardRegistry, Decks, Patron, PatronId, Tier};
use crate::core::{Bank, GameRng, GameState, Player, RulesConfig};
use crate::error::{EngineError, Result};

/// One seat at a new table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSetup {
    /// Display name.
    pub name: String,

    /// AI skill in [0, 1]; `None` for a human seat.
    pub experience: Option<f64>,
}

impl PlayerSetup {
    /// A human-controlled seat.
    #[must_use]
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            experience: None,
        }
    }

    /// An AI-controlled seat.
    #[must_use]
    pub fn ai(name: impl Into<String>, experience: f64) -> Self {
        Self {
            name: name.into(),
            experience: Some(experience),
        }
    }

    fn to_player(&self) -> Player {
        let player = Player::new(self.name.clone());
        match self.experience {
            Some(experience) => player.with_experience(experience),
            None => player,
        }
    }
}

/// Deal a new game.
///
/// ## Example
///
/// ```
/// use rust_gems::cards::CardRegistry;
/// use rust_gems::core::{GameRng, Gem, RulesConfig};
/// use rust_gems::rules::{new_game, PlayerSetup};
///
/// let seats = [PlayerSetup::human("Ada"), PlayerSetup::ai("Bot", 1.0)];
/// let mut rng = GameRng::new(42);
/// let state = new_game(&seats, &CardRegistry::standard(), RulesConfig::default(), &mut rng).unwrap();
///
/// assert_eq!(state.bank[Gem::Ruby], 4);
/// assert_eq!(state.bank[Gem::Gold], 5);
/// assert_eq!(state.patrons.len(), 3);
/// ```
pub fn new_game(
    players: &[PlayerSetup],
    registry: &CardRegistry,
    rules: RulesConfig,
    rng: &mut GameRng,
) -> Result<GameState> {
    let colored = rules
        .colored_tokens_for(players.len())
        .ok_or(EngineError::InvalidPlayerCount(players.len()))?;

    let mut cards: Vec<Card> = registry.cards().to_vec();
    rng.shuffle(&mut cards);
    let mut patrons: Vec<Patron> = registry.patrons().to_vec();
    rng.shuffle(&mut patrons);

    let patron_count = rules.patron_count(players.len());
    if patrons.len() < patron_count {
        return Err(EngineError::InsufficientCards(format!(
            "{patron_count} patrons needed, {} available",
            patrons.len()
        )));
    }
    patrons.truncate(patron_count);

    info!(players = players.len(), seed = rng.seed(), "dealing new game");
    Ok(GameState::new(
        Bank::uniform(colored, rules.gold_tokens),
        Decks::from_cards(cards),
        patrons,
        players.iter().map(PlayerSetup::to_player).collect(),
        rules,
    ))
}

/// Deal a new game from the standard set with standard rules.
pub fn new_standard_game(players: &[PlayerSetup], rng: &mut GameRng) -> Result<GameState> {
    new_game(players, &CardRegistry::standard(), RulesConfig::default(), rng)
}

/// Render a deal's deck order and patrons as
/// `"1:<ids>|2:<ids>|3:<ids>|n:<patron ids>"`.
///
/// Meant for a freshly dealt state; later states encode what remains.
#[must_use]
pub fn encode_setup(state: &GameState) -> String {
    let join = |ids: Vec<String>| ids.join(",");
    let decks: Vec<String> = Tier::ALL
        .iter()
        .map(|&tier| {
            let ids = state.decks[tier].iter().map(|c| c.id.raw().to_string()).collect();
            format!("{}:{}", tier.number(), join(ids))
        })
        .collect();
    let patrons = state.patrons.iter().map(|p| p.id.0.to_string()).collect();
    format!("{}|n:{}", decks.join("|"), join(patrons))
}

/// Deal the exact game described by a setup string.
pub fn new_game_from_setup(
    encoded: &str,
    players: &[PlayerSetup],
    registry: &CardRegistry,
    rules: RulesConfig,
) -> Result<GameState> {
    let colored = rules
        .colored_tokens_for(players.len())
        .ok_or(EngineError::InvalidPlayerCount(players.len()))?;

    let mut cards = Vec::new();
    let mut patrons = Vec::new();
    for section in encoded.split('|') {
        let (label, ids) = section
            .split_once(':')
            .ok_or_else(|| EngineError::InvalidCardData(format!("setup section {section:?}")))?;
        for raw in ids.split(',').filter(|s| !s.is_empty()) {
            let id: u16 = raw
                .parse()
                .map_err(|_| EngineError::InvalidCardData(format!("setup id {raw:?}")))?;
            if label == "n" {
                let patron = registry
                    .patrons()
                    .iter()
                    .find(|p| u16::from(p.id.0) == id)
                    .ok_or_else(|| EngineError::InvalidCardData(format!("{}", PatronId(id as u8))))?;
                patrons.push(patron.clone());
            } else {
                let card = registry
                    .get(CardId::new(id))
                    .ok_or_else(|| EngineError::InvalidCardData(format!("{}", CardId::new(id))))?;
                if card.tier.number().to_string() != label {
                    return Err(EngineError::InvalidCardData(format!(
                        "{} listed under tier {label}",
                        card.id
                    )));
                }
                cards.push(card.clone());
            }
        }
    }

    Ok(GameState::new(
        Bank::uniform(colored, rules.gold_tokens),
        Decks::from_cards(cards),
        patrons,
        players.iter().map(PlayerSetup::to_player).collect(),
        rules,
    ))
}
