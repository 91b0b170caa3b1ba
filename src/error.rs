//! Error types for the gem engine.
//!
//! - `ValidationError`: a proposed action breaks a business rule. Raised
//!   by `rules::validation` before anything is applied.
//! - `EngineError`: the engine was asked to do something impossible, or
//!   a game ran out of moves or cards. Fatal for that game.
//! - `SimulationError`: a simulation run could not be set up or had to
//!   stop.

use thiserror::Error;

use crate::cards::CardId;
use crate::core::{Gem, PlayerId};

/// Business-rule rejections, shown to whoever proposed the action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("the game is already over")]
    GameOver,

    #[error("invalid chip selection")]
    InvalidChipSelection,

    #[error("taking {taking} chips would leave {held} held, over the limit of {limit}")]
    HandLimit { held: u32, taking: u32, limit: u32 },

    #[error("already holding {0} reserved cards")]
    ReserveLimit(usize),

    #[error("cannot afford {0}")]
    CannotAfford(CardId),

    #[error("{0} is not face-up")]
    CardNotVisible(CardId),

    #[error("{0} is not reserved by the current player")]
    NotReserved(CardId),
}

/// Internal invariant violations and exhaustion errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("{0} is not in its tier's visible window")]
    CardNotVisible(CardId),

    #[error("{0} is not in the current player's reserved cards")]
    ReservedCardNotFound(CardId),

    #[error("no payment source for a {gem} unit of {card}")]
    PaymentFailed { card: CardId, gem: Gem },

    #[error("bank holds fewer than {amount} {gem}")]
    BankUnderflow { gem: Gem, amount: u8 },

    #[error("gold cannot be taken directly")]
    WildcardNotTakeable,

    #[error("no cards remaining")]
    NoCardsRemaining,

    #[error("no known available moves for {0}")]
    NoLegalMove(PlayerId),

    #[error("player count {0} outside 2-4")]
    InvalidPlayerCount(usize),

    #[error("not enough cards or patrons to deal: {0}")]
    InsufficientCards(String),

    #[error("invalid card data: {0}")]
    InvalidCardData(String),

    #[error("snapshot error: {0}")]
    Snapshot(String),

    #[error("rejected: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors that stop a simulation run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("roster must have 2-4 players, got {0}")]
    InvalidRoster(usize),

    #[error("experience {0} outside [0, 1]")]
    InvalidExperience(f64),

    #[error("no games requested")]
    NoGames,

    #[error("game exceeded {0} rounds")]
    RoundLimit(u32),

    #[error("gave up after {failures} failed games, last: {last}")]
    TooManyFailures { failures: usize, last: String },

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
