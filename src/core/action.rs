//! Turn actions and the move log.
//!
//! A turn is exactly one of four actions. `Action` names them as a sum
//! type so a move log can be stored, serialized and replayed; the rules
//! engine also exposes one typed function per variant.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::gem::Gem;
use super::player::PlayerId;
use crate::cards::CardId;

/// Chips requested in a single take. At most 3 in every legal shape.
pub type ChipSelection = SmallVec<[Gem; 3]>;

/// One complete turn.
///
/// ## Example
///
/// ```
/// use rust_gems::cards::CardId;
/// use rust_gems::core::{Action, Gem};
///
/// let take = Action::take_chips(&[Gem::Ruby, Gem::Onyx, Gem::Emerald]);
/// let buy = Action::PurchaseVisible(CardId::new(12));
/// assert_ne!(take, buy);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move chips from the bank to the acting player.
    TakeChips(ChipSelection),

    /// Buy a face-up card.
    PurchaseVisible(CardId),

    /// Buy a card from the acting player's reserved list.
    PurchaseReserved(CardId),

    /// Reserve a face-up card, collecting a gold token if one is left.
    Reserve(CardId),
}

impl Action {
    /// Build a take-chips action from a slice.
    #[must_use]
    pub fn take_chips(gems: &[Gem]) -> Self {
        Action::TakeChips(SmallVec::from_slice(gems))
    }

    /// The card this action targets, if any.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        match self {
            Action::TakeChips(_) => None,
            Action::PurchaseVisible(id) | Action::PurchaseReserved(id) | Action::Reserve(id) => {
                Some(*id)
            }
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::TakeChips(gems) => {
                let names: Vec<&str> = gems.iter().map(|g| g.name()).collect();
                write!(f, "take {}", names.join(", "))
            }
            Action::PurchaseVisible(id) => write!(f, "purchase {id}"),
            Action::PurchaseReserved(id) => write!(f, "purchase reserved {id}"),
            Action::Reserve(id) => write!(f, "reserve {id}"),
        }
    }
}

/// A logged action with metadata for auditing and replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round the action was taken in (starts at 1).
    pub round: u32,

    /// Position in the whole game's action sequence (starts at 0).
    pub sequence: u32,

    /// Human-readable account, e.g. "Ada took chips: Ruby, Onyx, Emerald."
    pub message: String,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(
        player: PlayerId,
        action: Action,
        round: u32,
        sequence: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
