//! Caller-side validation.
//!
//! The engine assumes it is handed legal actions. Hosts that accept
//! actions from people (or anything else untrusted) run them through the
//! `validate_*` functions first, or use the `try_*` wrappers that
//! validate and then apply.
//!
//! ## Chip shapes
//!
//! - Three distinct colored kinds, each in stock
//! - Two of one colored kind, with at least `take_two_minimum` of it in
//!   the bank

use crate::cards::CardId;
use crate::core::{Action, Bank, GameState, Gem, PlayerId, RulesConfig};
use crate::error::{Result, ValidationError};
use crate::query::{bank_covers, can_afford, visible_cards};

use super::engine::apply_action;

/// Whether a complete chip selection has a legal shape for this bank.
#[must_use]
pub fn is_valid_chip_selection(gems: &[Gem], bank: &Bank, rules: &RulesConfig) -> bool {
    if gems.iter().any(|g| g.is_wildcard()) {
        return false;
    }
    match *gems {
        [a, b] => a == b && bank[a] >= rules.take_two_minimum,
        [a, b, c] => a != b && b != c && a != c && bank[a] >= 1 && bank[b] >= 1 && bank[c] >= 1,
        _ => false,
    }
}

/// Whether a selection still being picked chip by chip can lead to a
/// legal take.
///
/// Accepts any in-stock partial selection of up to three chips, except
/// that a pair of the same kind, or a full triple, must already be legal.
#[must_use]
pub fn is_valid_partial_selection(gems: &[Gem], bank: &Bank, rules: &RulesConfig) -> bool {
    if gems.iter().any(|g| g.is_wildcard()) {
        return false;
    }
    if !bank_covers(gems, bank, false) {
        return false;
    }
    match *gems {
        [_, _, _] => is_valid_chip_selection(gems, bank, rules),
        [a, b] if a == b => is_valid_chip_selection(gems, bank, rules),
        _ => gems.len() <= 3,
    }
}

/// The player may act: it is their turn and the game is undecided.
pub fn validate_turn(state: &GameState, player: PlayerId) -> std::result::Result<(), ValidationError> {
    if state.is_over() {
        return Err(ValidationError::GameOver);
    }
    if state.current_player != player {
        return Err(ValidationError::NotYourTurn(player));
    }
    Ok(())
}

/// Check a take-chips request, including the hand limit.
pub fn validate_take_chips(
    state: &GameState,
    player: PlayerId,
    gems: &[Gem],
) -> std::result::Result<(), ValidationError> {
    validate_turn(state, player)?;
    if !is_valid_chip_selection(gems, &state.bank, &state.rules) {
        return Err(ValidationError::InvalidChipSelection);
    }
    let held = state.player(player).token_count();
    let taking = gems.len() as u32;
    let limit = state.rules.hand_limit;
    if held + taking > limit {
        return Err(ValidationError::HandLimit { held, taking, limit });
    }
    Ok(())
}

/// Check a purchase of a face-up card.
pub fn validate_purchase_visible(
    state: &GameState,
    player: PlayerId,
    card: CardId,
) -> std::result::Result<(), ValidationError> {
    validate_turn(state, player)?;
    let visible = visible_cards(&state.decks, state.rules.visible_window, None)
        .map_err(|_| ValidationError::CardNotVisible(card))?;
    let target = visible
        .into_iter()
        .find(|c| c.id == card)
        .ok_or(ValidationError::CardNotVisible(card))?;
    if !can_afford(state.player(player), target) {
        return Err(ValidationError::CannotAfford(card));
    }
    Ok(())
}

/// Check a purchase of one of the player's reserved cards.
pub fn validate_purchase_reserved(
    state: &GameState,
    player: PlayerId,
    card: CardId,
) -> std::result::Result<(), ValidationError> {
    validate_turn(state, player)?;
    let holder = state.player(player);
    let target = holder
        .reserved
        .iter()
        .find(|c| c.id == card)
        .ok_or(ValidationError::NotReserved(card))?;
    if !can_afford(holder, target) {
        return Err(ValidationError::CannotAfford(card));
    }
    Ok(())
}

/// Check a reservation of a face-up card.
pub fn validate_reserve(
    state: &GameState,
    player: PlayerId,
    card: CardId,
) -> std::result::Result<(), ValidationError> {
    validate_turn(state, player)?;
    let reserved = state.player(player).reserved.len();
    if reserved >= state.rules.reserve_limit {
        return Err(ValidationError::ReserveLimit(reserved));
    }
    let window = state.rules.visible_window;
    let is_visible = state.decks.iter().any(|deck| deck.visible_position(card, window).is_some());
    if !is_visible {
        return Err(ValidationError::CardNotVisible(card));
    }
    Ok(())
}

/// Check any action.
pub fn validate_action(
    state: &GameState,
    player: PlayerId,
    action: &Action,
) -> std::result::Result<(), ValidationError> {
    match action {
        Action::TakeChips(gems) => validate_take_chips(state, player, gems),
        Action::PurchaseVisible(id) => validate_purchase_visible(state, player, *id),
        Action::PurchaseReserved(id) => validate_purchase_reserved(state, player, *id),
        Action::Reserve(id) => validate_reserve(state, player, *id),
    }
}

/// Validate, then apply.
pub fn try_action(state: &GameState, player: PlayerId, action: &Action) -> Result<GameState> {
    validate_action(state, player, action)?;
    apply_action(state, action)
}

/// Validate, then take chips.
pub fn try_take_chips(state: &GameState, player: PlayerId, gems: &[Gem]) -> Result<GameState> {
    try_action(state, player, &Action::take_chips(gems))
}

/// Validate, then buy a face-up card.
pub fn try_purchase_visible(state: &GameState, player: PlayerId, card: CardId) -> Result<GameState> {
    try_action(state, player, &Action::PurchaseVisible(card))
}

/// Validate, then buy a reserved card.
pub fn try_purchase_reserved(state: &GameState, player: PlayerId, card: CardId) -> Result<GameState> {
    try_action(state, player, &Action::PurchaseReserved(card))
}

/// Validate, then reserve a face-up card.
pub fn try_reserve(state: &GameState, player: PlayerId, card: CardId) -> Result<GameState> {
    try_action(state, player, &Action::Reserve(card))
}
