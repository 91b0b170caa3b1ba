//! Rules engine: pure turn transformations.
//!
//! Each `apply_*` function takes the current state and an already chosen
//! action and returns the next state. The input state is never touched;
//! on error nothing is applied.
//!
//! ## What the engine checks
//!
//! Only what it needs to stay consistent: chips must exist in the bank,
//! cards must be where the action says they are, and every cost unit
//! must have a payment source. Business rules (turn ownership, chip
//! shapes, hand and reserve limits, affordability) are the caller's job;
//! see `rules::validation`.
//!
//! ## After every action
//!
//! The acting seat advances circularly, the action is logged, and when
//! the index wraps back to seat 0 the winner check runs.

use im::Vector;
use tracing::{debug, info};

use crate::cards::{Card, CardId, Patron, Tier};
use crate::core::{Action, ActionRecord, Gem, GameState, PlayerId};
use crate::error::{EngineError, Result};
use crate::query::{determine_winner, is_eligible_for_patron};

/// Move the requested chips from the bank to the current player.
///
/// Shape rules are not checked here. Fails if a chip is gold or the bank
/// runs out of a requested kind.
pub fn apply_take_chips(state: &GameState, gems: &[Gem]) -> Result<GameState> {
    let mut next = state.clone();
    let seat = next.current_player;

    for &gem in gems {
        if gem.is_wildcard() {
            return Err(EngineError::WildcardNotTakeable);
        }
        if !next.bank.try_remove(gem, 1) {
            return Err(EngineError::BankUnderflow { gem, amount: 1 });
        }
        next.players[seat].bank.add(gem, 1);
    }

    let names: Vec<&str> = gems.iter().map(|g| g.name()).collect();
    let message = format!("{} took chips: {}.", next.players[seat].name, names.join(", "));
    Ok(finish_turn(next, Action::take_chips(gems), message))
}

/// Buy a face-up card for the current player.
pub fn apply_purchase_visible(state: &GameState, card: &Card) -> Result<GameState> {
    purchase_visible(state, card.id)
}

/// Buy one of the current player's reserved cards.
pub fn apply_purchase_reserved(state: &GameState, card: &Card) -> Result<GameState> {
    purchase_reserved(state, card.id)
}

/// Reserve a face-up card for the current player.
pub fn apply_reserve(state: &GameState, card: &Card) -> Result<GameState> {
    reserve(state, card.id)
}

/// Apply any action.
pub fn apply_action(state: &GameState, action: &Action) -> Result<GameState> {
    match action {
        Action::TakeChips(gems) => apply_take_chips(state, gems),
        Action::PurchaseVisible(id) => purchase_visible(state, *id),
        Action::PurchaseReserved(id) => purchase_reserved(state, *id),
        Action::Reserve(id) => reserve(state, *id),
    }
}

/// Re-apply a sequence of actions from a starting state.
///
/// With the same initial deal this reproduces a logged game exactly.
pub fn replay<'a>(
    initial: &GameState,
    actions: impl IntoIterator<Item = &'a Action>,
) -> Result<GameState> {
    let mut state = initial.clone();
    for action in actions {
        state = apply_action(&state, action)?;
    }
    Ok(state)
}

fn purchase_visible(state: &GameState, id: CardId) -> Result<GameState> {
    let mut next = state.clone();
    let seat = next.current_player;
    let window = next.rules.visible_window;

    let tier = locate_visible(&next, id).ok_or(EngineError::CardNotVisible(id))?;
    let card = next.decks[tier]
        .take_visible(id, window)
        .ok_or(EngineError::CardNotVisible(id))?;

    pay_cost(&mut next, seat, &card)?;
    gain_card(&mut next, seat, &card);

    let player = &next.players[seat];
    let message = format!(
        "{} purchased card: ({card}). Total points: {}",
        player.name, player.points
    );
    Ok(finish_turn(next, Action::PurchaseVisible(id), message))
}

fn purchase_reserved(state: &GameState, id: CardId) -> Result<GameState> {
    let mut next = state.clone();
    let seat = next.current_player;

    let index = next.players[seat]
        .reserved
        .iter()
        .position(|c| c.id == id)
        .ok_or(EngineError::ReservedCardNotFound(id))?;
    let card = next.players[seat].reserved.remove(index);

    pay_cost(&mut next, seat, &card)?;
    gain_card(&mut next, seat, &card);

    let player = &next.players[seat];
    let message = format!(
        "{} purchased reserved card: ({card}). Total points: {}",
        player.name, player.points
    );
    Ok(finish_turn(next, Action::PurchaseReserved(id), message))
}

fn reserve(state: &GameState, id: CardId) -> Result<GameState> {
    let mut next = state.clone();
    let seat = next.current_player;
    let window = next.rules.visible_window;

    let tier = locate_visible(&next, id).ok_or(EngineError::CardNotVisible(id))?;
    let card = next.decks[tier]
        .take_visible(id, window)
        .ok_or(EngineError::CardNotVisible(id))?;

    // No gold left is fine; the reservation still happens.
    if next.bank.try_remove(Gem::Gold, 1) {
        next.players[seat].bank.add(Gem::Gold, 1);
    }

    let message = format!("{} reserved card: ({card}).", next.players[seat].name);
    next.players[seat].reserved.push_back(card);
    Ok(finish_turn(next, Action::Reserve(id), message))
}

/// Tier whose visible window holds the card.
fn locate_visible(state: &GameState, id: CardId) -> Option<Tier> {
    let window = state.rules.visible_window;
    Tier::ALL
        .into_iter()
        .find(|&tier| state.decks[tier].visible_position(id, window).is_some())
}

/// Pay a card's cost unit by unit: owned-card discount first, then a
/// matching token, then gold. Spent tokens go back to the bank.
fn pay_cost(state: &mut GameState, seat: PlayerId, card: &Card) -> Result<()> {
    let mut discounts = state.players[seat].discounts();

    for &gem in &card.cost {
        if discounts.try_remove(gem, 1) {
            continue;
        }
        let held = &mut state.players[seat].bank;
        if held.try_remove(gem, 1) {
            state.bank.add(gem, 1);
        } else if held.try_remove(Gem::Gold, 1) {
            state.bank.add(Gem::Gold, 1);
        } else {
            return Err(EngineError::PaymentFailed { card: card.id, gem });
        }
    }
    Ok(())
}

/// Add a paid-for card to the player's owned cards, then award patrons.
fn gain_card(state: &mut GameState, seat: PlayerId, card: &Card) {
    let player = &mut state.players[seat];
    player.points += u32::from(card.points);
    player.cards.push_back(card.clone());
    award_patrons(state, seat);
}

/// Award every available patron the player now qualifies for.
fn award_patrons(state: &mut GameState, seat: PlayerId) {
    let discounts = state.players[seat].discounts();
    let mut earned: Vec<Patron> = Vec::new();
    let mut remaining = Vector::new();

    for patron in &state.patrons {
        if is_eligible_for_patron(&discounts, patron) {
            earned.push(patron.clone());
        } else {
            remaining.push_back(patron.clone());
        }
    }
    if earned.is_empty() {
        return;
    }

    state.patrons = remaining;
    let player = &mut state.players[seat];
    for patron in earned {
        player.points += u32::from(patron.points);
        info!(
            player = %player.name,
            patron = %patron.id,
            points = player.points,
            "patron claimed"
        );
        player.patrons.push_back(patron);
    }
}

/// Log the action, pass the turn, and check for a winner at round wrap.
fn finish_turn(mut state: GameState, action: Action, message: String) -> GameState {
    let actor = state.current_player;
    let record = ActionRecord::new(actor, action, state.round, state.next_sequence(), message);
    debug!(
        player = %actor,
        action = %record.action,
        points = state.players[actor].points,
        "{}",
        record.message
    );
    state.log.push_back(record);

    state.current_player = actor.next(state.player_count());
    if state.current_player == PlayerId::FIRST {
        state.round += 1;
    }

    if state.winner.is_none() {
        state.winner = determine_winner(&state);
        if let Some(winner) = state.winner {
            let player = &state.players[winner];
            info!(
                winner = %player.name,
                points = player.points,
                cards = player.cards.len(),
                round = state.round,
                "game decided"
            );
        }
    }
    state
}
