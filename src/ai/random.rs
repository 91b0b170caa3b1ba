//! Random strategy: the first applicable move in a fixed fallback chain,
//! with uniform random choices inside each step.

use crate::cards::Card;
use crate::core::{Action, Bank, ChipSelection, GameRng, GameState};
use crate::error::{EngineError, Result};
use crate::query::{affordable_reserved, affordable_visible, bank_has_three_kinds, visible_cards};

use super::TurnStrategy;

/// Plays any legal-looking move, preferring purchases.
///
/// ## Fallback chain
///
/// 1. Buy a random affordable reserved card
/// 2. Buy a random affordable face-up card
/// 3. Take 3 random distinct colors, if that stays within the hand limit
/// 4. Reserve a random face-up card from the lowest tier on display
/// 5. Take random distinct colors up to the hand limit
///
/// With none applicable the player has no known move and the game
/// cannot continue.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl TurnStrategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&self, state: &GameState, rng: &mut GameRng) -> Result<Action> {
        let seat = state.current_player;
        let player = state.current();
        let rules = &state.rules;

        let reserved = affordable_reserved(player);
        if let Some(card) = rng.choose(&reserved) {
            return Ok(Action::PurchaseReserved(card.id));
        }

        let visible = affordable_visible(state, seat)?;
        if let Some(card) = rng.choose(&visible) {
            return Ok(Action::PurchaseVisible(card.id));
        }

        let held = player.token_count();
        if held + 3 <= rules.hand_limit && bank_has_three_kinds(&state.bank) {
            return Ok(Action::TakeChips(random_colors(&state.bank, 3, rng)));
        }

        if player.reserved.len() < rules.reserve_limit {
            let on_display = visible_cards(&state.decks, rules.visible_window, None)?;
            if let Some(lowest) = on_display.iter().map(|c| c.tier).min() {
                let candidates: Vec<&Card> =
                    on_display.into_iter().filter(|c| c.tier == lowest).collect();
                if let Some(card) = rng.choose(&candidates) {
                    return Ok(Action::Reserve(card.id));
                }
            }
        }

        if held < rules.hand_limit && bank_has_three_kinds(&state.bank) {
            let wanted = (rules.hand_limit - held) as usize;
            return Ok(Action::TakeChips(random_colors(&state.bank, wanted, rng)));
        }

        Err(EngineError::NoLegalMove(seat))
    }
}

/// Up to `count` distinct in-stock colors, in random order.
pub(crate) fn random_colors(bank: &Bank, count: usize, rng: &mut GameRng) -> ChipSelection {
    let mut colors: Vec<_> = bank.available_colors().collect();
    rng.shuffle(&mut colors);
    colors.into_iter().take(count).collect()
}
