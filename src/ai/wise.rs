//! Wise strategy: greedy desirability with a one-turn horizon.
//!
//! Every face-up card the player can buy now, or after one chip take,
//! gets a desirability score:
//!
//! ```text
//! points * 20 - tokens needed after discounts - 10 * turns away
//! ```
//!
//! Candidates are walked best first. The first one affordable now is
//! bought; otherwise the first one with a pursuit take gets its chips.
//! When nothing qualifies the random strategy plays the turn.

use crate::cards::Card;
use crate::core::{Action, GameRng, GameState};
use crate::error::Result;
use crate::query::{tokens_needed_after_discounts, visible_cards};

use super::pursuit::{pursuit_chips, turns_until_affordable};
use super::random::RandomStrategy;
use super::TurnStrategy;

const POINT_WEIGHT: i32 = 20;
const TURN_PENALTY: i32 = 10;

/// A face-up card within the one-turn horizon.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate<'a> {
    pub card: &'a Card,
    /// 0 when affordable now, 1 when one chip take away.
    pub turns: u8,
    pub desirability: i32,
}

/// Score the current player's candidates, most desirable first.
///
/// Equal scores keep display order (tier 3 first).
pub fn rank_candidates(state: &GameState) -> Result<Vec<Candidate<'_>>> {
    let player = state.current();
    let on_display = visible_cards(&state.decks, state.rules.visible_window, None)?;

    let mut candidates: Vec<Candidate<'_>> = on_display
        .into_iter()
        .filter_map(|card| {
            let turns = turns_until_affordable(player, &state.bank, card, &state.rules)?;
            let desirability = i32::from(card.points) * POINT_WEIGHT
                - tokens_needed_after_discounts(player, card) as i32
                - i32::from(turns) * TURN_PENALTY;
            Some(Candidate { card, turns, desirability })
        })
        .collect();
    candidates.sort_by_key(|c| std::cmp::Reverse(c.desirability));
    Ok(candidates)
}

/// Buys or pursues the best card in reach.
///
/// A pursuit take that would push the player over the hand limit is
/// skipped like any other unusable candidate.
#[derive(Clone, Copy, Debug, Default)]
pub struct WiseStrategy {
    fallback: RandomStrategy,
}

impl WiseStrategy {
    /// Create a wise strategy with the random fallback.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fallback: RandomStrategy,
        }
    }
}

impl TurnStrategy for WiseStrategy {
    fn name(&self) -> &'static str {
        "wise"
    }

    fn choose(&self, state: &GameState, rng: &mut GameRng) -> Result<Action> {
        let player = state.current();
        let held = player.token_count();

        for candidate in rank_candidates(state)? {
            if candidate.turns == 0 {
                return Ok(Action::PurchaseVisible(candidate.card.id));
            }
            if let Some(chips) = pursuit_chips(player, &state.bank, candidate.card, &state.rules) {
                if held + chips.len() as u32 <= state.rules.hand_limit {
                    return Ok(Action::TakeChips(chips));
                }
            }
        }

        self.fallback.choose(state, rng)
    }
}
