//! Purchasing power and affordability.

use crate::cards::Card;
use crate::core::{Bank, Gem, GameState, Player, PlayerId};

use super::board::visible_cards;

/// Held tokens plus one virtual token per owned card of that card's gem.
///
/// Gold only ever comes from held tokens.
#[must_use]
pub fn purchasing_power(player: &Player) -> Bank {
    player.bank.plus(&player.discounts())
}

/// Whether `holdings` can cover every unit of `cost`.
///
/// Units are matched greedily against their own kind; with `use_gold`
/// a gold unit covers any shortfall.
#[must_use]
pub fn bank_covers<'a>(cost: impl IntoIterator<Item = &'a Gem>, holdings: &Bank, use_gold: bool) -> bool {
    let mut remaining = *holdings;
    for &gem in cost {
        if remaining.try_remove(gem, 1) {
            continue;
        }
        if use_gold && remaining.try_remove(Gem::Gold, 1) {
            continue;
        }
        return false;
    }
    true
}

/// Whether a player can pay for a card right now, gold included.
#[must_use]
pub fn can_afford(player: &Player, card: &Card) -> bool {
    bank_covers(card.cost.iter(), &purchasing_power(player), true)
}

/// Face-up cards the player can afford, highest tier first.
///
/// Fails with `NoCardsRemaining` when every tier is empty.
pub fn affordable_visible(state: &GameState, player: PlayerId) -> crate::Result<Vec<&Card>> {
    let holder = state.player(player);
    Ok(visible_cards(&state.decks, state.rules.visible_window, None)?
        .into_iter()
        .filter(|card| can_afford(holder, card))
        .collect())
}

/// Reserved cards the player can afford, in reservation order.
#[must_use]
pub fn affordable_reserved(player: &Player) -> Vec<&Card> {
    player.reserved.iter().filter(|card| can_afford(player, card)).collect()
}

/// Per-kind units still missing after held tokens and discounts.
///
/// Gold holdings are ignored and the gold count is always 0.
#[must_use]
pub fn shortfall(player: &Player, card: &Card) -> Bank {
    let power = purchasing_power(player);
    let cost = card.cost_bank();
    let mut missing = Bank::new();
    for gem in Gem::COLORS {
        missing[gem] = cost[gem].saturating_sub(power[gem]);
    }
    missing
}

/// Cost units left to pay from held tokens once owned-card discounts apply.
#[must_use]
pub fn tokens_needed_after_discounts(player: &Player, card: &Card) -> u32 {
    let discounts = player.discounts();
    let cost = card.cost_bank();
    Gem::COLORS
        .iter()
        .map(|&gem| u32::from(cost[gem].saturating_sub(discounts[gem])))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Tier};

    fn card(id: u16, gem: Gem, cost: &[Gem]) -> Card {
        Card::new(CardId::new(id), Tier::One, gem, 0, cost)
    }

    #[test]
    fn test_purchasing_power_adds_discounts() {
        let mut player = Player::new("Ada");
        player.bank.add(Gem::Ruby, 1);
        player.bank.add(Gem::Gold, 1);
        player.cards.push_back(card(1, Gem::Ruby, &[Gem::Onyx]));

        let power = purchasing_power(&player);
        assert_eq!(power[Gem::Ruby], 2);
        assert_eq!(power[Gem::Gold], 1);
    }

    #[test]
    fn test_bank_covers_with_and_without_gold() {
        let holdings = Bank::from_gems(&[Gem::Ruby, Gem::Gold]);
        let cost = [Gem::Ruby, Gem::Ruby];
        assert!(bank_covers(cost.iter(), &holdings, true));
        assert!(!bank_covers(cost.iter(), &holdings, false));
        assert!(!bank_covers([Gem::Ruby, Gem::Ruby, Gem::Ruby].iter(), &holdings, true));
    }

    #[test]
    fn test_can_afford_is_stable() {
        let mut player = Player::new("Ada");
        player.bank.add(Gem::Sapphire, 2);
        let target = card(2, Gem::Onyx, &[Gem::Sapphire, Gem::Sapphire]);

        assert!(can_afford(&player, &target));
        assert!(can_afford(&player, &target));
        assert!(!can_afford(&player, &card(3, Gem::Onyx, &[Gem::Diamond])));
    }

    #[test]
    fn test_affordable_reserved() {
        let mut player = Player::new("Ada");
        player.bank.add(Gem::Emerald, 1);
        player.reserved.push_back(card(1, Gem::Ruby, &[Gem::Emerald]));
        player.reserved.push_back(card(2, Gem::Ruby, &[Gem::Diamond]));

        let ids: Vec<_> = affordable_reserved(&player).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![CardId::new(1)]);
    }

    #[test]
    fn test_shortfall_ignores_gold() {
        let mut player = Player::new("Ada");
        player.bank.add(Gem::Gold, 3);
        player.bank.add(Gem::Ruby, 1);
        player.cards.push_back(card(1, Gem::Onyx, &[Gem::Ruby]));
        let target = card(2, Gem::Diamond, &[Gem::Ruby, Gem::Ruby, Gem::Onyx, Gem::Onyx, Gem::Emerald]);

        let missing = shortfall(&player, &target);
        assert_eq!(missing[Gem::Ruby], 1);
        assert_eq!(missing[Gem::Onyx], 1);
        assert_eq!(missing[Gem::Emerald], 1);
        assert_eq!(missing[Gem::Gold], 0);
    }

    #[test]
    fn test_tokens_needed_after_discounts() {
        let mut player = Player::new("Ada");
        player.cards.push_back(card(1, Gem::Onyx, &[Gem::Ruby]));
        let target = card(2, Gem::Diamond, &[Gem::Onyx, Gem::Onyx, Gem::Ruby]);
        assert_eq!(tokens_needed_after_discounts(&player, &target), 2);
    }
}
