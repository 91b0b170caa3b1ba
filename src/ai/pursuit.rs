//! One-turn lookahead: how close a player is to affording a card.
//!
//! The shortfall (cost minus held tokens minus discounts, gold ignored)
//! is classified into one of three shapes. Only two of them can be
//! closed with a single chip take:
//!
//! - exactly one kind missing exactly 2 units, and nothing else
//! - up to three kinds missing exactly 1 unit each
//!
//! Any other shape is out of reach for this lookahead.

use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{Bank, ChipSelection, Gem, Player, RulesConfig};
use crate::query::{can_afford, shortfall};

/// Shape of what is still missing for a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Need {
    /// Two units of a single kind.
    TwoOf(Gem),
    /// One unit each of these kinds (at most three).
    Singles(SmallVec<[Gem; 3]>),
    /// Anything a single take cannot cover.
    OutOfReach,
}

/// Classify a shortfall.
#[must_use]
pub fn classify(missing: &Bank) -> Need {
    let mut twos: SmallVec<[Gem; 5]> = SmallVec::new();
    let mut ones: SmallVec<[Gem; 3]> = SmallVec::new();

    for gem in Gem::COLORS {
        match missing[gem] {
            0 => {}
            1 if ones.len() < 3 => ones.push(gem),
            2 => twos.push(gem),
            _ => return Need::OutOfReach,
        }
    }

    match twos.as_slice() {
        [gem] if ones.is_empty() => Need::TwoOf(*gem),
        [] => Need::Singles(ones),
        _ => Need::OutOfReach,
    }
}

/// Turns until the player can buy the card: 0 (now), 1 (after one chip
/// take from this bank), or `None` when further away.
#[must_use]
pub fn turns_until_affordable(player: &Player, bank: &Bank, card: &Card, rules: &RulesConfig) -> Option<u8> {
    if can_afford(player, card) {
        return Some(0);
    }
    match classify(&shortfall(player, card)) {
        Need::TwoOf(gem) if bank[gem] >= rules.take_two_minimum => Some(1),
        Need::Singles(gems) if gems.iter().all(|&g| bank[g] > 0) => Some(1),
        _ => None,
    }
}

/// Chips to take now so the card is affordable next turn.
///
/// For single-unit needs the selection is padded to three distinct kinds
/// with other in-stock colors, in canonical order. Returns `None` when no
/// such take exists.
#[must_use]
pub fn pursuit_chips(player: &Player, bank: &Bank, card: &Card, rules: &RulesConfig) -> Option<ChipSelection> {
    match classify(&shortfall(player, card)) {
        Need::TwoOf(gem) if bank[gem] >= rules.take_two_minimum => Some(SmallVec::from_slice(&[gem, gem])),
        Need::Singles(mut gems) => {
            if gems.iter().any(|&g| bank[g] == 0) {
                return None;
            }
            for extra in bank.available_colors() {
                if gems.len() == 3 {
                    break;
                }
                if !gems.contains(&extra) {
                    gems.push(extra);
                }
            }
            (gems.len() == 3).then_some(gems)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Tier};

    fn card(cost: &[Gem]) -> Card {
        Card::new(CardId::new(1), Tier::One, Gem::Diamond, 1, cost)
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(&Bank::from_gems(&[Gem::Ruby, Gem::Ruby])), Need::TwoOf(Gem::Ruby));
        assert_eq!(
            classify(&Bank::from_gems(&[Gem::Ruby, Gem::Onyx])),
            Need::Singles(SmallVec::from_slice(&[Gem::Ruby, Gem::Onyx]))
        );
        assert_eq!(classify(&Bank::from_gems(&[Gem::Ruby, Gem::Ruby, Gem::Onyx])), Need::OutOfReach);
        assert_eq!(classify(&Bank::from_gems(&[Gem::Ruby; 3])), Need::OutOfReach);
        assert_eq!(
            classify(&Bank::from_gems(&[Gem::Ruby, Gem::Onyx, Gem::Emerald, Gem::Diamond])),
            Need::OutOfReach
        );
    }

    #[test]
    fn test_turns_until_affordable() {
        let mut player = Player::new("Ada");
        player.bank.add(Gem::Ruby, 1);
        let bank = Bank::uniform(4, 5);
        let rules = RulesConfig::default();

        assert_eq!(turns_until_affordable(&player, &bank, &card(&[Gem::Ruby]), &rules), Some(0));
        assert_eq!(
            turns_until_affordable(&player, &bank, &card(&[Gem::Ruby, Gem::Onyx, Gem::Emerald]), &rules),
            Some(1)
        );
        assert_eq!(
            turns_until_affordable(&player, &bank, &card(&[Gem::Onyx, Gem::Onyx]), &rules),
            Some(1)
        );
        assert_eq!(
            turns_until_affordable(&player, &bank, &card(&[Gem::Onyx, Gem::Onyx, Gem::Diamond]), &rules),
            None
        );
    }

    #[test]
    fn test_turns_respects_bank_stock() {
        let player = Player::new("Ada");
        let mut bank = Bank::uniform(4, 5);
        bank[Gem::Onyx] = 3;
        bank[Gem::Emerald] = 0;
        let rules = RulesConfig::default();

        assert_eq!(turns_until_affordable(&player, &bank, &card(&[Gem::Onyx, Gem::Onyx]), &rules), None);
        assert_eq!(turns_until_affordable(&player, &bank, &card(&[Gem::Emerald]), &rules), None);
    }

    #[test]
    fn test_gold_counts_for_affordable_now_only() {
        let mut player = Player::new("Ada");
        player.bank.add(Gem::Gold, 1);
        let bank = Bank::uniform(4, 5);
        let rules = RulesConfig::default();
        assert_eq!(turns_until_affordable(&player, &bank, &card(&[Gem::Sapphire]), &rules), Some(0));
    }

    #[test]
    fn test_pursuit_take_two() {
        let player = Player::new("Ada");
        let bank = Bank::uniform(4, 5);
        let chips = pursuit_chips(&player, &bank, &card(&[Gem::Onyx, Gem::Onyx]), &RulesConfig::default());
        assert_eq!(chips.as_deref(), Some(&[Gem::Onyx, Gem::Onyx][..]));
    }

    #[test]
    fn test_pursuit_pads_in_canonical_order() {
        let player = Player::new("Ada");
        let bank = Bank::uniform(4, 5);
        let chips = pursuit_chips(&player, &bank, &card(&[Gem::Onyx]), &RulesConfig::default()).unwrap();
        assert_eq!(chips.as_slice(), &[Gem::Onyx, Gem::Emerald, Gem::Sapphire]);
    }

    #[test]
    fn test_pursuit_fails_when_padding_impossible() {
        let player = Player::new("Ada");
        let mut bank = Bank::new();
        bank.add(Gem::Onyx, 2);
        bank.add(Gem::Ruby, 1);
        let chips = pursuit_chips(&player, &bank, &card(&[Gem::Onyx]), &RulesConfig::default());
        assert_eq!(chips, None);
    }

    #[test]
    fn test_pursuit_mixed_need_out_of_reach() {
        let player = Player::new("Ada");
        let bank = Bank::uniform(7, 5);
        let target = card(&[Gem::Onyx, Gem::Onyx, Gem::Ruby]);
        assert_eq!(pursuit_chips(&player, &bank, &target, &RulesConfig::default()), None);
    }
}
