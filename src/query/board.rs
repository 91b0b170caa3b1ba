//! Board-level queries: visible cards, bank checks, patrons, winner.

use crate::cards::{Card, Decks, Patron, Tier};
use crate::core::{Bank, GameState, PlayerId};
use crate::error::EngineError;

/// Face-up cards, tier 3 first, optionally restricted to one tier.
///
/// Fails with `NoCardsRemaining` when the result would be empty.
pub fn visible_cards(decks: &Decks, window: usize, tier: Option<Tier>) -> crate::Result<Vec<&Card>> {
    let cards: Vec<&Card> = Tier::ALL
        .iter()
        .rev()
        .filter(|&&t| tier.map_or(true, |wanted| wanted == t))
        .flat_map(move |&t| decks[t].visible(window))
        .collect();
    if cards.is_empty() {
        return Err(EngineError::NoCardsRemaining);
    }
    Ok(cards)
}

/// Whether at least three colored kinds are in stock.
#[must_use]
pub fn bank_has_three_kinds(bank: &Bank) -> bool {
    bank.colors_available() >= 3
}

/// Whether a discount profile meets every one of a patron's thresholds.
#[must_use]
pub fn is_eligible_for_patron(discounts: &Bank, patron: &Patron) -> bool {
    discounts.covers(&patron.requirement)
}

/// Winner as of this state.
///
/// An existing winner is returned unchanged. Otherwise a winner can only
/// appear when seat 0 is up (a round just completed) and some player has
/// reached the winning threshold. The highest score wins; ties go to the
/// fewest owned cards, then to the earlier seat.
#[must_use]
pub fn determine_winner(state: &GameState) -> Option<PlayerId> {
    if state.winner.is_some() {
        return state.winner;
    }
    if state.current_player != PlayerId::FIRST {
        return None;
    }
    let threshold = state.rules.winning_points;
    if !state.players.values().any(|p| p.points >= threshold) {
        return None;
    }
    state
        .players
        .iter()
        .min_by_key(|(id, p)| (std::cmp::Reverse(p.points), p.cards.len(), *id))
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, PatronId};
    use crate::core::{Gem, Player, RulesConfig};

    fn card(id: u16, tier: Tier) -> Card {
        Card::new(CardId::new(id), tier, Gem::Ruby, 0, &[Gem::Onyx])
    }

    fn decks() -> Decks {
        let mut cards: Vec<Card> = (0..6).map(|i| card(i, Tier::One)).collect();
        cards.extend((10..12).map(|i| card(i, Tier::Two)));
        cards.push(card(20, Tier::Three));
        Decks::from_cards(cards)
    }

    #[test]
    fn test_visible_cards_order_and_window() {
        let decks = decks();
        let ids: Vec<_> = visible_cards(&decks, 4, None)
            .unwrap()
            .iter()
            .map(|c| c.id.raw())
            .collect();
        assert_eq!(ids, vec![20, 10, 11, 0, 1, 2, 3]);
    }

    #[test]
    fn test_visible_cards_tier_filter() {
        let decks = decks();
        let tier_two = visible_cards(&decks, 4, Some(Tier::Two)).unwrap();
        assert_eq!(tier_two.len(), 2);
        assert!(tier_two.iter().all(|c| c.tier == Tier::Two));
    }

    #[test]
    fn test_visible_cards_empty_fails() {
        let decks = Decks::empty();
        assert_eq!(visible_cards(&decks, 4, None), Err(EngineError::NoCardsRemaining));
        let only_one = Decks::from_cards([card(1, Tier::One)]);
        assert!(visible_cards(&only_one, 4, Some(Tier::Three)).is_err());
    }

    #[test]
    fn test_bank_has_three_kinds() {
        let mut bank = Bank::new();
        bank.add(Gem::Gold, 5);
        bank.add(Gem::Ruby, 1);
        bank.add(Gem::Onyx, 1);
        assert!(!bank_has_three_kinds(&bank));
        bank.add(Gem::Diamond, 1);
        assert!(bank_has_three_kinds(&bank));
    }

    #[test]
    fn test_patron_eligibility() {
        let patron = Patron::new(PatronId(0), Bank::from_gems(&[Gem::Ruby, Gem::Ruby, Gem::Onyx]));
        assert!(is_eligible_for_patron(
            &Bank::from_gems(&[Gem::Ruby, Gem::Ruby, Gem::Onyx, Gem::Diamond]),
            &patron
        ));
        assert!(!is_eligible_for_patron(&Bank::from_gems(&[Gem::Ruby, Gem::Onyx]), &patron));
    }

    fn scored_state(points: &[u32], owned: &[u16]) -> GameState {
        let players = points
            .iter()
            .zip(owned)
            .enumerate()
            .map(|(seat, (&pts, &n))| {
                let mut p = Player::new(format!("P{seat}"));
                p.points = pts;
                for i in 0..n {
                    p.cards.push_back(card(100 * seat as u16 + i, Tier::One));
                }
                p
            })
            .collect();
        GameState::new(
            Bank::new(),
            Decks::empty(),
            Vec::<Patron>::new(),
            players,
            RulesConfig::default(),
        )
    }

    #[test]
    fn test_winner_highest_points() {
        let state = scored_state(&[12, 16, 15], &[5, 9, 3]);
        assert_eq!(determine_winner(&state), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_winner_tie_goes_to_fewer_cards() {
        let state = scored_state(&[15, 15], &[8, 6]);
        assert_eq!(determine_winner(&state), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_no_winner_mid_round_or_below_threshold() {
        let mut state = scored_state(&[15, 3], &[5, 1]);
        state.current_player = PlayerId::new(1);
        assert_eq!(determine_winner(&state), None);

        let state = scored_state(&[14, 14], &[5, 5]);
        assert_eq!(determine_winner(&state), None);
    }

    #[test]
    fn test_existing_winner_kept() {
        let mut state = scored_state(&[15, 20], &[5, 5]);
        state.winner = Some(PlayerId::new(0));
        assert_eq!(determine_winner(&state), Some(PlayerId::new(0)));
    }
}
