//! Scripted games through the validated rules API.
//!
//! These tests drive a small hand-built deal turn by turn and check that
//! the state after every move matches the rules: token flow, discounts,
//! patron awards, backfill, turn order and the end-of-round winner check.

use rust_gems::cards::{Card, CardId, Decks, Patron, PatronId, Tier};
use rust_gems::core::{Action, Bank, GameState, Gem, Player, PlayerId, RulesConfig};
use rust_gems::error::{EngineError, ValidationError};
use rust_gems::query::visible_cards;
use rust_gems::rules::{
    apply_action, replay, try_purchase_reserved, try_purchase_visible, try_reserve, try_take_chips,
};

const ADA: PlayerId = PlayerId(0);
const BO: PlayerId = PlayerId(1);

fn card(id: u16, gem: Gem, points: u8, cost: &[Gem]) -> Card {
    Card::new(CardId::new(id), Tier::One, gem, points, cost)
}

fn scripted_state() -> GameState {
    let cards = vec![
        card(0, Gem::Ruby, 1, &[Gem::Onyx, Gem::Onyx]),
        card(1, Gem::Onyx, 0, &[Gem::Ruby, Gem::Emerald, Gem::Sapphire]),
        card(2, Gem::Emerald, 0, &[Gem::Diamond; 3]),
        card(3, Gem::Diamond, 0, &[Gem::Ruby; 4]),
        card(4, Gem::Sapphire, 2, &[Gem::Emerald, Gem::Emerald]),
        card(5, Gem::Sapphire, 0, &[Gem::Diamond]),
    ];
    let patron = Patron::new(PatronId(0), Bank::from_gems(&[Gem::Ruby]));
    GameState::new(
        Bank::uniform(4, 5),
        Decks::from_cards(cards),
        vec![patron],
        vec![Player::new("Ada"), Player::new("Bo")],
        RulesConfig::default(),
    )
}

fn visible_ids(state: &GameState) -> Vec<u16> {
    visible_cards(&state.decks, state.rules.visible_window, Some(Tier::One))
        .unwrap()
        .iter()
        .map(|c| c.id.raw())
        .collect()
}

#[test]
fn test_scripted_opening() {
    let initial = scripted_state();
    let supply = initial.token_supply();

    // Ada takes three distinct colors.
    let state = try_take_chips(&initial, ADA, &[Gem::Ruby, Gem::Emerald, Gem::Sapphire]).unwrap();
    assert_eq!(state.player(ADA).token_count(), 3);
    assert_eq!(state.bank[Gem::Ruby], 3);
    assert_eq!(state.current_player, BO);
    assert_eq!(state.round, 1);

    // Out of turn.
    let err = try_take_chips(&state, ADA, &[Gem::Ruby, Gem::Onyx, Gem::Diamond]).unwrap_err();
    assert_eq!(err, EngineError::Validation(ValidationError::NotYourTurn(ADA)));

    // Bo takes two Onyx; the round wraps.
    let state = try_take_chips(&state, BO, &[Gem::Onyx, Gem::Onyx]).unwrap();
    assert_eq!(state.bank[Gem::Onyx], 2);
    assert_eq!(state.current_player, ADA);
    assert_eq!(state.round, 2);
    assert_eq!(state.winner, None);

    // Ada buys card 1 with exact change; card 4 backfills slot 1.
    let state = try_purchase_visible(&state, ADA, CardId::new(1)).unwrap();
    assert_eq!(state.player(ADA).token_count(), 0);
    assert_eq!(state.player(ADA).discounts()[Gem::Onyx], 1);
    assert_eq!(visible_ids(&state), vec![0, 4, 2, 3]);
    assert_eq!(state.patrons.len(), 1);

    // Bo buys card 0 and meets the patron's single Ruby requirement.
    let state = try_purchase_visible(&state, BO, CardId::new(0)).unwrap();
    assert_eq!(state.player(BO).points, 1 + 3);
    assert_eq!(state.player(BO).patrons.len(), 1);
    assert!(state.patrons.is_empty());
    assert_eq!(state.bank[Gem::Onyx], 4);
    assert_eq!(visible_ids(&state), vec![5, 4, 2, 3]);

    // Ada reserves card 2 and gets a gold.
    let state = try_reserve(&state, ADA, CardId::new(2)).unwrap();
    assert_eq!(state.player(ADA).bank[Gem::Gold], 1);
    assert_eq!(state.bank[Gem::Gold], 4);
    assert_eq!(state.player(ADA).reserved.len(), 1);
    assert_eq!(visible_ids(&state), vec![5, 4, 3]);

    assert_eq!(state.token_supply(), supply);
    assert_eq!(state.log.len(), 5);

    let messages: Vec<&str> = state.messages().collect();
    assert_eq!(messages[0], "Ada took chips: Ruby, Emerald, Sapphire.");
    assert!(messages[2].starts_with("Ada purchased card: ("));
    assert!(messages[3].ends_with("Total points: 4"));
    assert!(messages[4].starts_with("Ada reserved card: ("));
}

#[test]
fn test_gold_pays_for_reserved_card() {
    let mut state = scripted_state();
    state.players[ADA].bank.add(Gem::Diamond, 2);

    let state = try_reserve(&state, ADA, CardId::new(2)).unwrap();
    let state = try_take_chips(&state, BO, &[Gem::Ruby, Gem::Onyx, Gem::Emerald]).unwrap();

    // Two Diamonds plus the gold cover three Diamonds.
    let state = try_purchase_reserved(&state, ADA, CardId::new(2)).unwrap();
    let ada = state.player(ADA);
    assert_eq!(ada.token_count(), 0);
    assert!(ada.reserved.is_empty());
    assert_eq!(ada.cards.len(), 1);
    assert_eq!(state.bank[Gem::Gold], 5);
    assert!(state.messages().last().unwrap().starts_with("Ada purchased reserved card: ("));
}

#[test]
fn test_rejections_leave_state_untouched() {
    let state = scripted_state();

    let cases: Vec<(Action, ValidationError)> = vec![
        (
            Action::take_chips(&[Gem::Ruby, Gem::Ruby, Gem::Onyx]),
            ValidationError::InvalidChipSelection,
        ),
        (Action::take_chips(&[Gem::Gold, Gem::Ruby, Gem::Onyx]), ValidationError::InvalidChipSelection),
        (Action::PurchaseVisible(CardId::new(0)), ValidationError::CannotAfford(CardId::new(0))),
        (Action::PurchaseVisible(CardId::new(5)), ValidationError::CardNotVisible(CardId::new(5))),
        (Action::Reserve(CardId::new(5)), ValidationError::CardNotVisible(CardId::new(5))),
        (Action::PurchaseReserved(CardId::new(0)), ValidationError::NotReserved(CardId::new(0))),
    ];

    for (action, expected) in cases {
        let result = rust_gems::rules::try_action(&state, ADA, &action);
        assert_eq!(result, Err(EngineError::Validation(expected)), "{action}");
    }
    assert_eq!(state, scripted_state());
}

#[test]
fn test_hand_limit_rejection() {
    let mut state = scripted_state();
    state.players[ADA].bank.add(Gem::Diamond, 4);
    state.players[ADA].bank.add(Gem::Onyx, 4);

    let err = try_take_chips(&state, ADA, &[Gem::Ruby, Gem::Emerald, Gem::Sapphire]).unwrap_err();
    assert_eq!(
        err,
        EngineError::Validation(ValidationError::HandLimit {
            held: 8,
            taking: 3,
            limit: 10
        })
    );
    assert!(try_take_chips(&state, ADA, &[Gem::Ruby, Gem::Ruby]).is_ok());
}

#[test]
fn test_reserve_limit() {
    let mut state = scripted_state();
    for id in 90..93 {
        state.players[ADA].reserved.push_back(card(id, Gem::Ruby, 0, &[Gem::Onyx]));
    }
    let err = try_reserve(&state, ADA, CardId::new(0)).unwrap_err();
    assert_eq!(err, EngineError::Validation(ValidationError::ReserveLimit(3)));
}

#[test]
fn test_engine_does_not_enforce_business_rules() {
    // Unvalidated: a lone chip is structurally fine for the engine.
    let state = apply_action(&scripted_state(), &Action::take_chips(&[Gem::Diamond])).unwrap();
    assert_eq!(state.player(ADA).bank[Gem::Diamond], 1);

    // But it cannot create tokens out of nothing.
    let mut empty = scripted_state();
    empty.bank[Gem::Diamond] = 0;
    assert_eq!(
        apply_action(&empty, &Action::take_chips(&[Gem::Diamond])),
        Err(EngineError::BankUnderflow { gem: Gem::Diamond, amount: 1 })
    );
}

#[test]
fn test_winner_decided_at_round_end() {
    let mut state = scripted_state();
    state.players[ADA].points = 14;
    state.players[BO].points = 14;
    state.players[ADA].bank.add(Gem::Onyx, 2);

    // Ada reaches 15 but Bo still gets a turn.
    let state = apply_action(&state, &Action::PurchaseVisible(CardId::new(0))).unwrap();
    assert_eq!(state.player(ADA).points, 15 + 3);
    assert_eq!(state.winner, None);

    let state = apply_action(&state, &Action::take_chips(&[Gem::Ruby, Gem::Emerald, Gem::Sapphire])).unwrap();
    assert_eq!(state.winner, Some(ADA));
    assert!(state.is_over());

    let err = try_take_chips(&state, ADA, &[Gem::Ruby, Gem::Emerald, Gem::Sapphire]).unwrap_err();
    assert_eq!(err, EngineError::Validation(ValidationError::GameOver));
}

#[test]
fn test_replay_reproduces_game() {
    let initial = scripted_state();
    let actions = [
        Action::take_chips(&[Gem::Ruby, Gem::Emerald, Gem::Sapphire]),
        Action::take_chips(&[Gem::Onyx, Gem::Onyx]),
        Action::PurchaseVisible(CardId::new(1)),
        Action::PurchaseVisible(CardId::new(0)),
    ];

    let mut stepped = initial.clone();
    for action in &actions {
        stepped = apply_action(&stepped, action).unwrap();
    }
    let replayed = replay(&initial, &actions).unwrap();

    assert_eq!(replayed, stepped);
    let logged: Vec<Action> = replayed.log.iter().map(|r| r.action.clone()).collect();
    assert_eq!(logged, actions.to_vec());
}

#[test]
fn test_snapshot_restores_mid_game() {
    let state = try_take_chips(&scripted_state(), ADA, &[Gem::Ruby, Gem::Emerald, Gem::Sapphire]).unwrap();
    let bytes = state.to_bytes().unwrap();
    let restored = GameState::from_bytes(&bytes).unwrap();
    assert_eq!(restored, state);

    let next = try_take_chips(&restored, BO, &[Gem::Onyx, Gem::Onyx]).unwrap();
    assert_eq!(next.round, 2);
}
