//! Read-only queries over game state.
//!
//! Nothing here changes a state. The AI reads the board through these
//! functions, and the rules engine uses the same ones for patron awards
//! and winner checks so both sides agree on every derived value.

pub mod board;
pub mod power;

pub use board::{bank_has_three_kinds, determine_winner, is_eligible_for_patron, visible_cards};
pub use power::{
    affordable_reserved, affordable_visible, bank_covers, can_afford, purchasing_power,
    shortfall, tokens_needed_after_discounts,
};
