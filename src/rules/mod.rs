//! Rules: setup, turn application, and caller-side validation.
//!
//! - `setup`: deal a new game
//! - `engine`: pure `apply_*` transformations, one per action kind
//! - `validation`: business-rule checks and `try_*` wrappers
//!
//! The engine never calls the AI and never validates business rules;
//! hosts validate first (or use `try_*`) and the engine applies.

pub mod engine;
pub mod setup;
pub mod validation;

pub use engine::{
    apply_action, apply_purchase_reserved, apply_purchase_visible, apply_reserve,
    apply_take_chips, replay,
};
pub use setup::{encode_setup, new_game, new_game_from_setup, new_standard_game, PlayerSetup};
pub use validation::{
    is_valid_chip_selection, is_valid_partial_selection, try_action, try_purchase_reserved,
    try_purchase_visible, try_reserve, try_take_chips, validate_action, validate_purchase_reserved,
    validate_purchase_visible, validate_reserve, validate_take_chips, validate_turn,
};
