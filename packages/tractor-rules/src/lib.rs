//! Rules core for Tractor (Shengji): trump classification, combination
//! identification, comparison and play legality.
//!
//! Every function here is pure: callers pass the round's [`TrumpInfo`], the
//! hand and the trick by value or reference and get a fresh answer back.

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod cards_parsing;
pub mod cards_types;
pub mod combos;
pub mod compare;
pub mod errors;
pub mod legality;
pub mod rules;
pub mod tricks;
pub mod trump;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_legality;

// Re-exports for ergonomics
pub use cards_parsing::try_parse_cards;
pub use cards_types::{full_deck, Card, CardId, Face, JokerType, Rank, Suit};
pub use combos::{combo_kind, identify_combos, tractors_of_length, Combo, ComboType};
pub use compare::{compare_cards, compare_combos};
pub use errors::{ContractError, DomainError};
pub use legality::{is_valid_play, legal_plays};
pub use tricks::{
    card_points, evaluate_trick_play, resolve_trick_winner, EvalReason, EvalResult, PlayerId,
    Trick, TrickPlay,
};
pub use trump::{is_trump, leading_suit, trump_bucket, trump_tier, TrumpBucket, TrumpInfo};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    rules_test_support::logging::init();
}
