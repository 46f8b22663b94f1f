//! Card and combination strength under a fixed trump.
//!
//! `Ordering::Equal` is a real answer here: two equal-strength plays are left
//! for the trick controller, where the one played first keeps the trick.

use std::cmp::Ordering;

use crate::cards_types::Card;
use crate::combos::{combo_kind, ComboType};
use crate::errors::ContractError;
use crate::trump::{all_trump, common_plain_suit, is_trump, strength_key, TrumpInfo};

/// Compare two cards. Trump beats non-trump, trump against trump goes by tier
/// (rank breaks ties only among plain trump-suit cards), and plain cards of one
/// suit go by rank. Plain cards of two different suits have no order.
pub fn compare_cards(a: Card, b: Card, trump: TrumpInfo) -> Result<Ordering, ContractError> {
    match (is_trump(a, trump), is_trump(b, trump)) {
        (true, false) => Ok(Ordering::Greater),
        (false, true) => Ok(Ordering::Less),
        (true, true) => Ok(strength_key(a, trump).cmp(&strength_key(b, trump))),
        (false, false) if a.suit() == b.suit() => Ok(a.rank().cmp(&b.rank())),
        (false, false) => Err(ContractError::IncomparableSuits { left: a, right: b }),
    }
}

/// Compare two same-length plays, `a` being the one played earlier.
///
/// Kind decides first (tractor over pair over anything else, trump or not),
/// then trump over non-trump, then card strength. Plays from two different
/// plain suits, and loose multi-card selections, never overtake `a`.
pub fn compare_combos(a: &[Card], b: &[Card], trump: TrumpInfo) -> Result<Ordering, ContractError> {
    if a.len() != b.len() {
        return Err(ContractError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Ok(Ordering::Equal);
    }

    let kind_a = combo_kind(a, Some(trump));
    let kind_b = combo_kind(b, Some(trump));
    if kind_a != kind_b {
        return Ok(kind_a.cmp(&kind_b));
    }

    let trump_a = all_trump(a, trump);
    let trump_b = all_trump(b, trump);
    let comparable = match (trump_a, trump_b) {
        (true, false) => return Ok(Ordering::Greater),
        (false, true) => return Ok(Ordering::Less),
        (true, true) => true,
        (false, false) => {
            let suit_a = common_plain_suit(a, trump);
            suit_a.is_some() && suit_a == common_plain_suit(b, trump)
        }
    };

    let loose = kind_a == ComboType::Single && a.len() > 1;
    if !comparable || loose {
        return Ok(Ordering::Greater);
    }

    Ok(match kind_a {
        ComboType::Tractor => highest(a, trump).cmp(&highest(b, trump)),
        ComboType::Pair | ComboType::Single => descending(a, trump).cmp(&descending(b, trump)),
    })
}

fn highest(cards: &[Card], trump: TrumpInfo) -> (u8, u8) {
    cards
        .iter()
        .map(|&c| strength_key(c, trump))
        .max()
        .unwrap_or_default()
}

fn descending(cards: &[Card], trump: TrumpInfo) -> Vec<(u8, u8)> {
    let mut keys: Vec<(u8, u8)> = cards.iter().map(|&c| strength_key(c, trump)).collect();
    keys.sort_unstable_by(|x, y| y.cmp(x));
    keys
}
