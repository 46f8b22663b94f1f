//! Play legality: follow suit, follow trump, match the led structure, and
//! exhaust what must be exhausted before reaching elsewhere.

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, error, warn};

use crate::cards_types::{Card, Face};
use crate::combos::{
    all_tractors, combo_kind, count_pairs, identify_combos, pairs_in, tractors_of_length, Combo,
    ComboType,
};
use crate::rules::MAX_HAND_SIZE;
use crate::tricks::Trick;
use crate::trump::{all_trump, is_trump, leading_suit, TrumpInfo};

/// Cards of `hand` that answer `leading`: every trump when trump was led,
/// otherwise the plain cards of the led suit.
fn relevant_pool(leading: &[Card], hand: &[Card], trump: TrumpInfo) -> Vec<Card> {
    if all_trump(leading, trump) {
        return hand.iter().copied().filter(|&c| is_trump(c, trump)).collect();
    }
    let suit = leading_suit(leading, trump);
    hand.iter()
        .copied()
        .filter(|&c| !is_trump(c, trump) && c.suit() == suit)
        .collect()
}

fn contains(cards: &[Card], card: Card) -> bool {
    cards.iter().any(|c| c.id == card.id)
}

fn without(cards: &[Card], removed: &[Card]) -> Vec<Card> {
    cards
        .iter()
        .copied()
        .filter(|&c| !contains(removed, c))
        .collect()
}

/// Every played card is in hand, none twice.
fn held_in_hand(played: &[Card], hand: &[Card]) -> bool {
    let mut seen = HashSet::with_capacity(played.len());
    played
        .iter()
        .all(|&c| seen.insert(c.id) && contains(hand, c))
}

/// Whether the pool can form the led structure at the led length.
fn can_match_structure(pool: &[Card], kind: ComboType, len: usize, trump: TrumpInfo) -> bool {
    match kind {
        ComboType::Single => pool.len() >= len,
        ComboType::Pair => count_pairs(pool, trump) > 0,
        ComboType::Tractor => !tractors_of_length(pool, trump, len).is_empty(),
    }
}

/// Filler taken from `rest` must not split a pair while an unpaired card is
/// still available. Playing a pair whole is fine.
fn preserves_pairs(filler: &[Card], rest: &[Card], trump: TrumpInfo) -> bool {
    let pairs_before = count_pairs(rest, trump);
    let pairs_after = count_pairs(&without(rest, filler), trump);
    let unpaired = rest.len() - 2 * pairs_before;
    let lost = pairs_before - pairs_after;
    let unavoidable = filler.len().saturating_sub(unpaired).div_ceil(2);
    lost <= unavoidable
}

fn reject(reason: &'static str, played: &[Card]) -> bool {
    debug!(reason, played = %display_cards(played), "play rejected");
    false
}

fn display_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decide whether `played` may be put on the table.
///
/// `leading` is `None` when the player leads the trick; any single, pair or
/// tractor from the hand is then legal. Never panics: every rule violation is
/// a plain `false`.
pub fn is_valid_play(
    played: &[Card],
    leading: Option<&[Card]>,
    hand: &[Card],
    trump: TrumpInfo,
) -> bool {
    if played.is_empty() {
        return reject("empty play", played);
    }
    if !held_in_hand(played, hand) {
        return reject("card not in hand", played);
    }

    let Some(leading) = leading else {
        return match combo_kind(played, Some(trump)) {
            ComboType::Single if played.len() > 1 => reject("lead is not a combination", played),
            _ => true,
        };
    };

    let needed = leading.len();
    if played.len() != needed {
        return reject("length differs from lead", played);
    }

    let pool = relevant_pool(leading, hand, trump);

    // Void: anything of the right length goes.
    if pool.is_empty() {
        return true;
    }

    // Short: everything relevant goes out, the rest is filler.
    if pool.len() < needed {
        if !pool.iter().all(|&c| contains(played, c)) {
            return reject("must play every card of the led suit or trump", played);
        }
        if all_trump(leading, trump) {
            return true;
        }
        let filler = without(played, &pool);
        let rest = without(hand, &pool);
        if !preserves_pairs(&filler, &rest, trump) {
            return reject("filler splits a pair while singles remain", played);
        }
        return true;
    }

    if !played.iter().all(|&c| contains(&pool, c)) {
        return reject("must follow the led suit or trump", played);
    }

    let leading_type = combo_kind(leading, Some(trump));
    if leading_type == ComboType::Single {
        return true;
    }
    if can_match_structure(&pool, leading_type, needed, trump) {
        if combo_kind(played, Some(trump)) != leading_type {
            return reject("must match the led structure", played);
        }
        return true;
    }

    // Structure unavailable: as many pairs as the pool allows, then singles.
    let required_pairs = count_pairs(&pool, trump).min(needed / 2);
    if count_pairs(played, trump) < required_pairs {
        return reject("must play available pairs before singles", played);
    }
    true
}

/// Every play [`is_valid_play`] accepts for this hand, interchangeable copies
/// listed once. `trick` is `None` when the player leads.
///
/// Never empty for a non-empty hand.
pub fn legal_plays(hand: &[Card], trick: Option<&Trick>, trump: TrumpInfo) -> Vec<Combo> {
    if hand.is_empty() {
        return Vec::new();
    }
    if hand.len() > MAX_HAND_SIZE {
        warn!(
            hand_size = hand.len(),
            max = MAX_HAND_SIZE,
            "hand larger than a dealt hand; enumeration may be slow"
        );
    }

    let candidates = match trick {
        None => leading_candidates(hand, trump),
        Some(trick) => following_candidates(hand, &trick.leading_combo, trump),
    };
    let leading = trick.map(|t| t.leading_combo.as_slice());

    let mut seen: BTreeSet<Vec<Face>> = BTreeSet::new();
    let mut plays: Vec<Combo> = Vec::new();
    for cards in candidates {
        let mut faces: Vec<Face> = cards.iter().map(|c| c.face).collect();
        faces.sort();
        if !seen.insert(faces) {
            continue;
        }
        if is_valid_play(&cards, leading, hand, trump) {
            plays.push(Combo::from_cards(cards, trump));
        }
    }

    if plays.is_empty() {
        let needed = leading.map_or(1, <[Card]>::len);
        let fallback: Vec<Card> = hand.iter().copied().take(needed).collect();
        error!(
            hand = %display_cards(hand),
            lead = %leading.map(display_cards).unwrap_or_default(),
            fallback = %display_cards(&fallback),
            "no legal play found; falling back to the first cards of the hand"
        );
        plays.push(Combo::from_cards(fallback, trump));
    }
    plays
}

fn leading_candidates(hand: &[Card], trump: TrumpInfo) -> Vec<Vec<Card>> {
    let mut candidates: Vec<Vec<Card>> = identify_combos(hand, trump)
        .into_iter()
        .filter(|c| c.combo_type != ComboType::Tractor)
        .map(|c| c.cards)
        .collect();
    candidates.extend(all_tractors(hand, trump).into_iter().map(|c| c.cards));
    candidates
}

fn following_candidates(hand: &[Card], leading: &[Card], trump: TrumpInfo) -> Vec<Vec<Card>> {
    let needed = leading.len();
    let pool = relevant_pool(leading, hand, trump);

    if pool.is_empty() {
        return choose_distinct(hand, needed);
    }

    if pool.len() < needed {
        let rest = without(hand, &pool);
        return choose_distinct(&rest, needed - pool.len())
            .into_iter()
            .map(|filler| pool.iter().copied().chain(filler).collect())
            .collect();
    }

    let leading_type = combo_kind(leading, Some(trump));
    match leading_type {
        ComboType::Pair if can_match_structure(&pool, leading_type, needed, trump) => {
            pairs_in(&pool, trump).into_iter().map(|p| p.to_vec()).collect()
        }
        ComboType::Tractor if can_match_structure(&pool, leading_type, needed, trump) => {
            tractors_of_length(&pool, trump, needed)
                .into_iter()
                .map(|c| c.cards)
                .collect()
        }
        _ => choose_distinct(&pool, needed),
    }
}

/// All `k`-card selections from `cards`, skipping selections that only differ
/// by swapping a card for its identical copy.
fn choose_distinct(cards: &[Card], k: usize) -> Vec<Vec<Card>> {
    fn walk(
        cards: &[Card],
        start: usize,
        k: usize,
        current: &mut Vec<Card>,
        out: &mut Vec<Vec<Card>>,
    ) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..cards.len() {
            if cards.len() - i < k - current.len() {
                break;
            }
            if i > start && cards[i].face == cards[i - 1].face {
                continue;
            }
            current.push(cards[i]);
            walk(cards, i + 1, k, current, out);
            current.pop();
        }
    }

    let mut sorted = cards.to_vec();
    sorted.sort();
    let mut out = Vec::new();
    if k <= sorted.len() {
        walk(&sorted, 0, k, &mut Vec::with_capacity(k), &mut out);
    }
    out
}

/// How many cards of each face a selection holds; used by tests to compare
/// plays up to interchangeable copies.
#[cfg(test)]
pub(crate) fn face_counts(cards: &[Card]) -> std::collections::BTreeMap<Face, usize> {
    let mut counts = std::collections::BTreeMap::new();
    for c in cards {
        *counts.entry(c.face).or_insert(0) += 1;
    }
    counts
}
