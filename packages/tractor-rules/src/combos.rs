//! Combination identification: singles, pairs and tractors latent in a set of
//! cards.
//!
//! Pairs and tractors are built per [`TrumpBucket`]. A tractor never spans two
//! buckets, which is what keeps 2♥2♥3♥3♥ from chaining when Two is the trump
//! rank: 2♥ is trump and 3♥ is not.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards_types::{Card, Face, JokerType, Rank};
use crate::trump::{strength_key, trump_bucket, TrumpBucket, TrumpInfo};

/// Kind of a combination, weakest first. Any selection that is neither a pair
/// nor a tractor reports `Single`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComboType {
    Single,
    Pair,
    Tractor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combo {
    pub combo_type: ComboType,
    pub cards: Vec<Card>,
    /// Tie-break hint: tier and rank of the strongest card. Only meaningful
    /// between combos that are comparable at all (same suit or both trump).
    pub value: u16,
}

impl Combo {
    fn new(combo_type: ComboType, cards: Vec<Card>, trump: TrumpInfo) -> Self {
        let value = cards
            .iter()
            .map(|&c| {
                let (tier, rank) = strength_key(c, trump);
                u16::from(tier) * 16 + u16::from(rank)
            })
            .max()
            .unwrap_or(0);
        Combo {
            combo_type,
            cards,
            value,
        }
    }

    /// Wrap an arbitrary selection, classifying it with [`combo_kind`].
    pub fn from_cards(cards: Vec<Card>, trump: TrumpInfo) -> Self {
        let combo_type = combo_kind(&cards, Some(trump));
        Self::new(combo_type, cards, trump)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

fn is_trump_rank(card: Card, trump: Option<TrumpInfo>) -> bool {
    matches!((card.rank(), trump), (Some(rank), Some(t)) if rank == t.trump_rank)
}

/// The trump rank in the declared trump suit.
fn is_trump_suit_rank(card: Card, trump: Option<TrumpInfo>) -> bool {
    match (card.face, trump) {
        (Face::Standard { suit, rank }, Some(t)) => {
            rank == t.trump_rank && t.trump_suit == Some(suit)
        }
        _ => false,
    }
}

/// Identical faces pair. The one cross-suit pair is the trump rank of the
/// trump suit with the trump rank of another suit; two off-suit trump ranks
/// stay in their own buckets and never pair.
fn is_pair(a: Card, b: Card, trump: Option<TrumpInfo>) -> bool {
    if a.id == b.id {
        return false;
    }
    a.face == b.face
        || (is_trump_suit_rank(a, trump) && is_trump_rank(b, trump))
        || (is_trump_suit_rank(b, trump) && is_trump_rank(a, trump))
}

fn face_groups(cards: &[Card]) -> BTreeMap<Face, Vec<Card>> {
    let mut groups: BTreeMap<Face, Vec<Card>> = BTreeMap::new();
    for &card in cards {
        groups.entry(card.face).or_default().push(card);
    }
    for group in groups.values_mut() {
        group.sort();
    }
    groups
}

/// Every distinct pair in `cards`, listed once per pair of faces.
pub(crate) fn pairs_in(cards: &[Card], trump: TrumpInfo) -> Vec<[Card; 2]> {
    let groups = face_groups(cards);
    let mut pairs: Vec<[Card; 2]> = groups
        .values()
        .filter_map(|group| match group.as_slice() {
            [a, b, ..] => Some([*a, *b]),
            _ => None,
        })
        .collect();

    let firsts: Vec<Card> = groups.values().filter_map(|g| g.first().copied()).collect();
    if let Some(&anchor) = firsts.iter().find(|&&c| is_trump_suit_rank(c, Some(trump))) {
        pairs.extend(
            firsts
                .iter()
                .filter(|&&c| c.face != anchor.face && is_trump_rank(c, Some(trump)))
                .map(|&c| [anchor, c]),
        );
    }
    pairs
}

/// Largest number of disjoint pairs that can be drawn from `cards`.
pub(crate) fn count_pairs(cards: &[Card], trump: TrumpInfo) -> usize {
    let mut pairs = 0;
    // Off-suit trump-rank cards left without an identical partner.
    let mut loose = 0;
    let mut anchors = 0;
    for group in face_groups(cards).values() {
        let Some(&first) = group.first() else {
            continue;
        };
        if is_trump_suit_rank(first, Some(trump)) {
            anchors = group.len();
            continue;
        }
        pairs += group.len() / 2;
        if is_trump_rank(first, Some(trump)) {
            loose += group.len() % 2;
        }
    }
    let matched = anchors.min(loose);
    pairs + matched + (anchors - matched) / 2
}

/// Bucket for ordinary tractors. Jokers never join one; they have their own.
fn tractor_bucket(card: Card, trump: Option<TrumpInfo>) -> Option<TrumpBucket> {
    let suit = card.suit()?;
    Some(match trump {
        Some(t) => trump_bucket(card, t),
        None => TrumpBucket::PlainSuit(suit),
    })
}

/// Maximal runs of pairs at consecutive ranks, per bucket, lowest rank first.
fn pair_runs(cards: &[Card], trump: Option<TrumpInfo>) -> Vec<Vec<[Card; 2]>> {
    let mut buckets: BTreeMap<TrumpBucket, BTreeMap<Rank, Vec<Card>>> = BTreeMap::new();
    for &card in cards {
        let (Some(bucket), Some(rank)) = (tractor_bucket(card, trump), card.rank()) else {
            continue;
        };
        buckets
            .entry(bucket)
            .or_default()
            .entry(rank)
            .or_default()
            .push(card);
    }

    let mut runs = Vec::new();
    for by_rank in buckets.values() {
        let mut run: Vec<[Card; 2]> = Vec::new();
        let mut last_rank: Option<Rank> = None;
        for (&rank, group) in by_rank {
            // One bucket holds one suit, so a rank group is a single face.
            let mut group = group.clone();
            group.sort();
            let [a, b, ..] = group.as_slice() else {
                flush_run(&mut run, &mut runs);
                last_rank = None;
                continue;
            };
            let consecutive = last_rank.is_some_and(|last| last.index() + 1 == rank.index());
            if !consecutive {
                flush_run(&mut run, &mut runs);
            }
            run.push([*a, *b]);
            last_rank = Some(rank);
        }
        flush_run(&mut run, &mut runs);
    }
    runs
}

fn flush_run(run: &mut Vec<[Card; 2]>, runs: &mut Vec<Vec<[Card; 2]>>) {
    if run.len() >= 2 {
        runs.push(std::mem::take(run));
    } else {
        run.clear();
    }
}

/// SJ-SJ-BJ-BJ, if both joker pairs are present.
fn joker_tractor(cards: &[Card]) -> Option<Vec<Card>> {
    let pick = |kind: JokerType| -> Vec<Card> {
        let mut jokers: Vec<Card> = cards
            .iter()
            .copied()
            .filter(|c| c.joker_type() == Some(kind))
            .collect();
        jokers.sort();
        jokers.truncate(2);
        jokers
    };
    let small = pick(JokerType::Small);
    let big = pick(JokerType::Big);
    (small.len() == 2 && big.len() == 2).then(|| small.into_iter().chain(big).collect())
}

/// Every tractor of exactly `len` cards: windows over each run of pairs, plus
/// the joker tractor when `len` is 4.
pub fn tractors_of_length(cards: &[Card], trump: TrumpInfo, len: usize) -> Vec<Combo> {
    if len < 4 || len % 2 != 0 {
        return Vec::new();
    }
    let pairs_needed = len / 2;
    let mut tractors = Vec::new();
    for run in pair_runs(cards, Some(trump)) {
        for window in run.windows(pairs_needed) {
            let cards: Vec<Card> = window.iter().flatten().copied().collect();
            tractors.push(Combo::new(ComboType::Tractor, cards, trump));
        }
    }
    if len == 4 {
        if let Some(jokers) = joker_tractor(cards) {
            tractors.push(Combo::new(ComboType::Tractor, jokers, trump));
        }
    }
    tractors
}

/// Every tractor of any length latent in `cards`, sub-runs included.
pub(crate) fn all_tractors(cards: &[Card], trump: TrumpInfo) -> Vec<Combo> {
    let longest = pair_runs(cards, Some(trump))
        .iter()
        .map(|run| run.len() * 2)
        .max()
        .unwrap_or(0)
        .max(4);
    (4..=longest)
        .step_by(2)
        .flat_map(|len| tractors_of_length(cards, trump, len))
        .collect()
}

/// Catalogue of every single, pair and maximal tractor in `cards`.
pub fn identify_combos(cards: &[Card], trump: TrumpInfo) -> Vec<Combo> {
    let mut sorted = cards.to_vec();
    sorted.sort();

    let mut combos: Vec<Combo> = sorted
        .iter()
        .map(|&c| Combo::new(ComboType::Single, vec![c], trump))
        .collect();

    combos.extend(
        pairs_in(&sorted, trump)
            .into_iter()
            .map(|pair| Combo::new(ComboType::Pair, pair.to_vec(), trump)),
    );

    combos.extend(pair_runs(&sorted, Some(trump)).into_iter().map(|run| {
        let cards = run.into_iter().flatten().collect();
        Combo::new(ComboType::Tractor, cards, trump)
    }));

    if let Some(jokers) = joker_tractor(&sorted) {
        combos.push(Combo::new(ComboType::Tractor, jokers, trump));
    }

    combos
}

/// Classify a selection. Without trump info, tractors group by suit alone and
/// trump-rank cards only pair with their identical copy.
pub fn combo_kind(cards: &[Card], trump: Option<TrumpInfo>) -> ComboType {
    match cards {
        [_] => ComboType::Single,
        [a, b] if is_pair(*a, *b, trump) => ComboType::Pair,
        _ if is_tractor(cards, trump) => ComboType::Tractor,
        _ => ComboType::Single,
    }
}

fn is_tractor(cards: &[Card], trump: Option<TrumpInfo>) -> bool {
    if cards.len() < 4 || cards.len() % 2 != 0 {
        return false;
    }
    if cards.len() == 4 && distinct_ids(cards) && joker_tractor(cards).is_some() {
        return true;
    }
    // Same bucket for all, exactly two identical cards per rank, ranks unbroken.
    let Some(bucket) = tractor_bucket(cards[0], trump) else {
        return false;
    };
    if cards
        .iter()
        .any(|&c| tractor_bucket(c, trump) != Some(bucket))
    {
        return false;
    }
    let runs = pair_runs(cards, trump);
    match runs.as_slice() {
        [run] => run.len() * 2 == cards.len() && distinct_ids(cards),
        _ => false,
    }
}

fn distinct_ids(cards: &[Card]) -> bool {
    let mut ids: Vec<_> = cards.iter().map(|c| c.id).collect();
    ids.sort();
    ids.windows(2).all(|w| w[0] != w[1])
}
