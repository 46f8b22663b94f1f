// Proptest generators for rules types.
// Hands are drawn without replacement from real decks, so ids never repeat.

use proptest::prelude::*;

use crate::cards_types::{full_deck, Card, Rank, Suit};
use crate::trump::TrumpInfo;

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

/// Generate a random Rank
pub fn rank() -> impl Strategy<Value = Rank> {
    (0..Rank::ALL.len()).prop_map(|i| Rank::ALL[i])
}

/// Generate a trump: any rank, declared suit or not
pub fn trump_info() -> impl Strategy<Value = TrumpInfo> {
    (rank(), proptest::option::weighted(0.8, suit())).prop_map(|(trump_rank, trump_suit)| {
        TrumpInfo {
            trump_rank,
            trump_suit,
        }
    })
}

/// Any card of the 108
pub fn card() -> impl Strategy<Value = Card> {
    let deck = full_deck();
    (0..deck.len()).prop_map(move |i| deck[i])
}

fn draw(deck: Vec<Card>, count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut pool = deck.clone();
        let count = count.min(pool.len());
        for i in 0..count {
            let j = rng.random_range(i..pool.len());
            pool.swap(i, j);
        }
        pool[..count].to_vec()
    })
}

/// `count` distinct cards from both decks. Pairs are rare at small counts.
pub fn deck_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    draw(full_deck(), count)
}

/// Both copies of a few low ranks in two suits plus the jokers: small enough
/// that pairs and tractors turn up often. Two is included so trump-rank
/// buckets get exercised whenever Two is the trump rank.
fn dense_pool() -> Vec<Card> {
    let ranks = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six];
    full_deck()
        .into_iter()
        .filter(|c| match (c.suit(), c.rank()) {
            (Some(suit), Some(rank)) => {
                matches!(suit, Suit::Hearts | Suit::Spades) && ranks.contains(&rank)
            }
            _ => c.is_joker(),
        })
        .collect()
}

/// `count` distinct cards from the dense pool.
pub fn dense_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    draw(dense_pool(), count)
}

/// A hand of 1..=max cards, sparse or dense
pub fn hand_up_to(max: usize) -> BoxedStrategy<Vec<Card>> {
    prop_oneof![
        (1..=max).prop_flat_map(deck_cards),
        (1..=max).prop_flat_map(dense_cards),
    ]
    .boxed()
}

/// Trump plus two disjoint dense hands: the leader's and a follower's. The
/// follower holds at least as many cards as the leader, as at a real table.
pub fn leader_and_follower() -> impl Strategy<Value = (TrumpInfo, Vec<Card>, Vec<Card>)> {
    (prop_oneof![dense_trump(), trump_info()], 1usize..=7, 0usize..=2).prop_flat_map(
        |(trump, lead_n, extra)| {
            dense_cards(2 * lead_n + extra).prop_map(move |cards| {
                let (leader, follower) = cards.split_at(lead_n);
                (trump, leader.to_vec(), follower.to_vec())
            })
        },
    )
}

/// Trumps whose rank falls inside the dense pool
pub fn dense_trump() -> impl Strategy<Value = TrumpInfo> {
    prop_oneof![
        Just(TrumpInfo::new(Rank::Two, Suit::Spades)),
        Just(TrumpInfo::new(Rank::Four, Suit::Hearts)),
        Just(TrumpInfo::rank_only(Rank::Two)),
    ]
}
