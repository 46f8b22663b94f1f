//! Trump classification: which cards are trump this round and how strong.

use serde::{Deserialize, Serialize};

use crate::cards_types::{Card, Face, JokerType, Rank, Suit};

/// The round's trump: a rank that is trump in every suit, and optionally a
/// declared suit. Without a declared suit only the rank cards and jokers are
/// trump.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TrumpInfo {
    pub trump_rank: Rank,
    pub trump_suit: Option<Suit>,
}

impl TrumpInfo {
    pub fn new(trump_rank: Rank, trump_suit: Suit) -> Self {
        Self {
            trump_rank,
            trump_suit: Some(trump_suit),
        }
    }

    /// No suit declared yet (or a no-trump round).
    pub fn rank_only(trump_rank: Rank) -> Self {
        Self {
            trump_rank,
            trump_suit: None,
        }
    }
}

/// Grouping used for pairs and tractors. Cards in different buckets never
/// chain into one tractor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum TrumpBucket {
    BigJoker,
    SmallJoker,
    /// Trump-rank cards of one suit other than the trump suit.
    TrumpRankIn(Suit),
    /// Every card of the trump suit, the trump rank included.
    TrumpSuitCard,
    PlainSuit(Suit),
}

pub fn is_trump(card: Card, trump: TrumpInfo) -> bool {
    match card.face {
        Face::Joker(_) => true,
        Face::Standard { suit, rank } => {
            rank == trump.trump_rank || trump.trump_suit == Some(suit)
        }
    }
}

/// 0 for non-trump; otherwise 5 big joker, 4 small joker, 3 trump rank in
/// the trump suit, 2 trump rank in another suit, 1 other trump-suit card.
pub fn trump_tier(card: Card, trump: TrumpInfo) -> u8 {
    match card.face {
        Face::Joker(JokerType::Big) => 5,
        Face::Joker(JokerType::Small) => 4,
        Face::Standard { suit, rank } => {
            let in_trump_suit = trump.trump_suit == Some(suit);
            match (rank == trump.trump_rank, in_trump_suit) {
                (true, true) => 3,
                (true, false) => 2,
                (false, true) => 1,
                (false, false) => 0,
            }
        }
    }
}

pub fn trump_bucket(card: Card, trump: TrumpInfo) -> TrumpBucket {
    match card.face {
        Face::Joker(JokerType::Big) => TrumpBucket::BigJoker,
        Face::Joker(JokerType::Small) => TrumpBucket::SmallJoker,
        Face::Standard { suit, .. } if trump.trump_suit == Some(suit) => {
            TrumpBucket::TrumpSuitCard
        }
        Face::Standard { suit, rank } if rank == trump.trump_rank => {
            TrumpBucket::TrumpRankIn(suit)
        }
        Face::Standard { suit, .. } => TrumpBucket::PlainSuit(suit),
    }
}

/// Strength key for cards that are comparable with each other (both trump, or
/// both of one plain suit): trump tier first, then natural rank.
///
/// Rank only separates cards inside tiers 0 and 1; every tier-2 card carries
/// the trump rank, so 2♥ and 2♦ share a key and compare equal.
pub(crate) fn strength_key(card: Card, trump: TrumpInfo) -> (u8, u8) {
    let tier = trump_tier(card, trump);
    match card.rank() {
        Some(rank) if tier <= 1 => (tier, rank.index()),
        _ => (tier, 0),
    }
}

pub(crate) fn all_trump(cards: &[Card], trump: TrumpInfo) -> bool {
    cards.iter().all(|&c| is_trump(c, trump))
}

/// The plain suit every card of `cards` belongs to, if there is one.
pub(crate) fn common_plain_suit(cards: &[Card], trump: TrumpInfo) -> Option<Suit> {
    let first = *cards.first()?;
    if is_trump(first, trump) {
        return None;
    }
    let suit = first.suit()?;
    cards
        .iter()
        .all(|&c| !is_trump(c, trump) && c.suit() == Some(suit))
        .then_some(suit)
}

/// Suit a follower must answer, or `None` when the lead is trump.
pub fn leading_suit(leading: &[Card], trump: TrumpInfo) -> Option<Suit> {
    leading
        .iter()
        .find(|&&c| !is_trump(c, trump))
        .and_then(|c| c.suit())
}
