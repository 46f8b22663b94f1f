//! Core card-related types: Card, Face, Rank, Suit, JokerType

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::rules::{rank_points, CARDS_PER_DECK, DECKS};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Position in natural order, Two = 0 through Ace = 12.
    pub fn index(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JokerType {
    Small,
    Big,
}

/// What is printed on a card. Two cards with the same face are interchangeable
/// for every rule; only their ids differ.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Face {
    Standard { suit: Suit, rank: Rank },
    Joker(JokerType),
}

impl Face {
    /// Position inside one 54-card deck.
    fn deck_index(self) -> u8 {
        match self {
            Face::Standard { suit, rank } => suit as u8 * 13 + rank.index(),
            Face::Joker(JokerType::Small) => 52,
            Face::Joker(JokerType::Big) => 53,
        }
    }
}

/// Unique token of a physical card: deck copy times 54 plus the face index.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

/// A physical card. Deserialization checks that `id` belongs to `face`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    pub id: CardId,
    pub face: Face,
}

#[derive(Deserialize)]
struct RawCard {
    id: CardId,
    face: Face,
}

impl TryFrom<RawCard> for Card {
    type Error = DomainError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        let copy = raw.id.0 / CARDS_PER_DECK;
        match Card::from_face(raw.face, copy) {
            Ok(card) if card.id == raw.id => Ok(card),
            _ => Err(DomainError::IdMismatch {
                id: raw.id.0,
                face: raw.face.to_string(),
            }),
        }
    }
}

impl Card {
    /// A ranked card from deck `copy` (0 or 1).
    pub fn new(suit: Suit, rank: Rank, copy: u8) -> Result<Self, DomainError> {
        Self::from_face(Face::Standard { suit, rank }, copy)
    }

    /// A joker from deck `copy` (0 or 1).
    pub fn joker(kind: JokerType, copy: u8) -> Result<Self, DomainError> {
        Self::from_face(Face::Joker(kind), copy)
    }

    pub fn from_face(face: Face, copy: u8) -> Result<Self, DomainError> {
        if copy >= DECKS {
            return Err(DomainError::DeckCopy(copy));
        }
        Ok(Self::minted(face, copy))
    }

    /// `copy` must already be below `DECKS`.
    fn minted(face: Face, copy: u8) -> Self {
        Card {
            id: CardId(copy * CARDS_PER_DECK + face.deck_index()),
            face,
        }
    }

    pub fn suit(&self) -> Option<Suit> {
        match self.face {
            Face::Standard { suit, .. } => Some(suit),
            Face::Joker(_) => None,
        }
    }

    pub fn rank(&self) -> Option<Rank> {
        match self.face {
            Face::Standard { rank, .. } => Some(rank),
            Face::Joker(_) => None,
        }
    }

    pub fn joker_type(&self) -> Option<JokerType> {
        match self.face {
            Face::Joker(kind) => Some(kind),
            Face::Standard { .. } => None,
        }
    }

    pub fn is_joker(&self) -> bool {
        matches!(self.face, Face::Joker(_))
    }

    pub fn points(&self) -> u8 {
        self.rank().map_or(0, rank_points)
    }

    /// Which of the two decks this card came from.
    pub fn copy(&self) -> u8 {
        self.id.0 / CARDS_PER_DECK
    }
}

// Note: Ord on Card is only for stable sorting: face order (suit then rank,
// jokers last), then id. Do not use it for trick resolution; trump changes
// every round and lives in `compare`.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.face.cmp(&other.face) {
            Ordering::Equal => self.id.cmp(&other.id),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Both decks in stable order: every face of deck 0, then deck 1.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(usize::from(DECKS) * usize::from(CARDS_PER_DECK));
    for copy in 0..DECKS {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                deck.push(Card::minted(Face::Standard { suit, rank }, copy));
            }
        }
        deck.push(Card::minted(Face::Joker(JokerType::Small), copy));
        deck.push(Card::minted(Face::Joker(JokerType::Big), copy));
    }
    deck
}
