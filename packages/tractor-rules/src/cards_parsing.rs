//! Card tokens: parsing from and formatting to compact strings
//! ("AS", "TD", "2C", "SJ" for the small joker, "BJ" for the big joker).

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use super::cards_types::{Card, Face, JokerType, Rank, Suit};
use crate::errors::DomainError;
use crate::rules::DECKS;

impl FromStr for Face {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SJ" => return Ok(Face::Joker(JokerType::Small)),
            "BJ" => return Ok(Face::Joker(JokerType::Big)),
            _ => {}
        }
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(DomainError::ParseCard(s.to_string()));
        };
        let rank = match rank_ch {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(DomainError::ParseCard(s.to_string())),
        };
        let suit = match suit_ch {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(DomainError::ParseCard(s.to_string())),
        };
        Ok(Face::Standard { suit, rank })
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let (rank_ch, suit_ch) = match *self {
            Face::Joker(JokerType::Small) => return f.write_str("SJ"),
            Face::Joker(JokerType::Big) => return f.write_str("BJ"),
            Face::Standard { suit, rank } => {
                let rank_ch = match rank {
                    Rank::Two => '2',
                    Rank::Three => '3',
                    Rank::Four => '4',
                    Rank::Five => '5',
                    Rank::Six => '6',
                    Rank::Seven => '7',
                    Rank::Eight => '8',
                    Rank::Nine => '9',
                    Rank::Ten => 'T',
                    Rank::Jack => 'J',
                    Rank::Queen => 'Q',
                    Rank::King => 'K',
                    Rank::Ace => 'A',
                };
                let suit_ch = match suit {
                    Suit::Clubs => 'C',
                    Suit::Diamonds => 'D',
                    Suit::Hearts => 'H',
                    Suit::Spades => 'S',
                };
                (rank_ch, suit_ch)
            }
        };
        write!(f, "{rank_ch}{suit_ch}")
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.face, f)
    }
}

/// Parse card tokens into cards, handing out deck copies in order of
/// appearance: the first "3H" is copy 0, the second copy 1, a third is an error.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashMap<Face, u8> = HashMap::new();
    tokens
        .into_iter()
        .map(|token| {
            let token = token.as_ref();
            let face = token.parse::<Face>()?;
            let copy = seen.entry(face).or_insert(0);
            if *copy >= DECKS {
                return Err(DomainError::TooManyCopies(token.to_string()));
            }
            let card = Card::from_face(face, *copy)?;
            *copy += 1;
            Ok(card)
        })
        .collect()
}
