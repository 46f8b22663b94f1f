//! Fixed table rules: seats, decks and point values.

use crate::cards_types::Rank;

pub const PLAYERS: usize = 4;

/// Two physical decks are shuffled together, so every face exists twice.
pub const DECKS: u8 = 2;

/// 52 ranked cards plus the two jokers.
pub const CARDS_PER_DECK: u8 = 54;

/// 108 cards minus an 8-card kitty, dealt to four players.
pub const MAX_HAND_SIZE: usize = 25;

pub fn rank_points(rank: Rank) -> u8 {
    match rank {
        Rank::Five => 5,
        Rank::Ten | Rank::King => 10,
        _ => 0,
    }
}
