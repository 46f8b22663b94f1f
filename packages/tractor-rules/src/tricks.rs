//! Tricks in progress: who led, what has been played, and whether a proposed
//! play would take over the trick.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards_types::{Card, Suit};
use crate::combos::Combo;
use crate::compare::compare_combos;
use crate::errors::ContractError;
use crate::legality::is_valid_play;
use crate::rules::PLAYERS;
use crate::trump::{all_trump, common_plain_suit, leading_suit, TrumpInfo};

/// Seat index, 0..PLAYERS.
pub type PlayerId = u8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickPlay {
    pub player_id: PlayerId,
    pub cards: Vec<Card>,
}

/// A trick as the round controller tracks it. The leader's cards live in
/// `leading_combo`; `plays` holds the followers in seat order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    pub leading_combo: Vec<Card>,
    pub plays: Vec<TrickPlay>,
    pub leading_player_id: PlayerId,
    pub winning_player_id: PlayerId,
    pub points: u32,
}

impl Trick {
    pub fn new(leading_player_id: PlayerId, leading_combo: Vec<Card>) -> Self {
        let points = card_points(&leading_combo);
        Self {
            leading_combo,
            plays: Vec::new(),
            leading_player_id,
            winning_player_id: leading_player_id,
            points,
        }
    }

    /// Append a follower's play. Points are updated; `winning_player_id` is
    /// left to the controller (see [`resolve_trick_winner`]).
    pub fn with_play(mut self, player_id: PlayerId, cards: Vec<Card>) -> Self {
        self.points += card_points(&cards);
        self.plays.push(TrickPlay { player_id, cards });
        self
    }

    pub fn cards_of(&self, player_id: PlayerId) -> Option<&[Card]> {
        if player_id == self.leading_player_id {
            return Some(self.leading_combo.as_slice());
        }
        self.plays
            .iter()
            .find(|p| p.player_id == player_id)
            .map(|p| p.cards.as_slice())
    }

    /// Cards of the current winner, or the lead if the winner has not played.
    pub fn winning_cards(&self) -> &[Card] {
        self.cards_of(self.winning_player_id)
            .unwrap_or(self.leading_combo.as_slice())
    }

    pub fn lead_suit(&self, trump: TrumpInfo) -> Option<Suit> {
        leading_suit(&self.leading_combo, trump)
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() + 1 >= PLAYERS
    }
}

pub fn card_points(cards: &[Card]) -> u32 {
    cards.iter().map(|c| u32::from(c.points())).sum()
}

/// Who holds the trick once every play is in. An equal play never takes the
/// trick from an earlier one.
pub fn resolve_trick_winner(trick: &Trick, trump: TrumpInfo) -> Result<PlayerId, ContractError> {
    let mut winner = trick.leading_player_id;
    let mut best: &[Card] = &trick.leading_combo;
    for play in &trick.plays {
        if compare_combos(best, &play.cards, trump)? == Ordering::Less {
            winner = play.player_id;
            best = &play.cards;
        }
    }
    Ok(winner)
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvalReason {
    Illegal,
    Beats,
    Ties,
    Loses,
    /// Neither trump nor the led suit; cannot take the trick.
    OffSuit,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EvalResult {
    pub can_beat: bool,
    pub is_legal: bool,
    /// Decision hint in 0..=100, never used for legality.
    pub strength: u8,
    pub reason: EvalReason,
}

/// Weight of a play's strongest card, scaled into 0..=25.
fn scaled_value(cards: &[Card], trump: TrumpInfo) -> u8 {
    // Big joker: tier 5, no rank.
    const TOP: u16 = 5 * 16;
    let value = Combo::from_cards(cards.to_vec(), trump).value.min(TOP);
    u8::try_from(value * 25 / TOP).unwrap_or(25)
}

fn follows_lead(proposed: &[Card], trick: &Trick, trump: TrumpInfo) -> bool {
    if all_trump(proposed, trump) {
        return true;
    }
    match common_plain_suit(proposed, trump) {
        Some(suit) => trick.lead_suit(trump) == Some(suit),
        None => false,
    }
}

/// Whether `proposed` is legal for `hand` and would take the trick from its
/// current winner.
pub fn evaluate_trick_play(
    proposed: &[Card],
    trick: &Trick,
    trump: TrumpInfo,
    hand: &[Card],
) -> EvalResult {
    let leading = trick.leading_combo.as_slice();
    let is_legal = is_valid_play(proposed, Some(leading), hand, trump);
    if !is_legal {
        return EvalResult {
            can_beat: false,
            is_legal,
            strength: 0,
            reason: EvalReason::Illegal,
        };
    }

    if !follows_lead(proposed, trick, trump) {
        return EvalResult {
            can_beat: false,
            is_legal,
            strength: 0,
            reason: EvalReason::OffSuit,
        };
    }

    let (can_beat, strength, reason) =
        match compare_combos(trick.winning_cards(), proposed, trump) {
            Ok(Ordering::Less) => (true, 75 + scaled_value(proposed, trump), EvalReason::Beats),
            Ok(Ordering::Equal) => (false, 50, EvalReason::Ties),
            Ok(Ordering::Greater) => (false, scaled_value(proposed, trump), EvalReason::Loses),
            Err(err) => {
                debug!(error = %err, "winning play not comparable with proposal");
                (false, 0, EvalReason::Loses)
            }
        };
    EvalResult {
        can_beat,
        is_legal,
        strength,
        reason,
    }
}
