//! Error types for the rules core.
//!
//! Two families: `ContractError` for calls that break a comparison
//! precondition (a programmer error, never a game outcome), and `DomainError`
//! for malformed input such as unparseable card tokens. Illegal plays are not
//! errors at all; `is_valid_play` answers `false`.

use thiserror::Error;

use crate::cards_types::Card;

/// A comparison was requested that has no game-legal answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractError {
    /// Two non-trump cards of different suits only have an order inside a
    /// trick, where the earlier play keeps it.
    #[error("cannot compare non-trump cards of different suits: {left} vs {right}")]
    IncomparableSuits { left: Card, right: Card },
    /// Combinations are only compared at equal length.
    #[error("cannot compare combinations of different lengths: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("parse card: {0}")]
    ParseCard(String),
    #[error("more than two copies of {0}")]
    TooManyCopies(String),
    #[error("deck copy out of range: {0}")]
    DeckCopy(u8),
    #[error("card id {id} does not belong to {face}")]
    IdMismatch { id: u8, face: String },
}
