//! Strategy trait definition.

use std::fmt;

use crate::domain::rules::PASS_SIZE;
use crate::domain::Card;

/// Errors a strategy can report instead of a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// Nothing to choose from (fewer cards than required).
    NoOptions,
    /// The strategy failed internally.
    Internal(String),
    /// The strategy produced a choice outside the offered cards.
    InvalidChoice(String),
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyError::NoOptions => write!(f, "no cards to choose from"),
            StrategyError::Internal(msg) => write!(f, "strategy internal error: {msg}"),
            StrategyError::InvalidChoice(msg) => write!(f, "strategy invalid choice: {msg}"),
        }
    }
}

impl std::error::Error for StrategyError {}

/// Decision functions of an autonomous player.
///
/// Implementations see only the cards they are handed: their own hand when
/// passing, the legal subset of it when playing.
pub trait Strategy: Send + Sync {
    /// Choose three distinct cards from `hand` to pass.
    fn select_cards_to_pass(&self, hand: &[Card]) -> Result<[Card; PASS_SIZE], StrategyError>;

    /// Choose one card from the non-empty `legal` set.
    fn select_card_to_play(&self, legal: &[Card]) -> Result<Card, StrategyError>;
}
