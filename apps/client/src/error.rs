use thiserror::Error;

use crate::ai::StrategyError;
use crate::domain::{Card, DomainError, GamePhase, Position};

/// Errors surfaced by the client: rejected commands, agent misbehavior and setup problems.
///
/// None of these are fatal to a running table; callers log or display them.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Rules violation: {0}")]
    Rules(#[from] DomainError),
    #[error("Strategy error: {0}")]
    Strategy(#[from] StrategyError),
    #[error("Illegal move: {position} cannot play {card} now")]
    IllegalMove { position: Position, card: Card },
    #[error("Duplicate submission from {position}")]
    DoubleSubmission { position: Position },
    #[error("Select exactly 3 cards to pass ({selected} selected)")]
    SelectionIncomplete { selected: usize },
    #[error("Phase mismatch: expected {expected}, table is {actual}")]
    PhaseMismatch {
        expected: GamePhase,
        actual: GamePhase,
    },
    #[error("No cards can be chosen while the table is {phase}")]
    NothingToChoose { phase: GamePhase },
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Runtime error: {detail}")]
    Runtime { detail: String },
}

impl ClientError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn runtime(detail: impl Into<String>) -> Self {
        Self::Runtime {
            detail: detail.into(),
        }
    }

    /// True for errors that reject a single command without touching game state.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ClientError::Rules(_)
                | ClientError::IllegalMove { .. }
                | ClientError::DoubleSubmission { .. }
                | ClientError::SelectionIncomplete { .. }
                | ClientError::PhaseMismatch { .. }
                | ClientError::NothingToChoose { .. }
        )
    }
}
