use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::position::Position;

/// Rules violations raised by the pure game logic.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    PhaseMismatch,
    NoPassingThisRound,
    AlreadyPassed(Position),
    InvalidPass(String),
    CardNotInHand,
    OutOfTurn,
    TrickFull,
    MustLeadTwoOfClubs,
    MustFollowSuit,
    HeartsNotBroken,
    NoPointsOnFirstTrick,
    ParseCard(String),
    ParsePosition(String),
    Other(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::PhaseMismatch => write!(f, "phase mismatch"),
            DomainError::NoPassingThisRound => write!(f, "no passing this round"),
            DomainError::AlreadyPassed(p) => write!(f, "{p} has already passed"),
            DomainError::InvalidPass(s) => write!(f, "invalid pass: {s}"),
            DomainError::CardNotInHand => write!(f, "card not in hand"),
            DomainError::OutOfTurn => write!(f, "out of turn"),
            DomainError::TrickFull => write!(f, "trick is full"),
            DomainError::MustLeadTwoOfClubs => write!(f, "first trick must be led with 2C"),
            DomainError::MustFollowSuit => write!(f, "must follow suit"),
            DomainError::HeartsNotBroken => write!(f, "hearts not broken"),
            DomainError::NoPointsOnFirstTrick => write!(f, "no point cards on the first trick"),
            DomainError::ParseCard(s) => write!(f, "parse card: {s}"),
            DomainError::ParsePosition(s) => write!(f, "parse position: {s}"),
            DomainError::Other(s) => write!(f, "domain error: {s}"),
        }
    }
}

impl Error for DomainError {}
