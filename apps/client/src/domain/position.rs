//! Seats and passing directions.
//!
//! Seat math lives here so the engine, the agents and the view share one
//! definition of turn order. Clockwise is north → east → south → west.

use std::fmt;
use std::str::FromStr;

use crate::domain::errors::DomainError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Position {
    North,
    East,
    South,
    West,
}

impl Position {
    /// Turn order, starting from north.
    pub const ALL: [Position; 4] = [
        Position::North,
        Position::East,
        Position::South,
        Position::West,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Position {
        Self::ALL[index % 4]
    }

    /// Seat `delta` steps clockwise (negative is counter-clockwise).
    #[inline]
    pub fn offset(self, delta: i8) -> Position {
        let idx = (self.index() as i16 + delta as i16).rem_euclid(4);
        Self::from_index(idx as usize)
    }

    /// Next seat clockwise, i.e. the seat on this player's left.
    #[inline]
    pub fn next(self) -> Position {
        self.offset(1)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::North => "north",
            Position::East => "east",
            Position::South => "south",
            Position::West => "west",
        }
    }

    /// Capitalized seat name, used for robot display names.
    pub fn title(self) -> &'static str {
        match self {
            Position::North => "North",
            Position::East => "East",
            Position::South => "South",
            Position::West => "West",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Position::North),
            "east" | "e" => Ok(Position::East),
            "south" | "s" => Ok(Position::South),
            "west" | "w" => Ok(Position::West),
            _ => Err(DomainError::ParsePosition(s.to_string())),
        }
    }
}

/// Direction cards travel during the passing phase of a round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PassingDirection {
    Left,
    Right,
    Across,
    None,
}

impl PassingDirection {
    /// Rotation for a 1-based round number: left, right, across, none, repeat.
    pub fn for_round(round_no: u32) -> PassingDirection {
        match round_no.saturating_sub(1) % 4 {
            0 => PassingDirection::Left,
            1 => PassingDirection::Right,
            2 => PassingDirection::Across,
            _ => PassingDirection::None,
        }
    }

    /// Seat that receives the cards passed by `from`.
    pub fn target(self, from: Position) -> Option<Position> {
        match self {
            PassingDirection::Left => Some(from.offset(1)),
            PassingDirection::Right => Some(from.offset(-1)),
            PassingDirection::Across => Some(from.offset(2)),
            PassingDirection::None => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PassingDirection::Left => "left",
            PassingDirection::Right => "right",
            PassingDirection::Across => "across",
            PassingDirection::None => "none",
        }
    }
}

impl fmt::Display for PassingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
