use std::ops::Index;

use serde::Serialize;

use crate::domain::position::Position;
use crate::domain::rules::{PLAYERS, ROUND_POINTS};

/// Points assigned to each seat for one completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreEntry {
    points: [u8; PLAYERS],
}

impl ScoreEntry {
    pub fn new(points: [u8; PLAYERS]) -> Self {
        Self { points }
    }

    pub fn get(&self, who: Position) -> u8 {
        self.points[who.index()]
    }

    pub fn total(&self) -> u16 {
        self.points.iter().map(|&p| p as u16).sum()
    }

    pub fn as_array(&self) -> [u8; PLAYERS] {
        self.points
    }
}

impl Index<Position> for ScoreEntry {
    type Output = u8;

    fn index(&self, who: Position) -> &u8 {
        &self.points[who.index()]
    }
}

/// Append-only history of round entries, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreLog {
    entries: Vec<ScoreEntry>,
}

impl ScoreLog {
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreEntry> {
        self.entries.iter()
    }

    pub(crate) fn append(&mut self, entry: ScoreEntry) {
        self.entries.push(entry);
    }
}

/// Outcome of scoring one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundScore {
    pub entry: ScoreEntry,
    /// Seat that took every penalty point, if any.
    pub moonshooter: Option<Position>,
}

/// Turn raw points taken into a log entry, applying the moon rule:
/// a seat with all 26 points scores 0 and every other seat scores 26.
pub fn score_round(points_taken: [u8; PLAYERS]) -> RoundScore {
    let shooter = Position::ALL
        .into_iter()
        .find(|p| points_taken[p.index()] == ROUND_POINTS);

    match shooter {
        Some(moonshooter) => {
            let mut points = [ROUND_POINTS; PLAYERS];
            points[moonshooter.index()] = 0;
            RoundScore {
                entry: ScoreEntry::new(points),
                moonshooter: Some(moonshooter),
            }
        }
        None => RoundScore {
            entry: ScoreEntry::new(points_taken),
            moonshooter: None,
        },
    }
}

/// Seat with the lowest total; ties go to the earlier seat in turn order.
pub fn leader_by_lowest(totals: [i16; PLAYERS]) -> Position {
    let mut best = Position::North;
    for p in Position::ALL {
        if totals[p.index()] < totals[best.index()] {
            best = p;
        }
    }
    best
}
