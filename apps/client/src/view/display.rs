//! Display strings and the score table.

use std::fmt;

use serde::Serialize;

use crate::domain::rules::PLAYERS;
use crate::domain::{GamePhase, PassingDirection, Position};
use crate::engine::HeartsModel;

pub fn phase_label(phase: GamePhase) -> String {
    format!("Game State: {phase}")
}

/// Instructions for the passing phase; `None` when there is nothing to pass.
pub fn pass_prompt(direction: PassingDirection) -> Option<String> {
    match direction {
        PassingDirection::None => None,
        direction => Some(format!("Pass 3 cards {direction}")),
    }
}

pub fn trick_collected_message(name: &str) -> String {
    format!("Trick collected by {name}")
}

pub fn moon_message(name: &str) -> String {
    format!("{name} shot the moon!")
}

pub fn winner_message(name: &str) -> String {
    format!("Game Over! {name} wins!")
}

/// Display name of the robot seated at `position`.
pub fn robot_name(position: Position) -> String {
    format!("Robot{}", position.title())
}

/// Per-round points and totals, optionally with the round in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreTable {
    names: [String; PLAYERS],
    rounds: Vec<[u8; PLAYERS]>,
    /// Round number and points taken so far, while a round is under way.
    current: Option<(u32, [u8; PLAYERS])>,
    totals: [i16; PLAYERS],
}

impl ScoreTable {
    /// Completed rounds and totals.
    pub fn from_model(model: &HeartsModel) -> Self {
        let names = Position::ALL.map(|p| model.player_name(p));
        let rounds = model.score_log().iter().map(|e| e.as_array()).collect();
        Self {
            names,
            rounds,
            current: None,
            totals: model.scores(),
        }
    }

    /// Like [`from_model`](Self::from_model) plus the points taken in the round in
    /// progress, which are also folded into the totals.
    pub fn with_current_round(model: &HeartsModel, round_no: u32) -> Self {
        let mut table = Self::from_model(model);
        let points = Position::ALL.map(|p| model.current_game_points(p));
        for (total, taken) in table.totals.iter_mut().zip(points) {
            *total += taken as i16;
        }
        table.current = Some((round_no, points));
        table
    }

    pub fn names(&self) -> &[String; PLAYERS] {
        &self.names
    }

    pub fn rounds(&self) -> &[[u8; PLAYERS]] {
        &self.rounds
    }

    pub fn current(&self) -> Option<(u32, [u8; PLAYERS])> {
        self.current
    }

    pub fn totals(&self) -> [i16; PLAYERS] {
        self.totals
    }
}

impl fmt::Display for ScoreTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .names
            .iter()
            .map(|n| n.chars().count())
            .max()
            .unwrap_or(0)
            .max(5);

        write!(f, "{:<6}", "Round")?;
        for name in &self.names {
            write!(f, " {name:>width$}")?;
        }
        writeln!(f)?;

        for (i, points) in self.rounds.iter().enumerate() {
            write_row(f, &(i + 1).to_string(), points.iter().map(u8::to_string), width)?;
        }
        if let Some((round_no, points)) = self.current {
            let label = format!("{round_no}*");
            write_row(f, &label, points.iter().map(u8::to_string), width)?;
        }
        write_row(f, "Total", self.totals.iter().map(i16::to_string), width)
    }
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    cells: impl Iterator<Item = String>,
    width: usize,
) -> fmt::Result {
    write!(f, "{label:<6}")?;
    for cell in cells {
        write!(f, " {cell:>width$}")?;
    }
    writeln!(f)
}
