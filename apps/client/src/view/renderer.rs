//! Rendering seam between the table view and whatever draws it.

use serde::Serialize;

use super::display::ScoreTable;
use crate::domain::{Card, Position};

/// One thing for the renderer to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderUpdate {
    /// Phase label, e.g. "Game State: passing".
    Phase { label: String },
    /// Pass instructions; `None` clears them.
    PassPrompt { text: Option<String> },
    /// A seat's hand. Only the human's cards are face up; robots show a count.
    Hand {
        position: Position,
        /// Empty when face down.
        cards: Vec<Card>,
        count: usize,
        face_up: bool,
    },
    TrickCleared,
    CardPlayed {
        position: Position,
        name: String,
        card: Card,
    },
    TrickCollected {
        position: Position,
        message: String,
        scores: ScoreTable,
    },
    RoundScored {
        /// Moon-shot announcement, when someone took every point.
        message: Option<String>,
        scores: ScoreTable,
    },
    GameOver {
        winner: Position,
        message: String,
        scores: ScoreTable,
    },
}

/// Draws table updates. Called synchronously from event delivery; keep it quick.
pub trait Renderer: Send + Sync {
    fn render(&self, update: &RenderUpdate);
}
