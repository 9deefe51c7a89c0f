//! Domain layer: pure Hearts rules over `GameState`.
//!
//! Every mutation here returns a small result struct describing what changed;
//! the engine turns those into lifecycle events.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod errors;
pub mod game_transition;
pub mod passing;
pub mod position;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod trick;
pub mod tricks;

#[cfg(test)]
mod tests_passing;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, card_points, hand_has_suit, is_point_card};
pub use cards_types::{Card, Rank, Suit};
pub use errors::DomainError;
pub use position::{PassingDirection, Position};
pub use scoring::{ScoreEntry, ScoreLog};
pub use state::{GamePhase, GameState};
pub use trick::Trick;
