use crate::domain::position::{PassingDirection, Position};
use crate::domain::rules::{PASS_SIZE, PLAYERS};
use crate::domain::scoring::ScoreLog;
use crate::domain::trick::Trick;
use crate::domain::Card;

/// Overall game progression.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GamePhase {
    /// Table created, `start_game` not called yet.
    Setup,
    /// Every seat chooses three cards to pass.
    Passing,
    /// Tricks are being played.
    Playing,
    /// A total reached the target score.
    Complete,
}

impl GamePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            GamePhase::Setup => "setup",
            GamePhase::Passing => "passing",
            GamePhase::Playing => "playing",
            GamePhase::Complete => "complete",
        }
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-round state, reset on every deal.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// 1-based round number; 0 before the first deal.
    pub round_no: u32,
    pub passing: PassingDirection,
    /// Cards each seat has committed to pass this round.
    pub pending_passes: [Option<[Card; PASS_SIZE]>; PLAYERS],
    /// Trick in progress (only while playing).
    pub trick: Option<Trick>,
    pub tricks_played: u8,
    pub hearts_broken: bool,
    /// Penalty points collected so far this round.
    pub points_taken: [u8; PLAYERS],
}

impl RoundState {
    pub fn empty() -> Self {
        Self {
            round_no: 0,
            passing: PassingDirection::None,
            pending_passes: [None; PLAYERS],
            trick: None,
            tricks_played: 0,
            hearts_broken: false,
            points_taken: [0; PLAYERS],
        }
    }

    pub fn is_first_trick(&self) -> bool {
        self.tricks_played == 0
    }
}

/// Entire table state, sufficient for pure domain operations.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub names: [String; PLAYERS],
    pub hands: [Vec<Card>; PLAYERS],
    /// Cumulative scores across completed rounds.
    pub scores_total: [i16; PLAYERS],
    pub score_log: ScoreLog,
    pub round: RoundState,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Setup,
            names: Default::default(),
            hands: Default::default(),
            scores_total: [0; PLAYERS],
            score_log: ScoreLog::default(),
            round: RoundState::empty(),
        }
    }

    pub fn hand(&self, who: Position) -> &[Card] {
        &self.hands[who.index()]
    }

    /// Seat that must play next, if a trick is in progress.
    pub fn next_to_play(&self) -> Option<Position> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        self.round.trick.as_ref().and_then(Trick::next_to_play)
    }

    /// Holder of the two of clubs, who leads the first trick.
    pub fn two_of_clubs_holder(&self) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|p| self.hand(*p).contains(&Card::TWO_OF_CLUBS))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
