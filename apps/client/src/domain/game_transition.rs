//! Round lifecycle: dealing a round, starting play, scoring a finished round.

use crate::domain::errors::DomainError;
use crate::domain::position::{PassingDirection, Position};
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::{score_round, RoundScore};
use crate::domain::state::{GamePhase, GameState, RoundState};
use crate::domain::trick::Trick;
use crate::domain::Card;

/// Reset totals, names and the score log for a fresh game.
pub fn reset_game(state: &mut GameState, names: [String; PLAYERS]) {
    *state = GameState::new();
    state.names = names;
}

/// Install freshly dealt hands for `round_no` and enter the round's first phase.
///
/// Returns the passing direction; with `PassingDirection::None` the round goes
/// straight to trick play.
pub fn start_round(
    state: &mut GameState,
    round_no: u32,
    hands: [Vec<Card>; PLAYERS],
) -> Result<PassingDirection, DomainError> {
    let passing = PassingDirection::for_round(round_no);
    state.hands = hands;
    state.round = RoundState::empty();
    state.round.round_no = round_no;
    state.round.passing = passing;

    if passing == PassingDirection::None {
        begin_play(state)?;
    } else {
        state.phase = GamePhase::Passing;
    }
    Ok(passing)
}

/// Enter trick play with the two of clubs holder on lead.
pub fn begin_play(state: &mut GameState) -> Result<Position, DomainError> {
    let leader = state
        .two_of_clubs_holder()
        .ok_or_else(|| DomainError::Other("nobody holds the two of clubs".into()))?;
    state.phase = GamePhase::Playing;
    state.round.trick = Some(Trick::new(leader));
    state.round.tricks_played = 0;
    Ok(leader)
}

/// Outcome of closing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundFinished {
    pub score: RoundScore,
    pub game_over: bool,
}

/// Score the round, append it to the log and decide whether the game is over.
pub fn finish_round(
    state: &mut GameState,
    target_score: i16,
) -> Result<RoundFinished, DomainError> {
    if state.phase != GamePhase::Playing || state.round.trick.is_some() {
        return Err(DomainError::PhaseMismatch);
    }

    let score = score_round(state.round.points_taken);
    for p in Position::ALL {
        state.scores_total[p.index()] += score.entry.get(p) as i16;
    }
    state.score_log.append(score.entry);
    state.round.points_taken = [0; PLAYERS];

    let game_over = state.scores_total.iter().any(|&t| t >= target_score);
    if game_over {
        state.phase = GamePhase::Complete;
    }
    Ok(RoundFinished { score, game_over })
}
