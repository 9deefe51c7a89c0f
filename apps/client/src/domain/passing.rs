use crate::domain::errors::DomainError;
use crate::domain::game_transition::begin_play;
use crate::domain::position::{PassingDirection, Position};
use crate::domain::rules::{PASS_SIZE, PLAYERS};
use crate::domain::state::{GamePhase, GameState};
use crate::domain::Card;

/// Result of committing a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassOutcome {
    /// True when this was the last outstanding pass and cards changed hands.
    pub exchanged: bool,
    /// Leader of the first trick, set once the exchange happened.
    pub leader: Option<Position>,
}

/// Check a pass without committing it.
pub fn validate_pass(
    state: &GameState,
    who: Position,
    cards: &[Card; PASS_SIZE],
) -> Result<(), DomainError> {
    if state.phase != GamePhase::Passing {
        return Err(DomainError::PhaseMismatch);
    }
    if state.round.passing == PassingDirection::None {
        return Err(DomainError::NoPassingThisRound);
    }
    if state.round.pending_passes[who.index()].is_some() {
        return Err(DomainError::AlreadyPassed(who));
    }
    for (i, card) in cards.iter().enumerate() {
        if cards[..i].contains(card) {
            return Err(DomainError::InvalidPass(format!("{card} selected twice")));
        }
        if !state.hand(who).contains(card) {
            return Err(DomainError::CardNotInHand);
        }
    }
    Ok(())
}

/// Commit `who`'s three cards. The exchange happens when the fourth seat commits,
/// after which the round moves to trick play.
pub fn submit_pass(
    state: &mut GameState,
    who: Position,
    cards: [Card; PASS_SIZE],
) -> Result<PassOutcome, DomainError> {
    validate_pass(state, who, &cards)?;
    state.round.pending_passes[who.index()] = Some(cards);

    if state.round.pending_passes.iter().any(Option::is_none) {
        return Ok(PassOutcome {
            exchanged: false,
            leader: None,
        });
    }

    exchange(state)?;
    let leader = begin_play(state)?;
    Ok(PassOutcome {
        exchanged: true,
        leader: Some(leader),
    })
}

fn exchange(state: &mut GameState) -> Result<(), DomainError> {
    let direction = state.round.passing;
    let mut incoming: [Vec<Card>; PLAYERS] = Default::default();

    for from in Position::ALL {
        let cards = state.round.pending_passes[from.index()]
            .take()
            .ok_or_else(|| DomainError::Other(format!("missing pass for {from}")))?;
        let to = direction
            .target(from)
            .ok_or(DomainError::NoPassingThisRound)?;
        state.hands[from.index()].retain(|c| !cards.contains(c));
        incoming[to.index()].extend(cards);
    }

    for (hand, received) in state.hands.iter_mut().zip(incoming) {
        hand.extend(received);
        hand.sort();
    }
    Ok(())
}
