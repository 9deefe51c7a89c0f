use crate::domain::cards_logic::{hand_has_suit, is_point_card};
use crate::domain::errors::DomainError;
use crate::domain::position::Position;
use crate::domain::rules::TRICKS_PER_ROUND;
use crate::domain::state::{GamePhase, GameState};
use crate::domain::trick::Trick;
use crate::domain::{Card, Suit};

/// Result of playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether this was the fourth card of the trick.
    pub trick_completed: bool,
    /// Whether this play broke hearts.
    pub hearts_broken_now: bool,
}

/// Result of collecting a complete trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectResult {
    pub winner: Position,
    pub points: u8,
    /// True when that was the last trick of the round.
    pub round_complete: bool,
}

/// Cards `who` may legally play right now, in hand order.
///
/// Empty when it is not `who`'s turn or no trick is in progress.
pub fn legal_moves(state: &GameState, who: Position) -> Vec<Card> {
    if state.next_to_play() != Some(who) {
        return Vec::new();
    }
    let Some(trick) = state.round.trick.as_ref() else {
        return Vec::new();
    };
    let hand = state.hand(who);
    let first_trick = state.round.is_first_trick();

    match trick.lead_suit() {
        None if first_trick && hand.contains(&Card::TWO_OF_CLUBS) => vec![Card::TWO_OF_CLUBS],
        None => {
            if state.round.hearts_broken || hand.iter().all(|c| c.suit == Suit::Hearts) {
                hand.to_vec()
            } else {
                filtered(hand, |c| c.suit != Suit::Hearts)
            }
        }
        Some(lead) if hand_has_suit(hand, lead) => filtered(hand, |c| c.suit == lead),
        Some(_) => {
            if first_trick && hand.iter().any(|&c| !is_point_card(c)) {
                filtered(hand, |&c| !is_point_card(c))
            } else {
                hand.to_vec()
            }
        }
    }
}

fn filtered(hand: &[Card], keep: impl Fn(&Card) -> bool) -> Vec<Card> {
    hand.iter().copied().filter(|c| keep(c)).collect()
}

/// Play a card into the current trick, enforcing phase, turn and the Hearts rules.
pub fn play_card(
    state: &mut GameState,
    who: Position,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    if state.phase != GamePhase::Playing {
        return Err(DomainError::PhaseMismatch);
    }
    let trick = state
        .round
        .trick
        .as_ref()
        .ok_or_else(|| DomainError::Other("no trick in progress".into()))?;
    if trick.is_complete() {
        return Err(DomainError::TrickFull);
    }
    if trick.next_to_play() != Some(who) {
        return Err(DomainError::OutOfTurn);
    }
    let Some(pos) = state.hand(who).iter().position(|&c| c == card) else {
        return Err(DomainError::CardNotInHand);
    };
    if !legal_moves(state, who).contains(&card) {
        return Err(illegal_reason(state, who, card));
    }

    state.hands[who.index()].remove(pos);
    let hearts_broken_now = card.suit == Suit::Hearts && !state.round.hearts_broken;
    if card.suit == Suit::Hearts {
        state.round.hearts_broken = true;
    }

    let trick = state
        .round
        .trick
        .as_mut()
        .ok_or_else(|| DomainError::Other("no trick in progress".into()))?;
    trick.push(who, card);

    Ok(PlayCardResult {
        trick_completed: trick.is_complete(),
        hearts_broken_now,
    })
}

/// Explain why a card in hand is not among the legal moves.
fn illegal_reason(state: &GameState, who: Position, card: Card) -> DomainError {
    let hand = state.hand(who);
    let lead = state.round.trick.as_ref().and_then(Trick::lead_suit);
    match lead {
        None if state.round.is_first_trick() => DomainError::MustLeadTwoOfClubs,
        None => DomainError::HeartsNotBroken,
        Some(lead) if hand_has_suit(hand, lead) && card.suit != lead => {
            DomainError::MustFollowSuit
        }
        Some(_) => DomainError::NoPointsOnFirstTrick,
    }
}

/// Award the complete trick to its winner and set up the next one.
pub fn collect_trick(state: &mut GameState) -> Result<CollectResult, DomainError> {
    let trick = state
        .round
        .trick
        .take()
        .ok_or_else(|| DomainError::Other("no trick to collect".into()))?;
    let Some(winner) = trick.winner() else {
        state.round.trick = Some(trick);
        return Err(DomainError::Other("trick is not complete".into()));
    };

    let points = trick.points();
    state.round.points_taken[winner.index()] += points;
    state.round.tricks_played += 1;

    let round_complete = state.round.tricks_played >= TRICKS_PER_ROUND
        || state.hands.iter().all(|h| h.is_empty());
    if !round_complete {
        state.round.trick = Some(Trick::new(winner));
    }

    Ok(CollectResult {
        winner,
        points,
        round_complete,
    })
}
