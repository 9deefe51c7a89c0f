use crate::domain::errors::DomainError;
use crate::domain::passing::submit_pass;
use crate::domain::position::Position;
use crate::domain::state::GamePhase;
use crate::domain::test_state_helpers::{parse_cards, passing_state};
use crate::domain::Card;

fn three(tokens: [&str; 3]) -> [Card; 3] {
    let cards = parse_cards(&tokens);
    [cards[0], cards[1], cards[2]]
}

fn hands() -> [Vec<Card>; 4] {
    [
        parse_cards(&["2C", "3C", "4C", "AH"]),
        parse_cards(&["5C", "6C", "7C", "KH"]),
        parse_cards(&["8C", "9C", "TC", "QS"]),
        parse_cards(&["JC", "QC", "KC", "AS"]),
    ]
}

#[test]
fn exchange_waits_for_all_four_seats() {
    let mut state = passing_state(hands());
    let outcome = submit_pass(&mut state, Position::North, three(["2C", "3C", "AH"])).unwrap();
    assert!(!outcome.exchanged);
    assert_eq!(state.phase, GamePhase::Passing);
    // Nothing moves until everyone committed.
    assert_eq!(state.hand(Position::North).len(), 4);
}

#[test]
fn full_exchange_moves_cards_left_and_starts_play() {
    let mut state = passing_state(hands());
    submit_pass(&mut state, Position::North, three(["2C", "3C", "AH"])).unwrap();
    submit_pass(&mut state, Position::East, three(["5C", "6C", "KH"])).unwrap();
    submit_pass(&mut state, Position::South, three(["8C", "9C", "QS"])).unwrap();
    let outcome = submit_pass(&mut state, Position::West, three(["JC", "QC", "AS"])).unwrap();

    assert!(outcome.exchanged);
    assert_eq!(state.phase, GamePhase::Playing);
    // North passed the 2C to east, who now leads.
    assert_eq!(outcome.leader, Some(Position::East));
    assert_eq!(state.next_to_play(), Some(Position::East));
    assert_eq!(
        state.hand(Position::East),
        parse_cards(&["2C", "3C", "7C", "AH"]).as_slice()
    );
    assert_eq!(
        state.hand(Position::North),
        parse_cards(&["4C", "JC", "QC", "AS"]).as_slice()
    );
    for p in Position::ALL {
        assert_eq!(state.hand(p).len(), 4);
    }
}

#[test]
fn second_pass_from_same_seat_is_rejected() {
    let mut state = passing_state(hands());
    submit_pass(&mut state, Position::South, three(["8C", "9C", "QS"])).unwrap();
    assert_eq!(
        submit_pass(&mut state, Position::South, three(["8C", "9C", "TC"])).unwrap_err(),
        DomainError::AlreadyPassed(Position::South)
    );
}

#[test]
fn pass_validation() {
    let mut state = passing_state(hands());
    assert!(matches!(
        submit_pass(&mut state, Position::South, three(["8C", "8C", "QS"])).unwrap_err(),
        DomainError::InvalidPass(_)
    ));
    assert_eq!(
        submit_pass(&mut state, Position::South, three(["8C", "9C", "AH"])).unwrap_err(),
        DomainError::CardNotInHand
    );

    state.round.passing = crate::domain::PassingDirection::None;
    assert_eq!(
        submit_pass(&mut state, Position::South, three(["8C", "9C", "QS"])).unwrap_err(),
        DomainError::NoPassingThisRound
    );

    state.phase = GamePhase::Playing;
    assert_eq!(
        submit_pass(&mut state, Position::South, three(["8C", "9C", "QS"])).unwrap_err(),
        DomainError::PhaseMismatch
    );
}
