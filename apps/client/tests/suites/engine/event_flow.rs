use std::collections::HashSet;

use hearts_client::engine::{EventKind, GameEvent};
use hearts_client::{Card, Controller, GamePhase, PassingDirection, Position};

use crate::support::recording::EventRecorder;
use crate::support::table::{names, recorded_table, rules};

#[tokio::test]
async fn left_pass_hands_the_lead_to_the_two_of_clubs_holder() {
    let (model, controller) = recorded_table(rules(42));
    controller.start_game(names()).unwrap();
    assert_eq!(model.passing(), PassingDirection::Left);
    let events = EventRecorder::attach(&model);

    let mut sent = Vec::new();
    for p in Position::ALL {
        let hand = model.hand(p);
        assert_eq!(hand.len(), 13);
        let cards = [hand[10], hand[11], hand[12]];
        sent.push((p, cards));
        controller.pass_cards(p, cards).await.unwrap();
        if p != Position::West {
            assert_eq!(model.state(), GamePhase::Passing, "waits for all four");
        }
    }

    assert_eq!(model.state(), GamePhase::Playing);
    assert_eq!(
        events.events(),
        vec![GameEvent::StateUpdate, GameEvent::TrickStart]
    );
    let leader = model.next_to_play().unwrap();
    assert!(model.hand(leader).contains(&Card::TWO_OF_CLUBS));

    for (from, cards) in sent {
        let to = from.next();
        let received = model.hand(to);
        assert!(cards.iter().all(|c| received.contains(c)), "{from} passed to {to}");
        let mut sorted = received.clone();
        sorted.sort();
        assert_eq!(received, sorted, "hands are re-sorted after the exchange");
    }
}

#[tokio::test]
async fn every_collection_follows_four_plays_from_distinct_seats() {
    let (model, controller) = recorded_table(rules(8));
    controller.start_game(names()).unwrap();
    for p in Position::ALL {
        let hand = model.hand(p);
        controller.pass_cards(p, [hand[0], hand[1], hand[2]]).await.unwrap();
    }
    let events = EventRecorder::attach(&model);

    while model.round_no() == 1 {
        let who = model.next_to_play().unwrap();
        let card = model.legal_moves(who)[0];
        controller.play_card(who, card).await.unwrap();
    }

    let mut seats = HashSet::new();
    let mut collections = 0;
    for event in events.events() {
        match event {
            GameEvent::TrickPlay { position, .. } => {
                assert!(seats.insert(position), "{position} played twice in one trick");
            }
            GameEvent::TrickCollected { .. } => {
                assert_eq!(seats.len(), 4);
                seats.clear();
                collections += 1;
            }
            _ => {}
        }
    }
    assert_eq!(collections, 13);
    assert_eq!(events.count(EventKind::ScoreUpdate), 1);
}

#[tokio::test]
async fn score_update_carries_the_logged_entry() {
    let (model, controller) = recorded_table(rules(77));
    controller.start_game(names()).unwrap();
    for p in Position::ALL {
        let hand = model.hand(p);
        controller.pass_cards(p, [hand[0], hand[1], hand[2]]).await.unwrap();
    }
    let events = EventRecorder::attach(&model);
    while model.round_no() == 1 {
        let who = model.next_to_play().unwrap();
        let card = model.legal_moves(who)[0];
        controller.play_card(who, card).await.unwrap();
    }

    let (entry, moonshooter) = events
        .events()
        .into_iter()
        .find_map(|e| match e {
            GameEvent::ScoreUpdate { entry, moonshooter } => Some((entry, moonshooter)),
            _ => None,
        })
        .unwrap();
    assert_eq!(model.score_log().entries(), &[entry]);
    match moonshooter {
        Some(shooter) => {
            assert_eq!(entry.total(), 78);
            assert_eq!(entry[shooter], 0);
        }
        None => assert_eq!(entry.total(), 26),
    }
    for p in Position::ALL {
        assert_eq!(model.current_game_points(p), 0, "round points reset after scoring");
    }
}

#[tokio::test]
async fn restarting_resets_scores_and_names() {
    let (model, controller) = recorded_table(rules(2));
    controller.start_game(names()).unwrap();
    let first_hand = model.hand(Position::North);

    let renamed = ["A", "B", "C", "D"].map(String::from);
    controller.start_game(renamed).unwrap();
    assert_eq!(model.player_name(Position::East), "B");
    assert_eq!(model.round_no(), 1);
    assert!(model.score_log().is_empty());
    assert_eq!(model.hand(Position::North), first_hand, "same seed, same deal");
}
