use std::time::Duration;

use hearts_client::agents::PASS_DELAY;
use hearts_client::{Controller, GamePhase, PassingDirection, Position};

use crate::support::table::{names, recorded_table, rules, run_until, seat_robots};

#[tokio::test(start_paused = true)]
async fn robots_pass_once_after_the_delay() {
    let (model, controller) = recorded_table(rules(17));
    let _robots = seat_robots(&model, &controller, &Position::ALL);
    controller.start_game(names()).unwrap();

    tokio::time::sleep(PASS_DELAY - Duration::from_millis(1)).await;
    assert!(controller.submissions().is_empty(), "nobody passes early");

    tokio::time::sleep(Duration::from_millis(2)).await;
    let counts = controller.pass_counts();
    for p in Position::ALL {
        assert_eq!(counts.get(&(1, p)), Some(&1), "{p} passed once");
    }
    assert_eq!(model.state(), GamePhase::Playing);
}

#[tokio::test(start_paused = true)]
async fn repeated_state_updates_do_not_double_pass() {
    let (model, controller) = recorded_table(rules(4));
    let _robots = seat_robots(&model, &controller, &[Position::North, Position::East]);
    controller.start_game(names()).unwrap();

    model.republish_state();
    tokio::time::sleep(Duration::from_millis(400)).await;
    model.republish_state();
    tokio::time::sleep(Duration::from_millis(1000)).await;
    model.republish_state();
    tokio::time::sleep(Duration::from_millis(2000)).await;

    assert_eq!(controller.passes_by(Position::North).len(), 1);
    assert_eq!(controller.passes_by(Position::East).len(), 1);
    assert!(controller.rejections().is_empty());
    assert_eq!(model.state(), GamePhase::Passing, "south and west still owe passes");
}

#[tokio::test(start_paused = true)]
async fn robot_passes_three_distinct_cards_it_held() {
    let (model, controller) = recorded_table(rules(23));
    let _robots = seat_robots(&model, &controller, &[Position::West]);
    controller.start_game(names()).unwrap();
    let hand = model.hand(Position::West);

    run_until(Duration::from_secs(5), || model.has_passed(Position::West)).await;

    let passes = controller.passes_by(Position::West);
    assert_eq!(passes.len(), 1);
    let cards = passes[0];
    assert!(cards.iter().all(|c| hand.contains(c)));
    assert_ne!(cards[0], cards[1]);
    assert_ne!(cards[1], cards[2]);
    assert_ne!(cards[0], cards[2]);
    let mut ranks: Vec<u8> = hand.iter().map(|c| c.rank.value()).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    let mut passed: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    passed.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(passed, ranks[..3].to_vec(), "lowball passes its three highest ranks");
}

#[tokio::test(start_paused = true)]
async fn every_seat_passes_exactly_once_per_passing_round() {
    let (model, controller) = recorded_table(rules(99));
    let _robots = seat_robots(&model, &controller, &Position::ALL);
    controller.start_game(names()).unwrap();

    let finished = run_until(Duration::from_secs(4 * 3600), || {
        model.state() == GamePhase::Complete
    })
    .await;
    assert!(finished, "an all-robot game runs to completion");

    let rounds = model.score_log().len() as u32;
    let counts = controller.pass_counts();
    for round in 1..=rounds {
        let expected = usize::from(PassingDirection::for_round(round) != PassingDirection::None);
        for p in Position::ALL {
            assert_eq!(
                counts.get(&(round, p)).copied().unwrap_or(0),
                expected,
                "round {round}, {p}"
            );
        }
    }
    assert!(controller.rejections().is_empty(), "{:?}", controller.rejections());
}

#[tokio::test(start_paused = true)]
async fn dropping_a_robot_cancels_its_pending_pass() {
    let (model, controller) = recorded_table(rules(6));
    let robots = seat_robots(&model, &controller, &[Position::North, Position::South]);
    controller.start_game(names()).unwrap();

    tokio::time::sleep(Duration::from_millis(500)).await;
    let (north, south): (Vec<_>, Vec<_>) = robots
        .into_iter()
        .partition(|r| r.position() == Position::North);
    assert!(north[0].is_deliberating());
    drop(south);

    tokio::time::sleep(Duration::from_millis(2000)).await;
    assert!(model.has_passed(Position::North));
    assert!(!model.has_passed(Position::South));
}
