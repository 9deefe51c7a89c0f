use std::sync::Arc;
use std::time::Duration;

use hearts_client::ai::StrategyConfig;
use hearts_client::engine::HeartsModel;
use hearts_client::view::display::{pass_prompt, phase_label};
use hearts_client::{
    ClientError, Controller, GamePhase, PassingDirection, Position, RenderUpdate, TableConfig,
    TableView,
};

use crate::support::recording::{RecordingController, RecordingRenderer};
use crate::support::table::{autopilot_game, rules};

fn config(seed: u64) -> TableConfig {
    TableConfig {
        player_name: "Ada".into(),
        rules: rules(seed),
        ..TableConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn start_seats_robots_and_announces_passing() {
    let renderer = RecordingRenderer::new();
    let table = TableView::start(&config(10), renderer.clone()).unwrap();
    let model = table.model();

    assert_eq!(model.player_name(Position::South), "Ada");
    assert_eq!(model.player_name(Position::North), "RobotNorth");
    assert_eq!(model.player_name(Position::East), "RobotEast");
    assert_eq!(model.player_name(Position::West), "RobotWest");
    assert_eq!(table.seats().iter().filter(|a| a.is_human()).count(), 1);
    assert_eq!(table.human().map(|h| h.position()), Some(Position::South));

    let updates = renderer.updates();
    assert_eq!(
        updates[0],
        RenderUpdate::Phase {
            label: phase_label(GamePhase::Passing)
        }
    );
    assert_eq!(
        updates[1],
        RenderUpdate::PassPrompt {
            text: pass_prompt(PassingDirection::Left)
        }
    );
    let hands: Vec<(Position, bool, usize, usize)> = updates
        .iter()
        .filter_map(|u| match u {
            RenderUpdate::Hand {
                position,
                cards,
                count,
                face_up,
            } => Some((*position, *face_up, cards.len(), *count)),
            _ => None,
        })
        .collect();
    assert_eq!(hands.len(), 4);
    assert!(hands.iter().all(|(p, up, _, _)| *up == (*p == Position::South)));
    for (position, face_up, shown, count) in hands {
        assert_eq!(count, 13, "{position:?} holds a full hand");
        assert_eq!(shown, if face_up { 13 } else { 0 }, "robot cards stay hidden");
    }
}

#[tokio::test(start_paused = true)]
async fn unknown_robot_strategy_fails_to_seat() {
    let renderer = RecordingRenderer::new();
    let config = TableConfig {
        robot_strategy: "Shark".into(),
        ..config(1)
    };
    let err = TableView::start(&config, renderer).err().unwrap();
    assert!(matches!(err, ClientError::UnknownStrategy(name) if name == "Shark"));
}

#[tokio::test(start_paused = true)]
async fn full_game_through_the_view() {
    let renderer = RecordingRenderer::new();
    let config = TableConfig {
        robot_strategy: "RandomPlayer".into(),
        strategy_config: StrategyConfig::with_seed(3),
        ..config(55)
    };
    let model = HeartsModel::new(config.rules.clone());
    let controller = RecordingController::new(model.clone());
    let table = TableView::start_with(
        &config,
        model.clone(),
        controller.clone() as Arc<dyn Controller>,
        renderer.clone(),
    )
    .unwrap();
    let human = table.human().unwrap();

    let done = autopilot_game(human, &model, Duration::from_secs(6 * 3600)).await;
    assert!(done, "game completes");
    assert!(controller.out_of_turn_plays().is_empty());

    let updates = renderer.updates();
    let rounds = model.score_log().len();
    assert_eq!(table.current_round() as usize, rounds);

    let scored: Vec<_> = updates
        .iter()
        .filter(|u| matches!(u, RenderUpdate::RoundScored { .. }))
        .collect();
    assert_eq!(scored.len(), rounds);

    let collected = updates
        .iter()
        .filter(|u| matches!(u, RenderUpdate::TrickCollected { .. }))
        .count();
    assert_eq!(collected, rounds * 13);

    match updates.last() {
        Some(RenderUpdate::GameOver {
            winner,
            message,
            scores,
        }) => {
            let name = model.player_name(*winner);
            assert_eq!(message, &format!("Game Over! {name} wins!"));
            assert_eq!(scores.totals(), model.scores());
            assert_eq!(scores.rounds().len(), rounds);
            let best = *model.scores().iter().min().unwrap();
            assert_eq!(model.score(*winner), best);
        }
        other => panic!("expected game over, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn trick_collected_shows_interim_points() {
    let renderer = RecordingRenderer::new();
    let table = TableView::start(&config(19), renderer.clone()).unwrap();
    let model = table.model().clone();
    let human = table.human().unwrap();

    // Drive until the first trick of round one is collected.
    let mut waited = Duration::ZERO;
    while model.snapshot().round.tricks_played == 0 && waited < Duration::from_secs(60) {
        if !crate::support::table::autopilot_step(human, &model).await {
            tokio::time::sleep(Duration::from_millis(250)).await;
            waited += Duration::from_millis(250);
        }
    }

    let collected = renderer
        .updates()
        .into_iter()
        .find_map(|u| match u {
            RenderUpdate::TrickCollected {
                position,
                message,
                scores,
            } => Some((position, message, scores)),
            _ => None,
        })
        .expect("a trick was collected");
    let (position, message, scores) = collected;
    assert_eq!(message, format!("Trick collected by {}", model.player_name(position)));
    let (round_no, points) = scores.current().unwrap();
    assert_eq!(round_no, 1);
    assert_eq!(points.iter().map(|&p| p as u16).sum::<u16>(), 0, "first trick holds no points");
    assert!(scores.rounds().is_empty());
}

#[tokio::test(start_paused = true)]
async fn refresh_redraws_without_changing_state() {
    let renderer = RecordingRenderer::new();
    let table = TableView::start(&config(2), renderer.clone()).unwrap();
    renderer.clear();
    let before = table.model().snapshot().hands;

    table.refresh();
    let updates = renderer.updates();
    assert!(matches!(updates[0], RenderUpdate::Phase { .. }));
    assert_eq!(table.model().snapshot().hands, before);
    assert_eq!(table.score_table().totals(), [0; 4]);
}
