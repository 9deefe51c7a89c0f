//! Table setup and driving helpers.

use std::sync::Arc;
use std::time::Duration;

use hearts_client::agents::{AutonomousAgent, HumanAgent};
use hearts_client::ai::Lowball;
use hearts_client::engine::HeartsModel;
use hearts_client::{Controller, GamePhase, Position, RulesConfig};

use super::recording::RecordingController;

pub fn rules(seed: u64) -> RulesConfig {
    RulesConfig {
        seed: Some(seed),
        ..RulesConfig::default()
    }
}

pub fn names() -> [String; 4] {
    Position::ALL.map(|p| format!("Robot{}", p.title()))
}

/// Model plus recording controller.
pub fn recorded_table(rules: RulesConfig) -> (HeartsModel, Arc<RecordingController>) {
    let model = HeartsModel::new(rules);
    let controller = RecordingController::new(model.clone());
    (model, controller)
}

/// Seat a Lowball robot at each of `positions`. Call from inside a runtime.
pub fn seat_robots(
    model: &HeartsModel,
    controller: &Arc<RecordingController>,
    positions: &[Position],
) -> Vec<AutonomousAgent> {
    positions
        .iter()
        .map(|&p| {
            AutonomousAgent::new(
                p,
                model.clone(),
                Arc::clone(controller) as Arc<dyn Controller>,
                Box::new(Lowball::new()),
            )
            .expect("inside a tokio runtime")
        })
        .collect()
}

/// Advance paused time in small steps until `done` holds or `limit` elapses.
pub async fn run_until(limit: Duration, mut done: impl FnMut() -> bool) -> bool {
    let step = Duration::from_millis(250);
    let mut waited = Duration::ZERO;
    while !done() {
        if waited >= limit {
            return false;
        }
        tokio::time::sleep(step).await;
        waited += step;
    }
    true
}

/// One move for a human seat: pass the first three cards or play the first legal card.
///
/// Returns false when there was nothing for the human to do.
pub async fn autopilot_step(human: &HumanAgent, model: &HeartsModel) -> bool {
    match model.state() {
        GamePhase::Passing if !human.has_passed() => {
            for card in model.hand(human.position()).into_iter().take(3) {
                human.toggle(card).expect("card from own hand");
            }
            human.submit_pass().await.expect("three cards selected");
            true
        }
        GamePhase::Playing if model.next_to_play() == Some(human.position()) => {
            let card = human.legal_cards()[0];
            human.play(card).await.expect("legal card");
            true
        }
        _ => false,
    }
}

/// Drive `human` until the game completes or `limit` of table time passes.
pub async fn autopilot_game(human: &HumanAgent, model: &HeartsModel, limit: Duration) -> bool {
    let step = Duration::from_millis(250);
    let mut waited = Duration::ZERO;
    while model.state() != GamePhase::Complete {
        if waited >= limit {
            return false;
        }
        if !autopilot_step(human, model).await {
            tokio::time::sleep(step).await;
            waited += step;
        }
    }
    true
}
