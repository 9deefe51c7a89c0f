//! Table view: seats the agents, listens to every table event and turns it
//! into [`RenderUpdate`]s.

pub mod display;
pub mod renderer;

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Weak};

use tracing::{debug, info};

pub use display::ScoreTable;
pub use renderer::{RenderUpdate, Renderer};

use crate::agents::{Agent, AutonomousAgent, HumanAgent};
use crate::ai::create_strategy;
use crate::config::TableConfig;
use crate::domain::scoring::leader_by_lowest;
use crate::domain::{GamePhase, Position};
use crate::engine::{
    Controller, EventKind, GameEvent, HeartsController, HeartsModel, Subscription,
};
use crate::error::ClientError;

/// A seated, running table.
///
/// Owns one agent per seat and the view subscriptions; dropping it stops the
/// robots and detaches the renderer.
pub struct TableView {
    inner: Arc<ViewInner>,
    controller: Arc<dyn Controller>,
    seats: Vec<Agent>,
    _subscriptions: Vec<Subscription>,
}

struct ViewInner {
    model: HeartsModel,
    renderer: Arc<dyn Renderer>,
    human_position: Position,
    /// Completed rounds seen through `scoreupdate`.
    current_round: AtomicU32,
}

impl TableView {
    /// Build the reference engine from `config`, seat everyone and start the game.
    pub fn start(config: &TableConfig, renderer: Arc<dyn Renderer>) -> Result<Self, ClientError> {
        let model = HeartsModel::new(config.rules.clone());
        let controller: Arc<dyn Controller> = Arc::new(HeartsController::new(model.clone()));
        Self::start_with(config, model, controller, renderer)
    }

    /// Seat everyone against an existing model and controller, then start the game.
    pub fn start_with(
        config: &TableConfig,
        model: HeartsModel,
        controller: Arc<dyn Controller>,
        renderer: Arc<dyn Renderer>,
    ) -> Result<Self, ClientError> {
        config.validate()?;

        let inner = Arc::new(ViewInner {
            model: model.clone(),
            renderer,
            human_position: config.human_position,
            current_round: AtomicU32::new(0),
        });
        let subscriptions = EventKind::ALL
            .into_iter()
            .map(|kind| {
                let weak: Weak<ViewInner> = Arc::downgrade(&inner);
                model.subscribe(kind, move |event| {
                    if let Some(view) = weak.upgrade() {
                        view.on_event(event);
                    }
                })
            })
            .collect();

        let mut seats = Vec::with_capacity(Position::ALL.len());
        for position in Position::ALL {
            if position == config.human_position {
                seats.push(Agent::Human(HumanAgent::new(
                    position,
                    model.clone(),
                    Arc::clone(&controller),
                )));
            } else {
                let strategy = create_strategy(&config.robot_strategy, &config.strategy_config)?;
                seats.push(Agent::Autonomous(AutonomousAgent::new(
                    position,
                    model.clone(),
                    Arc::clone(&controller),
                    strategy,
                )?));
            }
        }

        let names = Position::ALL.map(|p| {
            if p == config.human_position {
                config.player_name.clone()
            } else {
                display::robot_name(p)
            }
        });
        info!(
            human = %config.human_position,
            strategy = %config.robot_strategy,
            "table seated"
        );
        controller.start_game(names)?;

        Ok(Self {
            inner,
            controller,
            seats,
            _subscriptions: subscriptions,
        })
    }

    pub fn model(&self) -> &HeartsModel {
        &self.inner.model
    }

    pub fn controller(&self) -> &Arc<dyn Controller> {
        &self.controller
    }

    pub fn seats(&self) -> &[Agent] {
        &self.seats
    }

    pub fn human(&self) -> Option<&HumanAgent> {
        self.seats.iter().find_map(Agent::as_human)
    }

    /// Rounds completed so far.
    pub fn current_round(&self) -> u32 {
        self.inner.current_round.load(Ordering::Acquire)
    }

    pub fn score_table(&self) -> ScoreTable {
        ScoreTable::from_model(&self.inner.model)
    }

    /// Redraw phase, prompt and hands without touching the table.
    pub fn refresh(&self) {
        self.inner.render_phase();
    }
}

impl ViewInner {
    fn on_event(&self, event: &GameEvent) {
        debug!(event = %event.kind(), "view update");
        match event {
            GameEvent::StateUpdate => self.render_phase(),
            GameEvent::TrickStart => {
                self.renderer.render(&RenderUpdate::TrickCleared);
                self.render_hands();
            }
            GameEvent::TrickPlay { position, card } => {
                self.renderer.render(&RenderUpdate::CardPlayed {
                    position: *position,
                    name: self.model.player_name(*position),
                    card: *card,
                });
                self.render_hand(*position);
            }
            GameEvent::TrickCollected { position } => {
                let round_no = self.current_round.load(Ordering::Acquire) + 1;
                self.renderer.render(&RenderUpdate::TrickCollected {
                    position: *position,
                    message: display::trick_collected_message(&self.model.player_name(*position)),
                    scores: ScoreTable::with_current_round(&self.model, round_no),
                });
            }
            GameEvent::ScoreUpdate { moonshooter, .. } => {
                self.current_round.fetch_add(1, Ordering::AcqRel);
                let message =
                    moonshooter.map(|p| display::moon_message(&self.model.player_name(p)));
                self.renderer.render(&RenderUpdate::RoundScored {
                    message,
                    scores: ScoreTable::from_model(&self.model),
                });
            }
        }
    }

    fn render_phase(&self) {
        let phase = self.model.state();
        self.renderer.render(&RenderUpdate::Phase {
            label: display::phase_label(phase),
        });

        match phase {
            GamePhase::Setup => {}
            GamePhase::Passing => {
                let text = display::pass_prompt(self.model.passing());
                if text.is_some() {
                    self.renderer.render(&RenderUpdate::PassPrompt { text });
                    self.render_hands();
                }
            }
            GamePhase::Playing => {
                self.renderer.render(&RenderUpdate::PassPrompt { text: None });
                self.render_hands();
            }
            GamePhase::Complete => {
                let winner = leader_by_lowest(self.model.scores());
                let message = display::winner_message(&self.model.player_name(winner));
                info!(winner = %winner, "game over");
                self.renderer.render(&RenderUpdate::GameOver {
                    winner,
                    message,
                    scores: ScoreTable::from_model(&self.model),
                });
            }
        }
    }

    fn render_hands(&self) {
        for position in Position::ALL {
            self.render_hand(position);
        }
    }

    fn render_hand(&self, position: Position) {
        let hand = self.model.hand(position);
        let face_up = position == self.human_position;
        self.renderer.render(&RenderUpdate::Hand {
            position,
            count: hand.len(),
            cards: if face_up { hand } else { Vec::new() },
            face_up,
        });
    }
}
