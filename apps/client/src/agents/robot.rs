//! Autonomous seat: reacts to table events with a delayed strategy decision.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use super::deliberation::{Deliberation, Slot};
use super::{PASS_DELAY, TRICK_PLAY_DELAY, TRICK_START_DELAY};
use crate::ai::{Strategy, StrategyError};
use crate::domain::rules::PASS_SIZE;
use crate::domain::{Card, GamePhase, PassingDirection, Position};
use crate::engine::{Controller, EventKind, GameEvent, HeartsModel, Subscription};
use crate::error::ClientError;

/// Robot player bound to one seat.
///
/// Dropping the agent unsubscribes it and cancels any pending deliberation.
pub struct AutonomousAgent {
    inner: Arc<RobotInner>,
    _subscriptions: Vec<Subscription>,
}

struct RobotInner {
    position: Position,
    model: HeartsModel,
    controller: Arc<dyn Controller>,
    strategy: Box<dyn Strategy>,
    deliberation: Deliberation,
    /// Round whose pass has been scheduled or submitted.
    pass_round: Mutex<Option<u32>>,
    /// Set while a command is awaiting the controller.
    acting: AtomicBool,
}

impl AutonomousAgent {
    /// Seat a robot and subscribe it to the table. Must run inside a tokio runtime.
    pub fn new(
        position: Position,
        model: HeartsModel,
        controller: Arc<dyn Controller>,
        strategy: Box<dyn Strategy>,
    ) -> Result<Self, ClientError> {
        let inner = Arc::new(RobotInner {
            position,
            model,
            controller,
            strategy,
            deliberation: Deliberation::current()?,
            pass_round: Mutex::new(None),
            acting: AtomicBool::new(false),
        });

        let subscriptions = [
            EventKind::StateUpdate,
            EventKind::TrickStart,
            EventKind::TrickPlay,
        ]
        .into_iter()
        .map(|kind| {
            let weak = Arc::downgrade(&inner);
            inner.model.subscribe(kind, move |event| {
                if let Some(robot) = weak.upgrade() {
                    robot.on_event(&weak, event);
                }
            })
        })
        .collect();

        debug!(position = %position, "robot seated");
        Ok(Self {
            inner,
            _subscriptions: subscriptions,
        })
    }

    pub fn position(&self) -> Position {
        self.inner.position
    }

    /// Whether a pass or play is waiting out its delay.
    pub fn is_deliberating(&self) -> bool {
        self.inner.deliberation.is_scheduled(Slot::Pass)
            || self.inner.deliberation.is_scheduled(Slot::Play)
    }
}

impl RobotInner {
    fn on_event(&self, weak: &Weak<RobotInner>, event: &GameEvent) {
        match event {
            GameEvent::StateUpdate => self.on_state_update(weak),
            GameEvent::TrickStart => self.schedule_play(weak, TRICK_START_DELAY),
            GameEvent::TrickPlay { .. } => self.schedule_play(weak, TRICK_PLAY_DELAY),
            GameEvent::TrickCollected { .. } | GameEvent::ScoreUpdate { .. } => {}
        }
    }

    fn on_state_update(&self, weak: &Weak<RobotInner>) {
        let phase = self.model.state();
        if phase != GamePhase::Playing {
            self.deliberation.cancel(Slot::Play);
        }
        if phase != GamePhase::Passing || self.model.passing() == PassingDirection::None {
            self.deliberation.cancel(Slot::Pass);
            return;
        }

        let round = self.model.round_no();
        {
            let mut pass_round = self.pass_round.lock();
            if *pass_round == Some(round) || self.model.has_passed(self.position) {
                debug!(position = %self.position, round, "pass already handled this round");
                return;
            }
            *pass_round = Some(round);
        }

        debug!(position = %self.position, round, delay_ms = PASS_DELAY.as_millis() as u64, "scheduling pass");
        let weak = weak.clone();
        self.deliberation.schedule(Slot::Pass, PASS_DELAY, async move {
            if let Some(robot) = weak.upgrade() {
                robot.pass(round).await;
            }
        });
    }

    fn schedule_play(&self, weak: &Weak<RobotInner>, delay: std::time::Duration) {
        if self.model.state() != GamePhase::Playing {
            return;
        }
        debug!(position = %self.position, delay_ms = delay.as_millis() as u64, "scheduling play check");
        let weak = weak.clone();
        self.deliberation.schedule(Slot::Play, delay, async move {
            if let Some(robot) = weak.upgrade() {
                robot.play().await;
            }
        });
    }

    async fn pass(&self, round: u32) {
        if self.model.state() != GamePhase::Passing
            || self.model.round_no() != round
            || self.model.has_passed(self.position)
        {
            debug!(position = %self.position, round, "pass no longer wanted");
            return;
        }

        let hand = self.model.hand(self.position);
        let cards = match self
            .strategy
            .select_cards_to_pass(&hand)
            .and_then(|cards| verify_pass(&hand, cards))
        {
            Ok(cards) => cards,
            Err(err) => {
                warn!(position = %self.position, round, error = %err, "strategy failed to choose a pass");
                self.release_pass(round);
                return;
            }
        };

        if !self.begin_command() {
            self.release_pass(round);
            return;
        }
        let result = self.controller.pass_cards(self.position, cards).await;
        self.acting.store(false, Ordering::Release);

        match result {
            Ok(()) => info!(position = %self.position, round, "robot passed"),
            Err(err) => {
                warn!(position = %self.position, round, error = %err, "robot pass rejected");
                self.release_pass(round);
            }
        }
    }

    async fn play(&self) {
        if self.model.state() != GamePhase::Playing
            || self.model.next_to_play() != Some(self.position)
        {
            return;
        }

        let legal: Vec<Card> = self
            .model
            .hand(self.position)
            .into_iter()
            .filter(|&c| self.controller.is_playable(self.position, c))
            .collect();
        if legal.is_empty() {
            warn!(position = %self.position, "no legal move available; turn stalls");
            return;
        }

        let card = match self
            .strategy
            .select_card_to_play(&legal)
            .and_then(|card| verify_play(&legal, card))
        {
            Ok(card) => card,
            Err(err) => {
                warn!(position = %self.position, error = %err, "strategy failed to choose a card");
                return;
            }
        };

        if !self.begin_command() {
            return;
        }
        let result = self.controller.play_card(self.position, card).await;
        self.acting.store(false, Ordering::Release);

        match result {
            Ok(()) => info!(position = %self.position, card = %card, "robot played"),
            Err(err) => warn!(position = %self.position, card = %card, error = %err, "robot play rejected"),
        }
    }

    /// Claim the single in-flight command for this seat.
    fn begin_command(&self) -> bool {
        let claimed = self
            .acting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if !claimed {
            debug!(position = %self.position, "command already in flight");
        }
        claimed
    }

    fn release_pass(&self, round: u32) {
        let mut pass_round = self.pass_round.lock();
        if *pass_round == Some(round) {
            *pass_round = None;
        }
    }
}

fn verify_pass(hand: &[Card], cards: [Card; PASS_SIZE]) -> Result<[Card; PASS_SIZE], StrategyError> {
    for (i, card) in cards.iter().enumerate() {
        if !hand.contains(card) {
            return Err(StrategyError::InvalidChoice(format!("{card} is not in hand")));
        }
        if cards[..i].contains(card) {
            return Err(StrategyError::InvalidChoice(format!("{card} chosen twice")));
        }
    }
    Ok(cards)
}

fn verify_play(legal: &[Card], card: Card) -> Result<Card, StrategyError> {
    if legal.contains(&card) {
        Ok(card)
    } else {
        Err(StrategyError::InvalidChoice(format!("{card} is not a legal play")))
    }
}
