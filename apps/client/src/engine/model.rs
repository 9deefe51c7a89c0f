//! Authoritative table state plus the queries agents and the view read.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use super::events::{EventBus, EventKind, GameEvent, Subscription};
use crate::config::RulesConfig;
use crate::domain::tricks::legal_moves;
use crate::domain::{
    Card, GamePhase, GameState, PassingDirection, Position, ScoreEntry, ScoreLog, Trick,
};

/// Shared handle to the rules engine.
///
/// Cloning is cheap; every clone sees the same state and event bus. Mutation is
/// crate-private and goes through the controller.
#[derive(Clone)]
pub struct HeartsModel {
    inner: Arc<ModelInner>,
}

struct ModelInner {
    state: Mutex<GameState>,
    bus: EventBus,
    rules: RulesConfig,
}

impl HeartsModel {
    pub fn new(rules: RulesConfig) -> Self {
        Self {
            inner: Arc::new(ModelInner {
                state: Mutex::new(GameState::new()),
                bus: EventBus::new(),
                rules,
            }),
        }
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.inner.rules
    }

    pub fn state(&self) -> GamePhase {
        self.inner.state.lock().phase
    }

    pub fn passing(&self) -> PassingDirection {
        self.inner.state.lock().round.passing
    }

    /// 1-based number of the current round; 0 before the first deal.
    pub fn round_no(&self) -> u32 {
        self.inner.state.lock().round.round_no
    }

    pub fn hand(&self, position: Position) -> Vec<Card> {
        self.inner.state.lock().hand(position).to_vec()
    }

    pub fn current_trick(&self) -> Option<Trick> {
        self.inner.state.lock().round.trick.clone()
    }

    /// Seat whose turn it is, if a trick is waiting for a card.
    pub fn next_to_play(&self) -> Option<Position> {
        self.inner.state.lock().next_to_play()
    }

    /// Total across completed rounds.
    pub fn score(&self, position: Position) -> i16 {
        self.inner.state.lock().scores_total[position.index()]
    }

    pub fn scores(&self) -> [i16; 4] {
        self.inner.state.lock().scores_total
    }

    pub fn score_log(&self) -> ScoreLog {
        self.inner.state.lock().score_log.clone()
    }

    pub fn last_score_entry(&self) -> Option<ScoreEntry> {
        self.inner.state.lock().score_log.entries().last().copied()
    }

    /// Penalty points taken so far in the current round.
    pub fn current_game_points(&self, position: Position) -> u8 {
        self.inner.state.lock().round.points_taken[position.index()]
    }

    pub fn player_name(&self, position: Position) -> String {
        self.inner.state.lock().names[position.index()].clone()
    }

    /// Whether `position` has committed its pass this round.
    pub fn has_passed(&self, position: Position) -> bool {
        self.inner.state.lock().round.pending_passes[position.index()].is_some()
    }

    pub fn legal_moves(&self, position: Position) -> Vec<Card> {
        legal_moves(&self.inner.state.lock(), position)
    }

    pub fn snapshot(&self) -> GameState {
        self.inner.state.lock().clone()
    }

    pub fn subscribe<F>(&self, kind: EventKind, listener: F) -> Subscription
    where
        F: Fn(&GameEvent) + Send + Sync + 'static,
    {
        self.inner.bus.subscribe(kind, listener)
    }

    /// Re-announce the current phase to subscribers that joined late.
    ///
    /// Emits `StateUpdate`, plus `TrickStart` when a trick is waiting for its lead.
    pub fn republish_state(&self) {
        let mut events = vec![GameEvent::StateUpdate];
        {
            let state = self.inner.state.lock();
            let awaiting_lead = state.phase == GamePhase::Playing
                && state.round.trick.as_ref().is_some_and(Trick::is_empty);
            if awaiting_lead {
                events.push(GameEvent::TrickStart);
            }
        }
        self.emit_all(&events);
    }

    /// Run `f` under the state lock, then emit whatever events it queued.
    ///
    /// Events are only emitted when `f` succeeds, and never while the lock is held.
    pub(crate) fn mutate<T, E>(
        &self,
        f: impl FnOnce(&mut GameState, &mut Vec<GameEvent>) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut events = Vec::new();
        let out = {
            let mut state = self.inner.state.lock();
            f(&mut state, &mut events)?
        };
        self.emit_all(&events);
        Ok(out)
    }

    fn emit_all(&self, events: &[GameEvent]) {
        for event in events {
            debug!(event = %event.kind(), "publishing");
            self.inner.bus.emit(event);
        }
    }
}

impl Default for HeartsModel {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}
