//! Recording wrappers for controllers, renderers and event streams.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use hearts_client::domain::rules::PASS_SIZE;
use hearts_client::engine::{EventKind, GameEvent, HeartsController, HeartsModel, Subscription};
use hearts_client::{Card, ClientError, Controller, Position, RenderUpdate, Renderer};
use parking_lot::Mutex;

/// A command as it reached the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Pass {
        round: u32,
        position: Position,
        cards: [Card; PASS_SIZE],
    },
    Play {
        position: Position,
        card: Card,
        /// Seat whose turn it was when the command arrived.
        turn: Option<Position>,
    },
}

/// Wraps [`HeartsController`] and records every submission and rejection.
pub struct RecordingController {
    inner: HeartsController,
    submissions: Mutex<Vec<Submission>>,
    rejections: Mutex<Vec<String>>,
    /// When set, `is_playable` answers false for every card.
    refuse_plays: AtomicBool,
}

impl RecordingController {
    pub fn new(model: HeartsModel) -> Arc<Self> {
        Arc::new(Self {
            inner: HeartsController::new(model),
            submissions: Mutex::new(Vec::new()),
            rejections: Mutex::new(Vec::new()),
            refuse_plays: AtomicBool::new(false),
        })
    }

    pub fn model(&self) -> &HeartsModel {
        self.inner.model()
    }

    /// Report every card as unplayable from now on.
    pub fn refuse_plays(&self) {
        self.refuse_plays.store(true, Ordering::SeqCst);
    }

    /// Plays submitted by `position`.
    pub fn plays_by(&self, position: Position) -> Vec<Card> {
        self.submissions
            .lock()
            .iter()
            .filter_map(|s| match s {
                Submission::Play {
                    position: p, card, ..
                } if *p == position => Some(*card),
                _ => None,
            })
            .collect()
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().clone()
    }

    pub fn rejections(&self) -> Vec<String> {
        self.rejections.lock().clone()
    }

    /// Pass submissions per (round, seat).
    pub fn pass_counts(&self) -> HashMap<(u32, Position), usize> {
        let mut counts = HashMap::new();
        for s in self.submissions.lock().iter() {
            if let Submission::Pass {
                round, position, ..
            } = s
            {
                *counts.entry((*round, *position)).or_insert(0) += 1;
            }
        }
        counts
    }

    pub fn passes_by(&self, position: Position) -> Vec<[Card; PASS_SIZE]> {
        self.submissions
            .lock()
            .iter()
            .filter_map(|s| match s {
                Submission::Pass {
                    position: p, cards, ..
                } if *p == position => Some(*cards),
                _ => None,
            })
            .collect()
    }

    /// Plays submitted while it was another seat's turn.
    pub fn out_of_turn_plays(&self) -> Vec<Submission> {
        self.submissions
            .lock()
            .iter()
            .filter(|s| matches!(s, Submission::Play { position, turn, .. } if *turn != Some(*position)))
            .cloned()
            .collect()
    }

    fn note<T>(&self, result: Result<T, ClientError>) -> Result<T, ClientError> {
        if let Err(err) = &result {
            self.rejections.lock().push(err.to_string());
        }
        result
    }
}

#[async_trait]
impl Controller for RecordingController {
    async fn pass_cards(
        &self,
        position: Position,
        cards: [Card; PASS_SIZE],
    ) -> Result<(), ClientError> {
        self.submissions.lock().push(Submission::Pass {
            round: self.model().round_no(),
            position,
            cards,
        });
        let result = self.inner.pass_cards(position, cards).await;
        self.note(result)
    }

    async fn play_card(&self, position: Position, card: Card) -> Result<(), ClientError> {
        self.submissions.lock().push(Submission::Play {
            position,
            card,
            turn: self.model().next_to_play(),
        });
        let result = self.inner.play_card(position, card).await;
        self.note(result)
    }

    fn is_playable(&self, position: Position, card: Card) -> bool {
        !self.refuse_plays.load(Ordering::SeqCst) && self.inner.is_playable(position, card)
    }

    fn start_game(&self, names: [String; 4]) -> Result<(), ClientError> {
        self.inner.start_game(names)
    }
}

/// Collects every event the model publishes.
pub struct EventRecorder {
    events: Arc<Mutex<Vec<GameEvent>>>,
    _subscriptions: Vec<Subscription>,
}

impl EventRecorder {
    pub fn attach(model: &HeartsModel) -> Self {
        let events = Arc::new(Mutex::new(Vec::new()));
        let subscriptions = EventKind::ALL
            .into_iter()
            .map(|kind| {
                let events = Arc::clone(&events);
                model.subscribe(kind, move |e| events.lock().push(e.clone()))
            })
            .collect();
        Self {
            events,
            _subscriptions: subscriptions,
        }
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.events.lock().clone()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.events.lock().iter().filter(|e| e.kind() == kind).count()
    }
}

/// Renderer that keeps every update.
#[derive(Default)]
pub struct RecordingRenderer {
    updates: Mutex<Vec<RenderUpdate>>,
}

impl RecordingRenderer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn updates(&self) -> Vec<RenderUpdate> {
        self.updates.lock().clone()
    }

    pub fn clear(&self) {
        self.updates.lock().clear();
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, update: &RenderUpdate) {
        self.updates.lock().push(update.clone());
    }
}
