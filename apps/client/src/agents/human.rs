//! Human seat: turns UI input into controller commands.
//!
//! The agent keeps the pass selection and enforces the same one-pass-per-round
//! and one-command-in-flight rules as the robots. It never acts on its own.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::domain::rules::PASS_SIZE;
use crate::domain::{Card, DomainError, GamePhase, Position};
use crate::engine::{Controller, EventKind, GameEvent, HeartsModel, Subscription};
use crate::error::ClientError;

/// Result of toggling a card in the pass selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Added,
    Removed,
    /// Three cards are already selected; nothing changed.
    Full,
}

/// What a card click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Pass(Selection),
    Played,
}

pub struct HumanAgent {
    inner: Arc<HumanInner>,
    _subscription: Subscription,
}

struct HumanInner {
    position: Position,
    model: HeartsModel,
    controller: Arc<dyn Controller>,
    selection: Mutex<Vec<Card>>,
    passed_round: Mutex<Option<u32>>,
    acting: AtomicBool,
}

impl HumanAgent {
    pub fn new(position: Position, model: HeartsModel, controller: Arc<dyn Controller>) -> Self {
        let inner = Arc::new(HumanInner {
            position,
            model,
            controller,
            selection: Mutex::new(Vec::with_capacity(PASS_SIZE)),
            passed_round: Mutex::new(None),
            acting: AtomicBool::new(false),
        });

        let weak = Arc::downgrade(&inner);
        let subscription = inner
            .model
            .subscribe(EventKind::StateUpdate, move |event| {
                if let (Some(human), GameEvent::StateUpdate) = (weak.upgrade(), event) {
                    human.on_state_update();
                }
            });

        Self {
            inner,
            _subscription: subscription,
        }
    }

    pub fn position(&self) -> Position {
        self.inner.position
    }

    /// Currently selected pass cards, in selection order.
    pub fn selection(&self) -> Vec<Card> {
        self.inner.selection.lock().clone()
    }

    pub fn is_selected(&self, card: Card) -> bool {
        self.inner.selection.lock().contains(&card)
    }

    /// Whether this seat already passed in the current round.
    pub fn has_passed(&self) -> bool {
        *self.inner.passed_round.lock() == Some(self.inner.model.round_no())
            || self.inner.model.has_passed(self.inner.position)
    }

    /// True when exactly three cards are selected and the pass is still open.
    pub fn ready_to_pass(&self) -> bool {
        self.inner.model.state() == GamePhase::Passing
            && !self.has_passed()
            && self.inner.selection.lock().len() == PASS_SIZE
    }

    /// Cards from the hand that may be played right now.
    pub fn legal_cards(&self) -> Vec<Card> {
        let inner = &self.inner;
        inner
            .model
            .hand(inner.position)
            .into_iter()
            .filter(|&c| inner.controller.is_playable(inner.position, c))
            .collect()
    }

    /// Add or remove `card` from the pass selection.
    pub fn toggle(&self, card: Card) -> Result<Selection, ClientError> {
        self.expect_phase(GamePhase::Passing)?;
        if self.has_passed() {
            return Err(ClientError::DoubleSubmission {
                position: self.inner.position,
            });
        }
        if !self.inner.model.hand(self.inner.position).contains(&card) {
            return Err(DomainError::CardNotInHand.into());
        }

        let mut selection = self.inner.selection.lock();
        if let Some(i) = selection.iter().position(|&c| c == card) {
            selection.remove(i);
            return Ok(Selection::Removed);
        }
        if selection.len() >= PASS_SIZE {
            return Ok(Selection::Full);
        }
        selection.push(card);
        Ok(Selection::Added)
    }

    /// Submit the three selected cards. One-shot per round.
    pub async fn submit_pass(&self) -> Result<[Card; PASS_SIZE], ClientError> {
        let inner = &self.inner;
        self.expect_phase(GamePhase::Passing)?;
        let round = inner.model.round_no();
        if self.has_passed() {
            return Err(ClientError::DoubleSubmission {
                position: inner.position,
            });
        }

        let cards: [Card; PASS_SIZE] = {
            let selection = inner.selection.lock();
            selection
                .as_slice()
                .try_into()
                .map_err(|_| ClientError::SelectionIncomplete {
                    selected: selection.len(),
                })?
        };

        let _guard = self.begin_command()?;
        *inner.passed_round.lock() = Some(round);
        match inner.controller.pass_cards(inner.position, cards).await {
            Ok(()) => {
                inner.selection.lock().clear();
                info!(position = %inner.position, round, "human passed");
                Ok(cards)
            }
            Err(err) => {
                *inner.passed_round.lock() = None;
                Err(err)
            }
        }
    }

    /// Play `card` if it is legal right now.
    pub async fn play(&self, card: Card) -> Result<(), ClientError> {
        let inner = &self.inner;
        self.expect_phase(GamePhase::Playing)?;
        if !inner.controller.is_playable(inner.position, card) {
            info!(position = %inner.position, card = %card, "illegal move rejected");
            return Err(ClientError::IllegalMove {
                position: inner.position,
                card,
            });
        }

        let _guard = self.begin_command()?;
        inner.controller.play_card(inner.position, card).await?;
        info!(position = %inner.position, card = %card, "human played");
        Ok(())
    }

    /// Dispatch a card click by phase: toggle while passing, play while playing.
    pub async fn choose(&self, card: Card) -> Result<Choice, ClientError> {
        match self.inner.model.state() {
            GamePhase::Passing => self.toggle(card).map(Choice::Pass),
            GamePhase::Playing => self.play(card).await.map(|()| Choice::Played),
            phase => Err(ClientError::NothingToChoose { phase }),
        }
    }

    fn expect_phase(&self, expected: GamePhase) -> Result<(), ClientError> {
        let actual = self.inner.model.state();
        if actual == expected {
            Ok(())
        } else {
            Err(ClientError::PhaseMismatch { expected, actual })
        }
    }

    fn begin_command(&self) -> Result<CommandGuard<'_>, ClientError> {
        self.inner
            .acting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| CommandGuard(&self.inner.acting))
            .map_err(|_| ClientError::DoubleSubmission {
                position: self.inner.position,
            })
    }
}

impl HumanInner {
    fn on_state_update(&self) {
        if self.model.state() != GamePhase::Passing {
            let mut selection = self.selection.lock();
            if !selection.is_empty() {
                debug!(position = %self.position, "clearing pass selection");
                selection.clear();
            }
        }
    }
}

/// Releases the in-flight flag on drop, including when the command future is dropped.
struct CommandGuard<'a>(&'a AtomicBool);

impl Drop for CommandGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
