//! Command validation and application.
//!
//! The controller is the only writer of the model. Each command runs the pure
//! domain transition under the model lock and maps its result to events.

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use super::events::GameEvent;
use super::model::HeartsModel;
use crate::domain::dealing::{deal_hands, derive_round_seed};
use crate::domain::game_transition::{finish_round, reset_game, start_round};
use crate::domain::passing::submit_pass;
use crate::domain::rules::{PASS_SIZE, PLAYERS};
use crate::domain::tricks::{collect_trick, play_card};
use crate::domain::{Card, DomainError, GameState, PassingDirection, Position};
use crate::error::ClientError;

/// Commands a seat can issue against the table.
#[async_trait]
pub trait Controller: Send + Sync {
    /// Commit three cards to pass this round.
    async fn pass_cards(
        &self,
        position: Position,
        cards: [Card; PASS_SIZE],
    ) -> Result<(), ClientError>;

    /// Play one card into the current trick.
    async fn play_card(&self, position: Position, card: Card) -> Result<(), ClientError>;

    /// Whether `card` is a legal play for `position` right now.
    fn is_playable(&self, position: Position, card: Card) -> bool;

    /// Start a new game with names in north, east, south, west order.
    fn start_game(&self, names: [String; PLAYERS]) -> Result<(), ClientError>;
}

/// Reference controller over a [`HeartsModel`].
pub struct HeartsController {
    model: HeartsModel,
    table_seed: Mutex<u64>,
}

impl HeartsController {
    pub fn new(model: HeartsModel) -> Self {
        let table_seed = model.rules().seed.unwrap_or_default();
        Self {
            model,
            table_seed: Mutex::new(table_seed),
        }
    }

    pub fn model(&self) -> &HeartsModel {
        &self.model
    }

    fn deal_round(
        &self,
        state: &mut GameState,
        round_no: u32,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), DomainError> {
        let seed = derive_round_seed(*self.table_seed.lock(), round_no);
        let passing = start_round(state, round_no, deal_hands(seed))?;
        info!(round = round_no, passing = %passing, "round dealt");

        events.push(GameEvent::StateUpdate);
        if passing == PassingDirection::None {
            events.push(GameEvent::TrickStart);
        }
        Ok(())
    }

    /// Award the full trick and move the table on: next trick, next round or game over.
    ///
    /// Collection and round scoring are committed separately so `trickcollected`
    /// listeners still see the round's points.
    fn collect(&self) -> Result<(), ClientError> {
        let round_complete = self.model.mutate(|state, events| {
            let collected = collect_trick(state)?;
            debug!(
                winner = %collected.winner,
                points = collected.points,
                "trick collected"
            );
            events.push(GameEvent::TrickCollected {
                position: collected.winner,
            });
            if !collected.round_complete {
                events.push(GameEvent::TrickStart);
            }
            Ok::<_, DomainError>(collected.round_complete)
        })?;

        if round_complete {
            self.close_round()?;
        }
        Ok(())
    }

    fn close_round(&self) -> Result<(), DomainError> {
        let target_score = self.model.rules().target_score;
        self.model.mutate(|state, events| {
            let round_no = state.round.round_no;
            let finished = finish_round(state, target_score)?;
            info!(
                round = round_no,
                points = ?finished.score.entry.as_array(),
                moonshooter = ?finished.score.moonshooter,
                "round scored"
            );
            events.push(GameEvent::ScoreUpdate {
                entry: finished.score.entry,
                moonshooter: finished.score.moonshooter,
            });

            if finished.game_over {
                info!(totals = ?state.scores_total, "game complete");
                events.push(GameEvent::StateUpdate);
            } else {
                self.deal_round(state, round_no + 1, events)?;
            }
            Ok(())
        })
    }
}

/// Map a rejected pass to the client error the caller sees.
fn pass_rejection(err: DomainError) -> ClientError {
    match err {
        DomainError::AlreadyPassed(position) => ClientError::DoubleSubmission { position },
        other => ClientError::Rules(other),
    }
}

#[async_trait]
impl Controller for HeartsController {
    async fn pass_cards(
        &self,
        position: Position,
        cards: [Card; PASS_SIZE],
    ) -> Result<(), ClientError> {
        let outcome = self
            .model
            .mutate(|state, events| {
                let outcome = submit_pass(state, position, cards)?;
                if outcome.exchanged {
                    events.push(GameEvent::StateUpdate);
                    events.push(GameEvent::TrickStart);
                }
                Ok::<_, DomainError>(outcome)
            })
            .map_err(pass_rejection)?;

        info!(position = %position, cards = ?cards.map(|c| c.to_string()), "pass accepted");
        if let Some(leader) = outcome.leader {
            info!(leader = %leader, "cards exchanged, play begins");
        }
        Ok(())
    }

    async fn play_card(&self, position: Position, card: Card) -> Result<(), ClientError> {
        let result = self.model.mutate(|state, events| {
            let result = play_card(state, position, card)?;
            events.push(GameEvent::TrickPlay { position, card });
            Ok::<_, DomainError>(result)
        })?;
        info!(position = %position, card = %card, "card played");

        if result.trick_completed {
            let pause = self.model.rules().collect_pause;
            if !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }
            if let Err(err) = self.collect() {
                warn!(error = %err, "trick collection failed");
                return Err(err);
            }
        }
        Ok(())
    }

    fn is_playable(&self, position: Position, card: Card) -> bool {
        self.model.legal_moves(position).contains(&card)
    }

    fn start_game(&self, names: [String; PLAYERS]) -> Result<(), ClientError> {
        let seed = self.model.rules().seed.unwrap_or_else(rand::random);
        *self.table_seed.lock() = seed;
        info!(seed, names = ?names, "starting game");

        self.model.mutate(|state, events| {
            reset_game(state, names);
            self.deal_round(state, 1, events)?;
            Ok(())
        })
    }
}
