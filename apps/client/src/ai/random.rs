//! Random strategy: uniform choices, seedable for tests.

use parking_lot::Mutex;
use rand::prelude::*;

use super::trait_def::{Strategy, StrategyError};
use crate::domain::rules::PASS_SIZE;
use crate::domain::Card;

/// Chooses uniformly at random among the offered cards.
///
/// The RNG sits behind a mutex because [`Strategy`] methods take `&self`.
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` gives reproducible choices; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Strategy for RandomPlayer {
    fn select_cards_to_pass(&self, hand: &[Card]) -> Result<[Card; PASS_SIZE], StrategyError> {
        if hand.len() < PASS_SIZE {
            return Err(StrategyError::NoOptions);
        }
        let mut rng = self.rng.lock();
        let picked: Vec<Card> = hand.choose_multiple(&mut *rng, PASS_SIZE).copied().collect();
        picked.try_into().map_err(|v: Vec<Card>| {
            StrategyError::Internal(format!("expected {PASS_SIZE} cards, drew {}", v.len()))
        })
    }

    fn select_card_to_play(&self, legal: &[Card]) -> Result<Card, StrategyError> {
        if legal.is_empty() {
            return Err(StrategyError::NoOptions);
        }
        let mut rng = self.rng.lock();
        legal
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| StrategyError::Internal("failed to choose a card".into()))
    }
}
