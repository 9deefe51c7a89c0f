//! Default strategy: dump the highest cards, play the lowest.

use super::trait_def::{Strategy, StrategyError};
use crate::domain::rules::PASS_SIZE;
use crate::domain::Card;

/// Passes the three highest ranks and always plays the lowest legal rank.
///
/// Both choices are stable: equal ranks keep the order they were offered in.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lowball;

impl Lowball {
    pub const NAME: &'static str = "Lowball";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }
}

impl Strategy for Lowball {
    fn select_cards_to_pass(&self, hand: &[Card]) -> Result<[Card; PASS_SIZE], StrategyError> {
        if hand.len() < PASS_SIZE {
            return Err(StrategyError::NoOptions);
        }
        let mut ordered = hand.to_vec();
        // sort_by is stable, so ties keep hand order
        ordered.sort_by(|a, b| b.rank.value().cmp(&a.rank.value()));
        Ok([ordered[0], ordered[1], ordered[2]])
    }

    fn select_card_to_play(&self, legal: &[Card]) -> Result<Card, StrategyError> {
        legal
            .iter()
            .copied()
            .reduce(|best, c| {
                if c.rank.value() < best.rank.value() {
                    c
                } else {
                    best
                }
            })
            .ok_or(StrategyError::NoOptions)
    }
}
