use crate::domain::cards_logic::{card_beats, card_points};
use crate::domain::position::Position;
use crate::domain::rules::PLAYERS;
use crate::domain::{Card, Suit};

/// The trick in progress: who led and the plays so far, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    leader: Position,
    plays: Vec<(Position, Card)>,
}

impl Trick {
    pub fn new(leader: Position) -> Self {
        Self {
            leader,
            plays: Vec::with_capacity(PLAYERS),
        }
    }

    pub fn leader(&self) -> Position {
        self.leader
    }

    pub fn plays(&self) -> &[(Position, Card)] {
        &self.plays
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() >= PLAYERS
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|(_, card)| card.suit)
    }

    /// Seat expected to play next; `None` once all four have played.
    pub fn next_to_play(&self) -> Option<Position> {
        if self.is_complete() {
            return None;
        }
        Some(self.leader.offset(self.plays.len() as i8))
    }

    /// Winner of a complete trick: highest card of the led suit.
    pub fn winner(&self) -> Option<Position> {
        if !self.is_complete() {
            return None;
        }
        let lead = self.lead_suit()?;
        let mut best = self.plays[0];
        for &play in &self.plays[1..] {
            if card_beats(play.1, best.1, lead) {
                best = play;
            }
        }
        Some(best.0)
    }

    pub fn points(&self) -> u8 {
        self.plays.iter().map(|&(_, c)| card_points(c)).sum()
    }

    pub(crate) fn push(&mut self, position: Position, card: Card) {
        self.plays.push((position, card));
    }
}
