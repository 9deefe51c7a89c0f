//! Card game logic: suits in hands, penalty points, trick strength

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Penalty value of a single card.
pub fn card_points(card: Card) -> u8 {
    if card.suit == Suit::Hearts {
        1
    } else if card == Card::QUEEN_OF_SPADES {
        13
    } else {
        0
    }
}

pub fn is_point_card(card: Card) -> bool {
    card_points(card) > 0
}

/// Whether `a` beats `b` given the led suit. Hearts has no trump: only
/// cards of the led suit can take the trick.
pub fn card_beats(a: Card, b: Card, lead: Suit) -> bool {
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    match (a_follows, b_follows) {
        (true, false) => true,
        (true, true) => a.rank > b.rank,
        _ => false,
    }
}
