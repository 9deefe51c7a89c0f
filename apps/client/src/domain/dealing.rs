//! Deterministic card dealing.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::{HAND_SIZE, PLAYERS};
use crate::domain::{Card, Rank, Suit};

/// Generate a full 52-card deck in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(PLAYERS * HAND_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Per-round dealing seed derived from the table seed.
pub fn derive_round_seed(table_seed: u64, round_no: u32) -> u64 {
    // SplitMix64 finalizer over (seed, round) so adjacent rounds do not share prefixes.
    let mut z = table_seed ^ (round_no as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Shuffle and deal 13 cards to each seat. Hands are sorted for display.
pub fn deal_hands(seed: u64) -> [Vec<Card>; PLAYERS] {
    let mut deck = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (i, chunk) in deck.chunks(HAND_SIZE).enumerate() {
        let mut hand = chunk.to_vec();
        hand.sort();
        hands[i] = hand;
    }
    hands
}
