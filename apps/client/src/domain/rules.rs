pub const PLAYERS: usize = 4;
pub const HAND_SIZE: usize = 13;
pub const PASS_SIZE: usize = 3;
pub const TRICKS_PER_ROUND: u8 = 13;

/// Penalty points in one deck: 13 hearts plus the queen of spades.
pub const ROUND_POINTS: u8 = 26;
pub const DEFAULT_TARGET_SCORE: i16 = 100;
