//! Registered strategies.
//!
//! To add one: implement `Strategy`, then add a `StrategyFactory` entry with a
//! stable `name` and `version`. Keep the list order stable; the first entry is
//! the default.

use super::config::StrategyConfig;
use super::{Lowball, RandomPlayer, Strategy};

/// Factory definition for constructing strategies.
pub struct StrategyFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(config: &StrategyConfig) -> Box<dyn Strategy>,
}

static STRATEGY_FACTORIES: &[StrategyFactory] = &[
    StrategyFactory {
        name: Lowball::NAME,
        version: Lowball::VERSION,
        make: make_lowball,
    },
    StrategyFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
];

pub fn registered_strategies() -> &'static [StrategyFactory] {
    STRATEGY_FACTORIES
}

/// Finds a registered factory by name, ignoring ASCII case.
pub fn by_name(name: &str) -> Option<&'static StrategyFactory> {
    registered_strategies()
        .iter()
        .find(|factory| factory.name.eq_ignore_ascii_case(name.trim()))
}

fn make_lowball(_config: &StrategyConfig) -> Box<dyn Strategy> {
    Box::new(Lowball::new())
}

fn make_random_player(config: &StrategyConfig) -> Box<dyn Strategy> {
    Box::new(RandomPlayer::new(config.seed()))
}
