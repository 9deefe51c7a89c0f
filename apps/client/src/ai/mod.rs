//! Autonomous player decisions.
//!
//! - [`Strategy`]: pass and play decision functions
//! - [`Lowball`]: default strategy
//! - [`RandomPlayer`]: uniform random choices, seedable
//! - [`registry`]: lookup by name

mod config;
mod lowball;
mod random;
pub mod registry;
mod trait_def;

pub use config::StrategyConfig;
pub use lowball::Lowball;
pub use random::RandomPlayer;
pub use trait_def::{Strategy, StrategyError};

use crate::error::ClientError;

/// Build the strategy registered under `name`.
pub fn create_strategy(
    name: &str,
    config: &StrategyConfig,
) -> Result<Box<dyn Strategy>, ClientError> {
    let factory =
        registry::by_name(name).ok_or_else(|| ClientError::UnknownStrategy(name.to_string()))?;
    Ok((factory.make)(config))
}
