#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod agents;
pub mod ai;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod telemetry;
pub mod view;

// Re-exports for public API
pub use agents::{Agent, AutonomousAgent, HumanAgent};
pub use ai::{create_strategy, Strategy, StrategyConfig, StrategyError};
pub use config::{RulesConfig, TableConfig};
pub use domain::{Card, GamePhase, PassingDirection, Position, Trick};
pub use engine::{Controller, EventKind, GameEvent, HeartsController, HeartsModel, Subscription};
pub use error::ClientError;
pub use view::{RenderUpdate, Renderer, TableView};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    client_test_support::logging::init();
}
