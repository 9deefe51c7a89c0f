//! Table configuration.
//!
//! Defaults suit an interactive game; every field can be overridden from the
//! environment via [`TableConfig::from_env`], and the binary layers its command
//! line flags on top.

use std::env;
use std::time::Duration;

use crate::ai::{Lowball, StrategyConfig};
use crate::domain::rules::DEFAULT_TARGET_SCORE;
use crate::domain::Position;
use crate::error::ClientError;

/// Rules engine settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RulesConfig {
    /// The game ends after the round in which any total reaches this.
    pub target_score: i16,
    /// Pause between the fourth card of a trick and its collection.
    pub collect_pause: Duration,
    /// Deal seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            collect_pause: Duration::ZERO,
            seed: None,
        }
    }
}

/// Everything needed to seat a table.
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub player_name: String,
    pub human_position: Position,
    /// Registry name of the strategy every robot uses.
    pub robot_strategy: String,
    pub strategy_config: StrategyConfig,
    pub rules: RulesConfig,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            human_position: Position::South,
            robot_strategy: Lowball::NAME.to_string(),
            strategy_config: StrategyConfig::default(),
            rules: RulesConfig::default(),
        }
    }
}

impl TableConfig {
    /// Build a config from `HEARTS_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ClientError> {
        let mut config = Self::default();

        if let Some(name) = var("HEARTS_PLAYER_NAME") {
            config.player_name = name;
        }
        if let Some(raw) = var("HEARTS_HUMAN_POSITION") {
            config.human_position = raw
                .parse()
                .map_err(|e| ClientError::config(format!("HEARTS_HUMAN_POSITION: {e}")))?;
        }
        if let Some(strategy) = var("HEARTS_ROBOT_STRATEGY") {
            config.robot_strategy = strategy;
        }
        if let Some(raw) = var("HEARTS_STRATEGY_CONFIG") {
            config.strategy_config = StrategyConfig::from_json_str(&raw)
                .map_err(|e| ClientError::config(format!("HEARTS_STRATEGY_CONFIG: {e}")))?;
        }
        if let Some(raw) = var("HEARTS_TARGET_SCORE") {
            config.rules.target_score = parse_var("HEARTS_TARGET_SCORE", &raw)?;
        }
        if let Some(raw) = var("HEARTS_COLLECT_PAUSE_MS") {
            let ms: u64 = parse_var("HEARTS_COLLECT_PAUSE_MS", &raw)?;
            config.rules.collect_pause = Duration::from_millis(ms);
        }
        if let Some(raw) = var("HEARTS_SEED") {
            config.rules.seed = Some(parse_var("HEARTS_SEED", &raw)?);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.player_name.trim().is_empty() {
            return Err(ClientError::config("player name must not be empty"));
        }
        if self.rules.target_score <= 0 {
            return Err(ClientError::config(format!(
                "target score must be positive, got {}",
                self.rules.target_score
            )));
        }
        Ok(())
    }
}

/// Non-empty environment variable, if set.
fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, ClientError>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| ClientError::config(format!("{name} must be a number, got '{raw}': {e}")))
}
