//! Strategy configuration.
//!
//! A small typed layer over a JSON object: standard fields are extracted,
//! anything else is kept in `custom` for the strategy to query.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Configuration handed to strategy factories.
///
/// ```json
/// {"seed": 12345, "aggression": 0.7}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// RNG seed for strategies that randomize.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Strategy-specific fields.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl StrategyConfig {
    /// Lenient conversion: malformed input yields an empty config.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_default()
    }

    /// Strict parse of a JSON object string.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            seed: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }
}
