//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::core::RulesConfig;

/// Configuration for a batch of AI-only games.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Master seed. Each game attempt derives its own stream from it.
    /// `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Rounds after which a game counts as a failure.
    pub max_rounds: u32,

    /// Failed attempts tolerated across the batch before giving up.
    pub max_failures: usize,

    /// Play games on the rayon thread pool.
    pub parallel: bool,

    /// Table rules for every game.
    pub rules: RulesConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_rounds: 500,
            max_failures: 1000,
            parallel: false,
            rules: RulesConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Create a default simulation config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the master seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the per-game round ceiling.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Set the failure ceiling.
    #[must_use]
    pub fn with_max_failures(mut self, failures: usize) -> Self {
        self.max_failures = failures;
        self
    }

    /// Run games in parallel.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the table rules.
    #[must_use]
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let config = SimulationConfig::new()
            .with_seed(9)
            .with_max_rounds(50)
            .with_max_failures(3)
            .with_parallel(true);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.max_rounds, 50);
        assert_eq!(config.max_failures, 3);
        assert!(config.parallel);
    }

    #[test]
    fn test_partial_json() {
        let config: SimulationConfig = serde_json::from_str(r#"{"seed": 4, "rules": {"winning_points": 10}}"#).unwrap();
        assert_eq!(config.seed, Some(4));
        assert_eq!(config.max_rounds, 500);
        assert_eq!(config.rules.winning_points, 10);
        assert_eq!(config.rules.hand_limit, 10);
    }
}
