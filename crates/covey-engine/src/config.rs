//! Game and reward configuration.

use covey_core::{SetupError, MAX_AGENTS};

/// Per-step reward values, passed to the orchestrator at construction.
///
/// These are configuration, not compile-time constants, so variants and
/// tests can override them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RewardConfig {
    /// Reward every agent's accumulator is reset to at the start of a
    /// step. Negative by convention: each step costs something.
    pub step_penalty: f64,
    /// Overwrites the accumulator of an agent removed by a hazard this
    /// step.
    pub death_penalty: f64,
    /// Conventional bonus a variant's terminal reward function hands
    /// out on success.
    pub success_reward: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            step_penalty: -1.0,
            death_penalty: -100.0,
            success_reward: 100.0,
        }
    }
}

/// Dimensions, horizon, population, and rewards for one game.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    /// Terrain rows.
    pub rows: u32,
    /// Terrain columns.
    pub cols: u32,
    /// Maximum number of steps before forced termination.
    pub horizon: u32,
    /// Number of agents (and length of action/reward vectors).
    pub num_agents: usize,
    /// Reward values.
    pub rewards: RewardConfig,
}

impl GameConfig {
    /// Check the configuration for values no game can run with.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SetupError::EmptyGrid);
        }
        if self.horizon == 0 {
            return Err(SetupError::ZeroHorizon);
        }
        if self.num_agents == 0 {
            return Err(SetupError::NoAgents);
        }
        if self.num_agents > MAX_AGENTS {
            return Err(SetupError::TooManyAgents { max: MAX_AGENTS });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 8,
            horizon: 100,
            num_agents: 2,
            rewards: RewardConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        let base = GameConfig::default();
        assert_eq!(
            GameConfig { rows: 0, ..base }.validate(),
            Err(SetupError::EmptyGrid)
        );
        assert_eq!(
            GameConfig { horizon: 0, ..base }.validate(),
            Err(SetupError::ZeroHorizon)
        );
        assert_eq!(
            GameConfig {
                num_agents: 0,
                ..base
            }
            .validate(),
            Err(SetupError::NoAgents)
        );
        assert_eq!(
            GameConfig {
                num_agents: MAX_AGENTS + 1,
                ..base
            }
            .validate(),
            Err(SetupError::TooManyAgents { max: MAX_AGENTS })
        );
    }
}
