//! The game: rules + configuration + the per-step entry point.

use crate::{GameConfig, GameRules, HoldPosition, ScriptedBehavior, WorldState};
use covey_core::{Action, AgentKind, SetupError};

/// A playable game: a rules trait object plus validated configuration.
///
/// The game itself is immutable during play; all mutable episode state
/// lives in [`WorldState`] values produced by
/// [`Game::new_initial_state`], so any number of episodes (or cloned
/// search branches) can run against one `Game`.
pub struct Game {
    rules: Box<dyn GameRules>,
    config: GameConfig,
    scripted: Box<dyn ScriptedBehavior>,
}

impl Game {
    /// Create a game, validating the configuration.
    pub fn new(rules: Box<dyn GameRules>, config: GameConfig) -> Result<Self, SetupError> {
        config.validate()?;
        Ok(Self {
            rules,
            config,
            scripted: Box::new(HoldPosition),
        })
    }

    /// Replace the behavior driving [`AgentKind::Scripted`] agents.
    pub fn with_scripted_behavior(mut self, behavior: Box<dyn ScriptedBehavior>) -> Self {
        self.scripted = behavior;
        self
    }

    /// The configuration this game was built with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The variant's short name.
    pub fn name(&self) -> &str {
        self.rules.name()
    }

    /// Build and set up a fresh episode state.
    pub fn new_initial_state(&self) -> Result<WorldState, SetupError> {
        let mut state = WorldState::new(
            self.config.rows,
            self.config.cols,
            self.config.horizon,
            self.config.num_agents,
        )?;
        self.rules.setup_world(&mut state)?;
        Ok(state)
    }

    /// Advance `state` exactly one timestep.
    ///
    /// `actions` is indexed by agent id; missing entries default to
    /// [`Action::Stay`], and scripted agents' entries are replaced by
    /// the configured [`ScriptedBehavior`]. A terminal state is left
    /// untouched.
    pub fn step(&self, state: &mut WorldState, actions: &[Action]) {
        if state.is_terminal() {
            return;
        }

        let mut resolved: Vec<Action> = (0..self.config.num_agents)
            .map(|i| actions.get(i).copied().unwrap_or(Action::Stay))
            .collect();
        for agent in state.grid().agents() {
            if agent.kind == AgentKind::Scripted {
                if let Some(slot) = resolved.get_mut(agent.id.index()) {
                    *slot = self.scripted.propose(state, agent.id);
                }
            }
        }

        state.advance(&resolved, &self.config.rewards, self.rules.as_ref());
    }

    /// Decode raw action indices and advance one timestep.
    ///
    /// Out-of-vocabulary indices degrade to [`Action::Stay`]; action
    /// vectors may come from untrusted policies during training.
    pub fn step_indices(&self, state: &mut WorldState, indices: &[u64]) {
        let actions: Vec<Action> = indices.iter().map(|&i| Action::from_index(i)).collect();
        self.step(state, &actions);
    }

    /// Render `state` with a variant-name header, for logs and
    /// interactive play.
    pub fn render(&self, state: &WorldState) -> String {
        format!("{} State:\n{state}", self.rules.name())
    }

    /// Lower bound on an episode return: dying immediately while paying
    /// the step penalty for the whole horizon.
    pub fn min_utility(&self) -> f64 {
        self.config.rewards.death_penalty
            + self.config.rewards.step_penalty * f64::from(self.config.horizon)
    }

    /// Upper bound on an episode return: success on the first step.
    pub fn max_utility(&self) -> f64 {
        self.config.rewards.success_reward + self.config.rewards.step_penalty
    }
}
