//! Reusable game-rules fixtures.

use covey_core::{AgentId, AgentKind, Color, Direction, SetupError};
use covey_engine::{GameRules, WorldState};

/// A featureless arena: empty terrain, agents spread along the bottom
/// row facing north, no termination condition, zero terminal reward.
///
/// Useful for exercising engine bookkeeping (horizon, rewards, returns,
/// absorbing terminal) without any variant-specific behavior in the
/// way.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenField;

impl GameRules for OpenField {
    fn name(&self) -> &str {
        "open_field"
    }

    fn setup_world(&self, state: &mut WorldState) -> Result<(), SetupError> {
        let rows = state.grid().rows() as i32;
        let cols = state.grid().cols() as i32;
        for i in 0..state.num_agents() {
            let row = rows - 1 - (i as i32 / cols);
            let col = i as i32 % cols;
            state.add_agent(
                AgentId(i as u32),
                row,
                col,
                Direction::North,
                Color::ALL[i % Color::ALL.len()],
                AgentKind::Controlled,
            )?;
        }
        Ok(())
    }

    fn is_terminal(&self, _state: &WorldState) -> bool {
        false
    }

    fn terminal_rewards(&self, state: &WorldState) -> Vec<f64> {
        vec![0.0; state.num_agents()]
    }
}

/// The `(row, col)` of every live agent, indexed by agent id order.
pub fn agent_positions(state: &WorldState) -> Vec<(i32, i32)> {
    let mut agents: Vec<_> = state.grid().agents().iter().collect();
    agents.sort_by_key(|a| a.id);
    agents.iter().map(|a| (a.row, a.col)).collect()
}
