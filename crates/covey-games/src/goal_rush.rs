//! Race-to-the-goal variant.

use covey_core::{AgentId, AgentKind, CellKind, Color, Direction, SetupError};
use covey_engine::{GameRules, RewardConfig, WorldState};

/// A shared-goal race: one goal cell in the top-right corner, agents
/// starting along the bottom edge. The episode ends as soon as *any*
/// agent stands on the goal, and every agent then receives the success
/// reward (utility is identical across agents).
///
/// On grids of at least 5×5 a partial wall cross splits the field, so
/// agents must route through the gaps rather than walk straight lines.
#[derive(Clone, Copy, Debug)]
pub struct GoalRush {
    /// Terminal bonus paid to every agent when the goal is reached.
    pub success_reward: f64,
}

impl Default for GoalRush {
    fn default() -> Self {
        Self {
            success_reward: RewardConfig::default().success_reward,
        }
    }
}

impl GoalRush {
    /// The goal cell for a grid with the given column count.
    pub fn goal_position(cols: i32) -> (i32, i32) {
        (0, cols - 1)
    }

    fn goal_reached(state: &WorldState) -> bool {
        let (row, col) = Self::goal_position(state.grid().cols() as i32);
        state.grid().agent_at(row, col).is_some()
    }
}

impl GameRules for GoalRush {
    fn name(&self) -> &str {
        "goal_rush"
    }

    fn setup_world(&self, state: &mut WorldState) -> Result<(), SetupError> {
        let rows = state.grid().rows() as i32;
        let cols = state.grid().cols() as i32;
        let goal = Self::goal_position(cols);
        state.place_goal(goal.0, goal.1)?;

        // Partial cross: a horizontal wall with a central gap, and a
        // vertical wall closing off the upper half. The goal cell is
        // never overwritten, and terrain goes down before any agent so
        // starts can route around it.
        if rows >= 5 && cols >= 5 {
            let mid_row = rows / 2;
            let mid_col = cols / 2;
            for col in 1..cols - 1 {
                if col != mid_col && (mid_row, col) != goal {
                    state.place_wall(mid_row, col)?;
                }
            }
            for row in 1..mid_row {
                if (row, mid_col) != goal {
                    state.place_wall(row, mid_col)?;
                }
            }
        }

        // Agents fill the bottom row left to right, wrapping upward a
        // row at a time once the bottom row is full. A wrapped start
        // that runs off the grid or lands on a wall, the goal, or
        // another agent falls back to the first free cell; a world with
        // no free cell left is a setup error.
        for i in 0..state.num_agents() {
            let row = rows - 1 - (i as i32 / cols);
            let col = i as i32 % cols;
            let open = row >= 0
                && state.grid().cell(row, col) == CellKind::Empty
                && state.grid().agent_at(row, col).is_none();
            let (row, col) = if open {
                (row, col)
            } else {
                state
                    .grid()
                    .find_empty_cell()
                    .ok_or(SetupError::WorldFull)?
            };
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

    fn is_terminal(&self, state: &WorldState) -> bool {
        Self::goal_reached(state)
    }

    fn terminal_rewards(&self, state: &WorldState) -> Vec<f64> {
        if Self::goal_reached(state) {
            vec![self.success_reward; state.num_agents()]
        } else {
            vec![0.0; state.num_agents()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covey_core::{Action, CellKind};
    use covey_engine::{Game, GameConfig};

    fn game(rows: u32, cols: u32, num_agents: usize) -> Game {
        Game::new(
            Box::new(GoalRush::default()),
            GameConfig {
                rows,
                cols,
                horizon: 100,
                num_agents,
                ..GameConfig::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn default_layout_places_goal_agents_and_walls() {
        let state = game(8, 8, 2).new_initial_state().unwrap();
        let grid = state.grid();

        assert_eq!(grid.cell(0, 7), CellKind::Goal);
        let a0 = grid.agent(AgentId(0)).unwrap();
        let a1 = grid.agent(AgentId(1)).unwrap();
        assert_eq!((a0.row, a0.col), (7, 0));
        assert_eq!((a1.row, a1.col), (7, 1));
        assert_eq!(a0.color, Color::Red);
        assert_eq!(a1.color, Color::Blue);

        // Horizontal wall on row 4 with a gap at the middle column.
        for col in 1..7 {
            let expect = if col == 4 { CellKind::Empty } else { CellKind::Wall };
            assert_eq!(grid.cell(4, col), expect, "row 4, col {col}");
        }
        // Vertical wall above it.
        for row in 1..4 {
            assert_eq!(grid.cell(row, 4), CellKind::Wall, "row {row}, col 4");
        }
    }

    #[test]
    fn small_grids_have_no_walls() {
        let state = game(4, 4, 1).new_initial_state().unwrap();
        let grid = state.grid();
        for row in 0..4 {
            for col in 0..4 {
                assert_ne!(grid.cell(row, col), CellKind::Wall);
            }
        }
    }

    #[test]
    fn overflow_agents_wrap_to_the_row_above() {
        let state = game(5, 5, 7).new_initial_state().unwrap();
        let a5 = state.grid().agent(AgentId(5)).unwrap();
        let a6 = state.grid().agent(AgentId(6)).unwrap();
        assert_eq!((a5.row, a5.col), (3, 0));
        assert_eq!((a6.row, a6.col), (3, 1));
    }

    #[test]
    fn crowded_layout_keeps_start_cells_distinct() {
        // Eight agents on 3x3: every cell but the goal gets an agent,
        // none stacked, none on the goal.
        let state = game(3, 3, 8).new_initial_state().unwrap();
        let agents = state.grid().agents();
        assert_eq!(agents.len(), 8);
        for (i, a) in agents.iter().enumerate() {
            assert_eq!(state.grid().cell(a.row, a.col), CellKind::Empty);
            for b in &agents[i + 1..] {
                assert_ne!(
                    (a.row, a.col),
                    (b.row, b.col),
                    "agents {} and {} overlap at setup",
                    a.id,
                    b.id,
                );
            }
        }
    }

    #[test]
    fn overfull_layout_is_a_setup_error() {
        // 3x3 has eight non-goal cells; a ninth agent has nowhere to go.
        let result = game(3, 3, 9).new_initial_state();
        assert_eq!(result, Err(SetupError::WorldFull));
    }

    #[test]
    fn wrapped_starts_avoid_the_cross_walls() {
        // Twelve agents on 5x5 wrap into the wall row; those starts
        // must be rerouted.
        let state = game(5, 5, 12).new_initial_state().unwrap();
        for a in state.grid().agents() {
            assert_eq!(
                state.grid().cell(a.row, a.col),
                CellKind::Empty,
                "agent {} at ({}, {})",
                a.id,
                a.row,
                a.col,
            );
        }
    }

    #[test]
    fn reaching_the_goal_ends_the_episode_with_success() {
        let game = game(3, 3, 1);
        let mut state = game.new_initial_state().unwrap();

        for action in [Action::East, Action::East, Action::North] {
            game.step(&mut state, &[action]);
            assert!(!state.is_terminal());
        }
        game.step(&mut state, &[Action::North]);

        assert!(state.is_terminal());
        let rewards = game.config().rewards;
        assert_eq!(
            state.returns()[0],
            4.0 * rewards.step_penalty + rewards.success_reward
        );
    }

    #[test]
    fn success_reward_is_shared_by_all_agents() {
        let game = game(3, 3, 2);
        let mut state = game.new_initial_state().unwrap();

        // Agent 1 runs to the goal while agent 0 stands still.
        game.step(&mut state, &[Action::Stay, Action::East]);
        game.step(&mut state, &[Action::Stay, Action::North]);
        game.step(&mut state, &[Action::Stay, Action::North]);

        assert!(state.is_terminal());
        let rewards = game.config().rewards;
        let expected = rewards.step_penalty + rewards.success_reward;
        assert_eq!(state.rewards(), &[expected, expected]);
    }
}
