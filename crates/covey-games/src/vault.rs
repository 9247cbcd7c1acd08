//! Locked-door variant: fetch the key, open the vault, reach the goal.

use covey_core::{
    AgentId, AgentKind, CellKind, Color, Direction, ItemId, PickableItem, SetupError,
};
use covey_engine::{GameRules, RewardConfig, WorldState};
use covey_grid::Door;

/// A key-and-door puzzle. A wall spans the middle row with a single
/// locked door in it; the goal sits in the far corner behind the wall,
/// and the matching key lies on the floor where agent 0 starts. Someone
/// must pick up the key, unlock the door, and walk through.
///
/// Ends with a shared success reward when any agent reaches the goal.
#[derive(Clone, Copy, Debug)]
pub struct Vault {
    /// Terminal bonus paid to every agent when the goal is reached.
    pub success_reward: f64,
}

impl Default for Vault {
    fn default() -> Self {
        Self {
            success_reward: RewardConfig::default().success_reward,
        }
    }
}

impl Vault {
    /// Color of the door and of the key that opens it.
    pub const KEY_COLOR: Color = Color::Yellow;

    fn goal_reached(state: &WorldState) -> bool {
        let cols = state.grid().cols() as i32;
        state.grid().agent_at(0, cols - 1).is_some()
    }
}

impl GameRules for Vault {
    fn name(&self) -> &str {
        "vault"
    }

    fn setup_world(&self, state: &mut WorldState) -> Result<(), SetupError> {
        let rows = state.grid().rows() as i32;
        let cols = state.grid().cols() as i32;
        let wall_row = rows / 2;
        let door_col = cols / 2;
        let goal = (0, cols - 1);

        state.place_goal(goal.0, goal.1)?;
        for col in 0..cols {
            if col != door_col && (wall_row, col) != goal {
                state.place_wall(wall_row, col)?;
            }
        }
        state.add_door(Door::closed(
            wall_row,
            door_col,
            Self::KEY_COLOR,
            Self::KEY_COLOR,
        ))?;
        state.add_ground_item(
            rows - 1,
            0,
            PickableItem::key(Self::KEY_COLOR, ItemId(0)),
        )?;

        // Agents line up along the bottom edge, below the wall; agent 0
        // starts on the key. A wrapped start that runs off the grid or
        // lands on the wall, the door, or another agent falls back to
        // the first free cell; a world with no free cell left is a
        // setup error.
        for i in 0..state.num_agents() {
            let row = rows - 1 - (i as i32 / cols);
            let col = i as i32 % cols;
            let open = row >= 0
                && state.grid().cell(row, col) == CellKind::Empty
                && state.grid().door_at(row, col).is_none()
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
    use covey_core::{Action, CellKind, ItemKind};
    use covey_engine::{Game, GameConfig};

    fn game(rows: u32, cols: u32, num_agents: usize) -> Game {
        Game::new(
            Box::new(Vault::default()),
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
    fn layout_walls_off_the_goal_behind_a_locked_door() {
        let state = game(8, 8, 1).new_initial_state().unwrap();
        let grid = state.grid();

        assert_eq!(grid.cell(0, 7), CellKind::Goal);
        for col in 0..8 {
            let expect = if col == 4 { CellKind::Empty } else { CellKind::Wall };
            assert_eq!(grid.cell(4, col), expect, "row 4, col {col}");
        }
        let door = grid.door_at(4, 4).unwrap();
        assert!(!door.open);
        assert_eq!(door.key_color, Vault::KEY_COLOR);

        let key = grid.items_at(7, 0).next().unwrap();
        assert_eq!(key.item.kind, ItemKind::Key);
        let a0 = grid.agent(AgentId(0)).unwrap();
        assert_eq!((a0.row, a0.col), (7, 0));
    }

    #[test]
    fn crowded_starts_avoid_wall_door_and_each_other() {
        // Six agents on 4x3 overflow the bottom row into the wall row;
        // the rerouted starts must be distinct and stand on plain
        // floor, never the wall or the doorway.
        let state = game(4, 3, 6).new_initial_state().unwrap();
        let agents = state.grid().agents();
        assert_eq!(agents.len(), 6);
        for (i, a) in agents.iter().enumerate() {
            assert_eq!(state.grid().cell(a.row, a.col), CellKind::Empty);
            assert!(state.grid().door_at(a.row, a.col).is_none());
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
    fn door_stays_shut_without_the_key() {
        let game = game(4, 3, 1);
        let mut state = game.new_initial_state().unwrap();
        // Walk under the door without picking up the key, then push north.
        game.step(&mut state, &[Action::East]);
        game.step(&mut state, &[Action::North]);
        let a0 = state.grid().agent(AgentId(0)).unwrap();
        assert_eq!((a0.row, a0.col), (3, 1), "closed door must block");
        assert!(!state.grid().door_at(2, 1).unwrap().open);
    }

    #[test]
    fn full_walkthrough_unlocks_and_wins() {
        let game = game(4, 3, 1);
        let mut state = game.new_initial_state().unwrap();
        // Wall on row 2 with the door at (2, 1); key under the agent at
        // (3, 0); goal at (0, 2). Facing is always north.

        let plan = [
            Action::Interact, // pick up the key underfoot
            Action::East,     // stand south of the door
            Action::Interact, // unlock
            Action::North,    // through the doorway
            Action::North,
            Action::East,
            Action::North, // onto the goal
        ];
        for (i, &action) in plan.iter().enumerate() {
            assert!(!state.is_terminal(), "ended early before action {i}");
            game.step(&mut state, &[action]);
        }

        assert!(state.is_terminal());
        let a0 = state.grid().agent(AgentId(0)).unwrap();
        assert_eq!((a0.row, a0.col), (0, 2));
        // The key was consumed by the lock.
        assert!(a0.inventory.is_empty());
        assert!(state.grid().door_at(2, 1).unwrap().open);

        let rewards = game.config().rewards;
        assert_eq!(
            state.returns()[0],
            7.0 * rewards.step_penalty + rewards.success_reward
        );
    }

    #[test]
    fn interacting_with_a_locked_door_empty_handed_is_a_no_op() {
        let game = game(4, 3, 1);
        let mut state = game.new_initial_state().unwrap();
        game.step(&mut state, &[Action::East]);
        game.step(&mut state, &[Action::Interact]);
        let a0 = state.grid().agent(AgentId(0)).unwrap();
        assert!(a0.inventory.is_empty());
        assert!(!state.grid().door_at(2, 1).unwrap().open);
    }
}
