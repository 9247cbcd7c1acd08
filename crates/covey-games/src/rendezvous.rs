//! Coordination variant: occupy every sync point at once.

use covey_core::{AgentId, AgentKind, CellKind, Color, Direction, SetupError};
use covey_engine::{GameRules, RewardConfig, WorldState};

/// A pure-coordination game: one sync point per agent, spread across
/// the grid, with all agents starting bunched around the center. The
/// episode ends when every sync point is occupied simultaneously, and
/// every agent then receives the success reward.
///
/// On grids of at least 6×6 a walled box with four gaps surrounds the
/// starting area, so agents must file out through the gaps before they
/// can spread to their corners.
#[derive(Clone, Copy, Debug)]
pub struct Rendezvous {
    /// Terminal bonus paid to every agent once all sync points are held.
    pub success_reward: f64,
}

impl Default for Rendezvous {
    fn default() -> Self {
        Self {
            success_reward: RewardConfig::default().success_reward,
        }
    }
}

impl Rendezvous {
    /// The sync-point layout for a given agent count and grid size.
    ///
    /// One position per agent: the center for a single agent, opposite
    /// corners for two, a triangle for three, all four corners for
    /// four, and a clockwise walk of the perimeter beyond that.
    /// Positions are clamped into bounds, so tiny grids may fold
    /// several onto one cell.
    pub fn sync_positions(num_agents: usize, rows: i32, cols: i32) -> Vec<(i32, i32)> {
        match num_agents {
            0 => Vec::new(),
            1 => vec![(rows / 2, cols / 2)],
            2 => vec![(0, 0), (rows - 1, cols - 1)],
            3 => vec![(0, cols / 2), (rows - 1, 0), (rows - 1, cols - 1)],
            4 => vec![
                (0, 0),
                (0, cols - 1),
                (rows - 1, 0),
                (rows - 1, cols - 1),
            ],
            n => (0..n as i32)
                .map(|i| {
                    let (row, col) = if i < cols {
                        (0, i)
                    } else if i < cols + rows - 1 {
                        (i - cols + 1, cols - 1)
                    } else if i < 2 * cols + rows - 2 {
                        (rows - 1, cols - 1 - (i - cols - rows + 1))
                    } else {
                        (rows - 1 - (i - 2 * cols - rows + 2), 0)
                    };
                    (row.clamp(0, rows - 1), col.clamp(0, cols - 1))
                })
                .collect(),
        }
    }

    fn all_points_held(state: &WorldState) -> bool {
        let rows = state.grid().rows() as i32;
        let cols = state.grid().cols() as i32;
        Self::sync_positions(state.num_agents(), rows, cols)
            .iter()
            .all(|&(row, col)| state.grid().agent_at(row, col).is_some())
    }

    /// Starting cell for agent `i`: the center, nudged by one along
    /// each axis in a fixed pattern so nearby agents fan out.
    fn preferred_start(i: usize, rows: i32, cols: i32) -> (i32, i32) {
        let offset_row = if i % 2 == 0 {
            0
        } else if i % 4 < 2 {
            -1
        } else {
            1
        };
        let offset_col = if (i / 2) % 2 == 0 {
            0
        } else if i / 4 < 2 {
            -1
        } else {
            1
        };
        (
            (rows / 2 + offset_row).clamp(0, rows - 1),
            (cols / 2 + offset_col).clamp(0, cols - 1),
        )
    }
}

impl GameRules for Rendezvous {
    fn name(&self) -> &str {
        "rendezvous"
    }

    fn setup_world(&self, state: &mut WorldState) -> Result<(), SetupError> {
        let rows = state.grid().rows() as i32;
        let cols = state.grid().cols() as i32;

        for (row, col) in Self::sync_positions(state.num_agents(), rows, cols) {
            state.place_sync_point(row, col)?;
        }

        // A box around the starting area, with one gap per side aligned
        // with the center row and column. Terrain goes down before any
        // agent so starts can route around it.
        if rows >= 6 && cols >= 6 {
            let mid_row = rows / 2;
            let mid_col = cols / 2;
            for col in 1..cols - 1 {
                if col != mid_col {
                    state.place_wall(mid_row - 1, col)?;
                    state.place_wall(mid_row + 1, col)?;
                }
            }
            for row in 1..rows - 1 {
                if row != mid_row {
                    state.place_wall(row, mid_col - 1)?;
                    state.place_wall(row, mid_col + 1)?;
                }
            }
        }

        // The nudge pattern repeats after a handful of agents and can
        // land on a wall; such starts fall back to the first free cell.
        for i in 0..state.num_agents() {
            let (row, col) = Self::preferred_start(i, rows, cols);
            let blocked = state.grid().cell(row, col) == CellKind::Wall
                || state.grid().agent_at(row, col).is_some();
            let (row, col) = if blocked {
                state
                    .grid()
                    .find_empty_cell()
                    .ok_or(SetupError::WorldFull)?
            } else {
                (row, col)
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
        Self::all_points_held(state)
    }

    fn terminal_rewards(&self, state: &WorldState) -> Vec<f64> {
        if Self::all_points_held(state) {
            vec![self.success_reward; state.num_agents()]
        } else {
            vec![0.0; state.num_agents()]
        }
    }
}
