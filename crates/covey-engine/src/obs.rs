//! Observation tensor extraction.
//!
//! Encodes full world state as stacked one-hot planes over the grid,
//! written into a caller-provided flat `f32` buffer in
//! `[plane, row, col]` order. Buffer sizing is the adapter's job; to
//! make a miscomputed size harmless, writes whose index falls beyond
//! the buffer are silently dropped instead of panicking.

use crate::WorldState;
use covey_core::{AgentId, CellKind};

/// Number of observation planes: five cell kinds, all agents, the
/// observing agent, closed doors, open doors, ground items.
pub const NUM_PLANES: usize = 10;

/// Required buffer length for a `rows x cols` world.
pub fn observation_len(rows: u32, cols: u32) -> usize {
    NUM_PLANES * rows as usize * cols as usize
}

fn plane_of(kind: CellKind) -> usize {
    match kind {
        CellKind::Empty => 0,
        CellKind::Wall => 1,
        CellKind::Hazard => 2,
        CellKind::Goal => 3,
        CellKind::SyncPoint => 4,
    }
}

/// Write `observer`'s observation of `state` into `values`.
///
/// The buffer is zeroed first. Every agent currently sees full state;
/// the observer only influences the dedicated self-position plane. An
/// observer id with no live agent (e.g. one that died) leaves that
/// plane empty.
pub fn write_observation(state: &WorldState, observer: AgentId, values: &mut [f32]) {
    values.fill(0.0);

    let grid = state.grid();
    let rows = grid.rows() as usize;
    let cols = grid.cols() as usize;

    let mut set = |plane: usize, row: i32, col: i32| {
        let index = plane * rows * cols + row as usize * cols + col as usize;
        // Truncation guard: never write past the provided buffer.
        if let Some(slot) = values.get_mut(index) {
            *slot = 1.0;
        }
    };

    for row in 0..rows as i32 {
        for col in 0..cols as i32 {
            set(plane_of(grid.cell(row, col)), row, col);
        }
    }
    for agent in grid.agents() {
        set(5, agent.row, agent.col);
    }
    if let Some(agent) = grid.agent(observer) {
        set(6, agent.row, agent.col);
    }
    for door in grid.doors() {
        set(if door.open { 8 } else { 7 }, door.row, door.col);
    }
    for item in grid.items() {
        set(9, item.row, item.col);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covey_core::{AgentKind, Color, Direction, ItemId, PickableItem};
    use covey_grid::Door;

    fn state_2x2() -> WorldState {
        let mut state = WorldState::new(2, 2, 10, 2).unwrap();
        state.place_goal(0, 1).unwrap();
        state
            .add_agent(
                AgentId(0),
                1,
                0,
                Direction::North,
                Color::Red,
                AgentKind::Controlled,
            )
            .unwrap();
        state
            .add_agent(
                AgentId(1),
                1,
                1,
                Direction::North,
                Color::Blue,
                AgentKind::Controlled,
            )
            .unwrap();
        state.add_door(Door::closed(0, 0, Color::Red, Color::Red)).unwrap();
        state
            .add_ground_item(1, 1, PickableItem::key(Color::Red, ItemId(0)))
            .unwrap();
        state
    }

    fn at(values: &[f32], plane: usize, row: usize, col: usize) -> f32 {
        values[plane * 4 + row * 2 + col]
    }

    #[test]
    fn planes_encode_cells_agents_doors_items() {
        let state = state_2x2();
        let mut values = vec![0.0; observation_len(2, 2)];
        write_observation(&state, AgentId(0), &mut values);

        // Cell one-hots.
        assert_eq!(at(&values, 0, 1, 0), 1.0); // empty
        assert_eq!(at(&values, 3, 0, 1), 1.0); // goal
        assert_eq!(at(&values, 0, 0, 1), 0.0); // goal cell is not empty
        // Agents and observer.
        assert_eq!(at(&values, 5, 1, 0), 1.0);
        assert_eq!(at(&values, 5, 1, 1), 1.0);
        assert_eq!(at(&values, 6, 1, 0), 1.0);
        assert_eq!(at(&values, 6, 1, 1), 0.0);
        // Closed door, no open doors, one item.
        assert_eq!(at(&values, 7, 0, 0), 1.0);
        assert!(values[8 * 4..9 * 4].iter().all(|&v| v == 0.0));
        assert_eq!(at(&values, 9, 1, 1), 1.0);
    }

    #[test]
    fn observer_plane_tracks_the_requested_agent() {
        let state = state_2x2();
        let mut values = vec![0.0; observation_len(2, 2)];
        write_observation(&state, AgentId(1), &mut values);
        assert_eq!(at(&values, 6, 1, 1), 1.0);
        assert_eq!(at(&values, 6, 1, 0), 0.0);
    }

    #[test]
    fn absent_observer_leaves_plane_empty() {
        let state = state_2x2();
        let mut values = vec![0.0; observation_len(2, 2)];
        write_observation(&state, AgentId(9), &mut values);
        assert!(values[6 * 4..7 * 4].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn short_buffer_is_truncated_not_overrun() {
        let state = state_2x2();
        // Room for the cell planes only; agent/door/item writes drop.
        let mut values = vec![0.0; 5 * 4];
        write_observation(&state, AgentId(0), &mut values);
        assert_eq!(at(&values, 0, 1, 0), 1.0);
    }

    #[test]
    fn buffer_is_zeroed_before_writing() {
        let state = state_2x2();
        let mut values = vec![7.0; observation_len(2, 2)];
        write_observation(&state, AgentId(0), &mut values);
        assert!(values.iter().all(|&v| v == 0.0 || v == 1.0));
    }
}
