//! Directions and the per-agent action vocabulary.

use std::fmt;

/// Cardinal facing/movement direction.
///
/// Rows grow southward and columns grow eastward, so north is `row - 1`
/// and east is `col + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    North,
    /// Towards the last column.
    East,
    /// Towards the last row.
    South,
    /// Towards column 0.
    West,
}

impl Direction {
    /// The `(row_offset, col_offset)` unit vector for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// The cell one step along this direction from `(row, col)`.
    pub fn step_from(self, row: i32, col: i32) -> (i32, i32) {
        let (dr, dc) = self.offset();
        (row + dr, col + dc)
    }

    /// The direction 90 degrees counter-clockwise from this one.
    pub fn rotate_left(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// The direction 90 degrees clockwise from this one.
    pub fn rotate_right(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }
}

/// Number of distinct actions in the vocabulary.
pub const ACTION_COUNT: usize = 6;

/// One agent's action for a single timestep.
///
/// The four cardinal values propose a one-cell move; [`Action::Interact`]
/// toggles the door in front of the agent or picks up an item from the
/// agent's own cell; [`Action::Stay`] does nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move one cell north.
    North,
    /// Move one cell east.
    East,
    /// Move one cell south.
    South,
    /// Move one cell west.
    West,
    /// Toggle a door / pick up an item. Does not move the agent.
    Interact,
    /// Do nothing.
    #[default]
    Stay,
}

impl Action {
    /// All actions in index order.
    pub const ALL: [Action; ACTION_COUNT] = [
        Action::North,
        Action::East,
        Action::South,
        Action::West,
        Action::Interact,
        Action::Stay,
    ];

    /// Decode an action from its integer index.
    ///
    /// Values outside the vocabulary degrade to [`Action::Stay`] rather
    /// than failing: action vectors may originate from untrusted policies
    /// during training, and the safest default is to do nothing.
    pub fn from_index(index: u64) -> Action {
        match index {
            0 => Action::North,
            1 => Action::East,
            2 => Action::South,
            3 => Action::West,
            4 => Action::Interact,
            5 => Action::Stay,
            _ => Action::Stay,
        }
    }

    /// The integer index of this action.
    pub fn index(self) -> u64 {
        match self {
            Action::North => 0,
            Action::East => 1,
            Action::South => 2,
            Action::West => 3,
            Action::Interact => 4,
            Action::Stay => 5,
        }
    }

    /// The movement direction this action proposes, if any.
    ///
    /// `Interact` and `Stay` return `None`: they predict the agent's
    /// current position.
    pub fn movement(self) -> Option<Direction> {
        match self {
            Action::North => Some(Direction::North),
            Action::East => Some(Direction::East),
            Action::South => Some(Direction::South),
            Action::West => Some(Direction::West),
            Action::Interact | Action::Stay => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::North => "North",
            Action::East => "East",
            Action::South => "South",
            Action::West => "West",
            Action::Interact => "Interact",
            Action::Stay => "Stay",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn offsets_are_unit_vectors() {
        assert_eq!(Direction::North.offset(), (-1, 0));
        assert_eq!(Direction::East.offset(), (0, 1));
        assert_eq!(Direction::South.offset(), (1, 0));
        assert_eq!(Direction::West.offset(), (0, -1));
    }

    #[test]
    fn rotations_are_inverse() {
        for dir in [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ] {
            assert_eq!(dir.rotate_left().rotate_right(), dir);
            assert_eq!(dir.rotate_right().rotate_left(), dir);
        }
    }

    #[test]
    fn four_right_rotations_are_identity() {
        let mut dir = Direction::North;
        for _ in 0..4 {
            dir = dir.rotate_right();
        }
        assert_eq!(dir, Direction::North);
    }

    #[test]
    fn index_round_trips_for_valid_actions() {
        for action in Action::ALL {
            assert_eq!(Action::from_index(action.index()), action);
        }
    }

    #[test]
    fn only_cardinal_actions_propose_movement() {
        assert!(Action::North.movement().is_some());
        assert!(Action::Interact.movement().is_none());
        assert!(Action::Stay.movement().is_none());
    }

    proptest! {
        #[test]
        fn out_of_range_indices_degrade_to_stay(index in ACTION_COUNT as u64..u64::MAX) {
            prop_assert_eq!(Action::from_index(index), Action::Stay);
        }
    }
}
