//! Textual rendering of the grid, for debugging and logging.

use crate::Grid;
use covey_core::Direction;
use std::fmt;

/// Row-major grid rendering, one glyph per cell, one line per row.
///
/// Precedence at a cell: agent (glyph encodes facing: `^`, `>`, `v`,
/// `<`), then door (`+` closed, `/` open), then ground item (`*`), then
/// the terrain glyph (`.`, `#`, `~`, `G`, `S`). Not a machine-parsed
/// format.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() as i32 {
            for col in 0..self.cols() as i32 {
                let glyph = if let Some(agent) = self.agent_at(row, col) {
                    match agent.facing {
                        Direction::North => '^',
                        Direction::East => '>',
                        Direction::South => 'v',
                        Direction::West => '<',
                    }
                } else if let Some(door) = self.door_at(row, col) {
                    if door.open {
                        '/'
                    } else {
                        '+'
                    }
                } else if self.items_at(row, col).next().is_some() {
                    '*'
                } else {
                    self.cell(row, col).glyph()
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
