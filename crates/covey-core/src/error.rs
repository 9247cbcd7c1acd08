//! Error types for world setup.
//!
//! Runtime stepping is infallible by design: malformed actions degrade
//! to `Stay` and absent-entity lookups return `None`. The only fallible
//! surface is setup, where a caller bug (duplicate id, out-of-bounds
//! placement) must be reported rather than silently accepted.

use crate::AgentId;
use std::error::Error;
use std::fmt;

/// Errors from world construction and setup-time placement calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// Grid constructed with a zero dimension.
    EmptyGrid,
    /// An agent with this id already exists in the world.
    DuplicateAgent {
        /// The offending id.
        id: AgentId,
    },
    /// The world already holds the maximum number of agents.
    TooManyAgents {
        /// The configured maximum.
        max: usize,
    },
    /// Setup ran out of free cells while placing agents.
    WorldFull,
    /// A game was configured with a zero horizon.
    ZeroHorizon,
    /// A game was configured with no agents.
    NoAgents,
    /// A placement call targeted a cell outside the terrain.
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
        /// Terrain rows.
        rows: u32,
        /// Terrain columns.
        cols: u32,
    },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid dimensions must be non-zero"),
            Self::DuplicateAgent { id } => {
                write!(f, "agent with id {id} already exists")
            }
            Self::TooManyAgents { max } => {
                write!(f, "world already holds the maximum of {max} agents")
            }
            Self::WorldFull => {
                write!(f, "no free cell left to place an agent")
            }
            Self::ZeroHorizon => write!(f, "horizon must be at least 1"),
            Self::NoAgents => write!(f, "a game needs at least one agent"),
            Self::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "cell ({row}, {col}) is outside the {rows}x{cols} terrain"
            ),
        }
    }
}

impl Error for SetupError {}
