//! Core types for the Covey grid-world simulation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: entity ids,
//! cell kinds, colors, directions, the per-agent action set, pickable
//! items, and setup error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod id;
mod types;

pub use action::{Action, Direction, ACTION_COUNT};
pub use error::SetupError;
pub use id::{AgentId, ItemId};
pub use types::{
    AgentKind, CellKind, Color, ItemKind, PickableItem, MAX_AGENTS, MAX_INVENTORY,
};
