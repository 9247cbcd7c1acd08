//! Entity registry and timestep resolvers for Covey grid worlds.
//!
//! The [`Grid`] owns the terrain and flat collections of agents, doors,
//! and ground items, and provides position-indexed lookup. On top of it
//! sit the two per-step resolvers:
//!
//! - movement: [`Grid::predict_moves`], [`Grid::resolve_collisions`],
//!   [`Grid::apply_moves`] — a two-phase predict/resolve protocol that
//!   turns N simultaneous proposals into N collision-free positions,
//!   deterministically;
//! - interaction: [`Grid::process_interactions`] — door toggling, key
//!   consumption, and item pickup, after movement has settled.
//!
//! `Grid` is a value type: [`Clone`] performs the deep copy that
//! search/rollout callers rely on, and clones share no storage with
//! their source.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod entity;
mod grid;
mod interact;
mod movement;
mod render;
mod terrain;

pub use entity::{Agent, Door, GroundItem};
pub use grid::Grid;
pub use movement::ProposedMove;
pub use terrain::Terrain;
