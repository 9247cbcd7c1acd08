//! Concrete game variants built on the Covey engine.
//!
//! Each variant is a [`GameRules`](covey_engine::GameRules)
//! implementation: it lays out the world, decides when an episode has
//! been won, and hands out the terminal bonus. The engine owns
//! everything else — movement, interactions, hazards, horizons.
//!
//! Variants can be constructed directly or looked up by name through
//! the [`GameRegistry`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod goal_rush;
mod registry;
mod rendezvous;
mod vault;

pub use goal_rush::GoalRush;
pub use registry::{GameFactory, GameRegistry};
pub use rendezvous::Rendezvous;
pub use vault::Vault;
