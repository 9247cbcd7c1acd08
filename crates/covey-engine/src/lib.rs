//! Timestep orchestration and game-rules hooks for Covey grid worlds.
//!
//! A [`Game`] pairs a [`GameRules`] implementation (world setup,
//! termination predicate, terminal reward function) with a validated
//! [`GameConfig`] and drives [`WorldState`] forward one synchronous
//! timestep at a time. `WorldState` is a plain value: cloning it is the
//! deep snapshot that search and rollout algorithms branch on.
//!
//! The per-step sequence is fixed: reward accumulators reset to the
//! step penalty, scripted agents propose actions, movement resolves,
//! interactions apply, agents on hazard cells are penalized and
//! removed, the termination predicate runs, terminal bonuses are added,
//! returns accumulate, and the step counter advances.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod game;
pub mod obs;
mod rules;
mod state;

pub use config::{GameConfig, RewardConfig};
pub use game::Game;
pub use rules::{GameRules, HoldPosition, ScriptedBehavior};
pub use state::WorldState;
