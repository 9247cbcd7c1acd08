//! Covey: a deterministic multi-agent grid-world engine for
//! reinforcement learning.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Covey sub-crates. For most users, adding `covey` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use covey::prelude::*;
//!
//! // Look up a built-in variant and configure a small world.
//! let registry = GameRegistry::with_builtins();
//! let game = registry
//!     .create(
//!         "goal_rush",
//!         GameConfig {
//!             rows: 5,
//!             cols: 5,
//!             horizon: 20,
//!             num_agents: 2,
//!             ..GameConfig::default()
//!         },
//!     )
//!     .expect("goal_rush is built in")
//!     .expect("config is valid");
//!
//! // Episodes live in plain `WorldState` values; clone to branch.
//! let mut state = game.new_initial_state().expect("setup succeeds");
//! game.step(&mut state, &[Action::North, Action::East]);
//! assert_eq!(state.timestep(), 1);
//! assert!(!state.is_terminal());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `covey-core` | IDs, actions, cell kinds, error types |
//! | [`grid`] | `covey-grid` | Entity registry, movement, interactions, rendering |
//! | [`engine`] | `covey-engine` | Game orchestration, world state, observations |
//! | [`games`] | `covey-games` | Built-in variants and the game registry |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, ids, and errors (`covey-core`).
///
/// Actions and directions, agent and item ids, cell kinds, colors, and
/// [`types::SetupError`].
pub use covey_core as types;

/// The entity registry and per-step resolvers (`covey-grid`).
///
/// [`grid::Grid`] owns agents, doors, and ground items, and implements
/// movement prediction, collision resolution, interaction processing,
/// and ASCII rendering.
pub use covey_grid as grid;

/// Game orchestration (`covey-engine`).
///
/// [`engine::Game`] drives [`engine::WorldState`] one synchronous
/// timestep at a time; [`engine::obs`] extracts flat observation
/// tensors.
pub use covey_engine as engine;

/// Built-in game variants (`covey-games`).
///
/// [`games::GoalRush`], [`games::Rendezvous`], and [`games::Vault`],
/// plus the name-to-factory [`games::GameRegistry`].
pub use covey_games as games;

/// Common imports for typical Covey usage.
///
/// ```rust
/// use covey::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use covey_core::{
        Action, AgentId, AgentKind, CellKind, Color, Direction, ItemId, ItemKind,
        PickableItem, SetupError,
    };

    // Entity registry
    pub use covey_grid::{Agent, Door, Grid, GroundItem};

    // Engine
    pub use covey_engine::{
        Game, GameConfig, GameRules, HoldPosition, RewardConfig, ScriptedBehavior,
        WorldState,
    };

    // Variants and registry
    pub use covey_games::{GameRegistry, GoalRush, Rendezvous, Vault};
}
