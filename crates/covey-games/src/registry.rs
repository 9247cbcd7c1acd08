//! Name-to-factory lookup for game variants.

use crate::{GoalRush, Rendezvous, Vault};
use covey_core::SetupError;
use covey_engine::{Game, GameConfig};
use indexmap::IndexMap;

/// Builds a [`Game`] for a variant from a validated configuration.
pub type GameFactory = fn(GameConfig) -> Result<Game, SetupError>;

/// A registry mapping variant names to factories.
///
/// Iteration order is registration order, so listings are stable across
/// runs. Registering a name twice replaces the earlier factory without
/// changing its position.
#[derive(Default)]
pub struct GameRegistry {
    factories: IndexMap<String, GameFactory>,
}

impl GameRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with the built-in variants:
    /// `goal_rush`, `rendezvous`, and `vault`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("goal_rush", |config| {
            Game::new(Box::new(GoalRush::default()), config)
        });
        registry.register("rendezvous", |config| {
            Game::new(Box::new(Rendezvous::default()), config)
        });
        registry.register("vault", |config| {
            Game::new(Box::new(Vault::default()), config)
        });
        registry
    }

    /// Register (or replace) a factory under `name`.
    pub fn register(&mut self, name: impl Into<String>, factory: GameFactory) {
        self.factories.insert(name.into(), factory);
    }

    /// Build a game by variant name. `None` for an unknown name; the
    /// inner `Result` carries configuration validation failures.
    pub fn create(
        &self,
        name: &str,
        config: GameConfig,
    ) -> Option<Result<Game, SetupError>> {
        self.factories.get(name).map(|factory| factory(config))
    }

    /// Whether a variant is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
