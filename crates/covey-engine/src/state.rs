//! The clonable per-episode world state and its step transition.

use crate::{GameRules, RewardConfig};
use covey_core::{
    Action, AgentId, AgentKind, CellKind, Color, Direction, PickableItem, SetupError,
};
use covey_grid::{Agent, Door, Grid, GroundItem};
use std::fmt;

/// Full state of one episode: grid, step counter, rewards, returns.
///
/// A plain value type — [`Clone`] deep-copies every collection, so a
/// clone shares no mutable storage with its source and can be stepped
/// independently for search. Equality is structural, giving the
/// in-memory snapshot comparisons rollout code relies on.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldState {
    grid: Grid,
    horizon: u32,
    num_agents: usize,
    timestep: u32,
    rewards: Vec<f64>,
    returns: Vec<f64>,
    terminal: bool,
}

impl WorldState {
    /// Create an empty world. Setup placement calls populate it before
    /// the first step.
    pub fn new(
        rows: u32,
        cols: u32,
        horizon: u32,
        num_agents: usize,
    ) -> Result<Self, SetupError> {
        Ok(Self {
            grid: Grid::new(rows, cols)?,
            horizon,
            num_agents,
            timestep: 0,
            rewards: vec![0.0; num_agents],
            returns: vec![0.0; num_agents],
            terminal: false,
        })
    }

    // ── Queries ─────────────────────────────────────────────────

    /// The entity registry.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Steps taken so far.
    pub fn timestep(&self) -> u32 {
        self.timestep
    }

    /// The configured horizon.
    pub fn horizon(&self) -> u32 {
        self.horizon
    }

    /// Number of agents this episode started with.
    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    /// Whether the episode has ended, by predicate or by horizon.
    /// Terminal is absorbing: once true, steps are no-ops.
    pub fn is_terminal(&self) -> bool {
        self.terminal || self.timestep >= self.horizon
    }

    /// Last step's rewards, one entry per agent id.
    pub fn rewards(&self) -> &[f64] {
        &self.rewards
    }

    /// Running per-agent sums of all step rewards this episode.
    pub fn returns(&self) -> &[f64] {
        &self.returns
    }

    // ── Setup placement calls ───────────────────────────────────

    /// Add an agent. Setup-time; fails on duplicate id, population cap,
    /// or out-of-bounds position.
    pub fn add_agent(
        &mut self,
        id: AgentId,
        row: i32,
        col: i32,
        facing: Direction,
        color: Color,
        kind: AgentKind,
    ) -> Result<(), SetupError> {
        self.grid
            .add_agent(Agent::new(id, row, col, facing, color, kind))
    }

    /// Mark a cell as a wall.
    pub fn place_wall(&mut self, row: i32, col: i32) -> Result<(), SetupError> {
        self.grid.set_cell(row, col, CellKind::Wall)
    }

    /// Mark a cell as a hazard.
    pub fn place_hazard(&mut self, row: i32, col: i32) -> Result<(), SetupError> {
        self.grid.set_cell(row, col, CellKind::Hazard)
    }

    /// Mark a cell as a goal.
    pub fn place_goal(&mut self, row: i32, col: i32) -> Result<(), SetupError> {
        self.grid.set_cell(row, col, CellKind::Goal)
    }

    /// Mark a cell as a sync point.
    pub fn place_sync_point(&mut self, row: i32, col: i32) -> Result<(), SetupError> {
        self.grid.set_cell(row, col, CellKind::SyncPoint)
    }

    /// Add a door.
    pub fn add_door(&mut self, door: Door) -> Result<(), SetupError> {
        self.grid.add_door(door)
    }

    /// Put an item on the floor.
    pub fn add_ground_item(
        &mut self,
        row: i32,
        col: i32,
        item: PickableItem,
    ) -> Result<(), SetupError> {
        self.grid.add_item(GroundItem { row, col, item })
    }

    // ── Step transition ─────────────────────────────────────────

    /// Advance exactly one timestep. `actions` is indexed by agent id;
    /// entries beyond its length were already defaulted by the caller.
    pub(crate) fn advance(
        &mut self,
        actions: &[Action],
        rewards: &RewardConfig,
        rules: &dyn GameRules,
    ) {
        debug_assert!(!self.is_terminal());

        for reward in &mut self.rewards {
            *reward = rewards.step_penalty;
        }

        let action_for =
            |id: AgentId| actions.get(id.index()).copied().unwrap_or(Action::Stay);

        let mut moves = self.grid.predict_moves(action_for);
        self.grid.resolve_collisions(&mut moves);
        self.grid.apply_moves(&moves);
        self.grid.process_interactions(action_for);

        // Penalize before erasing: the ids are gone afterwards.
        for id in self.grid.dead_agents() {
            if let Some(reward) = self.rewards.get_mut(id.index()) {
                *reward = rewards.death_penalty;
            }
        }
        self.grid.remove_dead_agents();

        self.terminal = rules.is_terminal(self);
        if self.terminal {
            let bonuses = rules.terminal_rewards(self);
            for (reward, bonus) in self.rewards.iter_mut().zip(bonuses) {
                *reward += bonus;
            }
        }

        for (ret, reward) in self.returns.iter_mut().zip(&self.rewards) {
            *ret += reward;
        }

        self.timestep += 1;
    }
}

impl fmt::Display for WorldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Timestep: {}/{}", self.timestep, self.horizon)?;
        writeln!(f, "Terminal: {}", self.is_terminal())?;
        write!(f, "Returns: [")?;
        for (i, ret) in self.returns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{ret}")?;
        }
        writeln!(f, "]")?;
        writeln!(f)?;
        write!(f, "{}", self.grid)
    }
}
