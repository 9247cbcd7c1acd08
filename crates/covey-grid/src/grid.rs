//! The entity registry: authoritative storage and position-indexed query.

use crate::{Agent, Door, GroundItem, Terrain};
use covey_core::{AgentId, CellKind, ItemId, SetupError, MAX_AGENTS};

/// Terrain plus flat collections of agents, doors, and ground items.
///
/// Entities live in contiguous vectors in insertion order; lookups scan
/// linearly, which is the right trade for the bounded entity counts this
/// engine targets (at most [`MAX_AGENTS`] agents) and keeps [`Clone`] a
/// cheap bulk duplication for rollout use.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    terrain: Terrain,
    agents: Vec<Agent>,
    doors: Vec<Door>,
    items: Vec<GroundItem>,
}

impl Grid {
    /// Create a grid over an all-empty terrain.
    pub fn new(rows: u32, cols: u32) -> Result<Self, SetupError> {
        Ok(Self {
            terrain: Terrain::new(rows, cols)?,
            agents: Vec::with_capacity(MAX_AGENTS),
            doors: Vec::new(),
            items: Vec::new(),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.terrain.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.terrain.cols()
    }

    /// The terrain.
    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    /// The kind of the cell at `(row, col)`.
    pub fn cell(&self, row: i32, col: i32) -> CellKind {
        self.terrain.kind(row, col)
    }

    /// Set the kind of the cell at `(row, col)`. Setup-time only.
    pub fn set_cell(&mut self, row: i32, col: i32, kind: CellKind) -> Result<(), SetupError> {
        self.terrain.set_kind(row, col, kind)
    }

    // ── Agents ──────────────────────────────────────────────────

    /// Add an agent to the registry.
    ///
    /// Fails if an agent with the same id already exists, if the world
    /// is at [`MAX_AGENTS`], or if the position is out of bounds — all
    /// caller bugs surfaced as errors rather than corrupted state.
    pub fn add_agent(&mut self, agent: Agent) -> Result<(), SetupError> {
        if self.agent(agent.id).is_some() {
            return Err(SetupError::DuplicateAgent { id: agent.id });
        }
        if self.agents.len() >= MAX_AGENTS {
            return Err(SetupError::TooManyAgents { max: MAX_AGENTS });
        }
        if !self.terrain.in_bounds(agent.row, agent.col) {
            return Err(SetupError::OutOfBounds {
                row: agent.row,
                col: agent.col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.agents.push(agent);
        Ok(())
    }

    /// Remove an agent by id. No-op if absent.
    pub fn remove_agent(&mut self, id: AgentId) {
        self.agents.retain(|agent| agent.id != id);
    }

    /// The agent with the given id, if present.
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.id == id)
    }

    /// Mutable access to the agent with the given id.
    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|agent| agent.id == id)
    }

    /// The first agent at `(row, col)` in storage order, if any.
    ///
    /// Between steps at most one agent occupies any cell, so "first
    /// match" is unambiguous in practice.
    pub fn agent_at(&self, row: i32, col: i32) -> Option<&Agent> {
        self.agents
            .iter()
            .find(|agent| agent.row == row && agent.col == col)
    }

    /// Ids of all agents at `(row, col)`, in storage order.
    pub fn agent_ids_at(&self, row: i32, col: i32) -> Vec<AgentId> {
        self.agents
            .iter()
            .filter(|agent| agent.row == row && agent.col == col)
            .map(|agent| agent.id)
            .collect()
    }

    /// All agents, in storage order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    // ── Doors ───────────────────────────────────────────────────

    /// Add a door.
    pub fn add_door(&mut self, door: Door) -> Result<(), SetupError> {
        if !self.terrain.in_bounds(door.row, door.col) {
            return Err(SetupError::OutOfBounds {
                row: door.row,
                col: door.col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.doors.push(door);
        Ok(())
    }

    /// Remove all doors at `(row, col)`. No-op if none.
    pub fn remove_door(&mut self, row: i32, col: i32) {
        self.doors
            .retain(|door| !(door.row == row && door.col == col));
    }

    /// The first door at `(row, col)` in storage order, if any.
    pub fn door_at(&self, row: i32, col: i32) -> Option<&Door> {
        self.doors
            .iter()
            .find(|door| door.row == row && door.col == col)
    }

    /// Mutable access to the first door at `(row, col)`.
    pub fn door_at_mut(&mut self, row: i32, col: i32) -> Option<&mut Door> {
        self.doors
            .iter_mut()
            .find(|door| door.row == row && door.col == col)
    }

    /// All doors, in storage order.
    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    // ── Ground items ────────────────────────────────────────────

    /// Add a ground item.
    pub fn add_item(&mut self, item: GroundItem) -> Result<(), SetupError> {
        if !self.terrain.in_bounds(item.row, item.col) {
            return Err(SetupError::OutOfBounds {
                row: item.row,
                col: item.col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove the ground item with the given id at `(row, col)`.
    /// No-op if absent.
    pub fn remove_item(&mut self, row: i32, col: i32, id: ItemId) {
        self.items
            .retain(|gi| !(gi.row == row && gi.col == col && gi.item.id == id));
    }

    /// All ground items at `(row, col)`, in storage order.
    pub fn items_at(&self, row: i32, col: i32) -> impl Iterator<Item = &GroundItem> {
        self.items.iter().filter(move |gi| gi.row == row && gi.col == col)
    }

    /// All ground items, in storage order.
    pub fn items(&self) -> &[GroundItem] {
        &self.items
    }

    // ── Predicates ──────────────────────────────────────────────

    /// Terrain/door legality of entering `(row, col)`.
    ///
    /// False off-grid, on walls, and on closed doors. Deliberately does
    /// not consider other agents: static legality and per-step occupancy
    /// have different update timing, and occupancy is the movement
    /// resolver's job.
    pub fn can_move_to(&self, row: i32, col: i32) -> bool {
        if !self.terrain.in_bounds(row, col) {
            return false;
        }
        if self.terrain.kind(row, col) == CellKind::Wall {
            return false;
        }
        !matches!(self.door_at(row, col), Some(door) if !door.open)
    }

    /// Whether another agent could end up at `(row, col)` right now:
    /// [`Grid::can_move_to`] plus "no agent currently there".
    pub fn is_overlappable(&self, row: i32, col: i32) -> bool {
        self.can_move_to(row, col) && self.agent_at(row, col).is_none()
    }

    /// The first cell in row-major order with empty terrain and no
    /// agent, door, or item present. Setup helper, not a hot path.
    pub fn find_empty_cell(&self) -> Option<(i32, i32)> {
        self.empty_cells().next()
    }

    /// All cells with empty terrain and no agent, door, or item, in
    /// row-major order.
    pub fn find_empty_cells(&self) -> Vec<(i32, i32)> {
        self.empty_cells().collect()
    }

    fn empty_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (rows, cols) = (self.rows() as i32, self.cols() as i32);
        (0..rows)
            .flat_map(move |row| (0..cols).map(move |col| (row, col)))
            .filter(|&(row, col)| {
                self.terrain.kind(row, col) == CellKind::Empty
                    && self.agent_at(row, col).is_none()
                    && self.door_at(row, col).is_none()
                    && self.items_at(row, col).next().is_none()
            })
    }

    // ── Hazard deaths ───────────────────────────────────────────

    /// Ids of agents currently standing on hazard terrain.
    ///
    /// Separate from [`Grid::remove_dead_agents`] because the caller
    /// needs the id list to assign penalties before the entities
    /// disappear.
    pub fn dead_agents(&self) -> Vec<AgentId> {
        self.agents
            .iter()
            .filter(|agent| self.terrain.kind(agent.row, agent.col) == CellKind::Hazard)
            .map(|agent| agent.id)
            .collect()
    }

    /// Erase all agents standing on hazard terrain.
    pub fn remove_dead_agents(&mut self) {
        let terrain = &self.terrain;
        self.agents
            .retain(|agent| terrain.kind(agent.row, agent.col) != CellKind::Hazard);
    }
}
