//! Cell kinds, colors, agent kinds, and pickable items.

use crate::ItemId;

/// Maximum number of agents in one world.
pub const MAX_AGENTS: usize = 25;

/// Maximum number of items an agent can carry.
pub const MAX_INVENTORY: usize = 8;

/// Static classification of one terrain cell.
///
/// Terrain is immutable after world setup; dynamic obstacles (doors,
/// agents) are tracked separately by the registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Agents can walk freely.
    #[default]
    Empty,
    /// No agent can enter.
    Wall,
    /// Agents can enter but die at end-of-step.
    Hazard,
    /// Variant-specific win cell for goal-seeking games.
    Goal,
    /// Variant-specific synchronization cell; winning requires all
    /// designated agents to occupy these simultaneously.
    SyncPoint,
}

impl CellKind {
    /// Single-character glyph used by the textual rendering.
    pub fn glyph(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Wall => '#',
            CellKind::Hazard => '~',
            CellKind::Goal => 'G',
            CellKind::SyncPoint => 'S',
        }
    }
}

/// Color tag for agents, doors, and items.
///
/// Cosmetic for agents and doors; for keys it is the matching criterion
/// against a door's required key color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red.
    Red,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Purple.
    Purple,
    /// Orange.
    Orange,
    /// Cyan.
    Cyan,
    /// Pink.
    Pink,
}

impl Color {
    /// All colors, in the order used to assign agent colors round-robin.
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
        Color::Cyan,
        Color::Pink,
    ];
}

/// What drives an agent's actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AgentKind {
    /// Actions come from the per-step action vector (a policy or a human).
    Controlled,
    /// Actions come from a `ScriptedBehavior` supplied to the engine.
    Scripted,
}

/// The kind of a pickable item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Opens doors whose required key color matches. Consumed on use.
    Key,
    /// Scoring item with no mechanical effect.
    Treasure,
}

/// A pickable item, either on the floor or inside an agent's inventory.
///
/// Value type with structural equality. An item is held in exactly one
/// place at a time; pickup moves it from ground storage into an
/// inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PickableItem {
    /// Key or treasure.
    pub kind: ItemKind,
    /// Match criterion for keys, cosmetic for treasure.
    pub color: Color,
    /// Unique among items in one world.
    pub id: ItemId,
}

impl PickableItem {
    /// A key of the given color.
    pub fn key(color: Color, id: ItemId) -> Self {
        Self {
            kind: ItemKind::Key,
            color,
            id,
        }
    }

    /// A treasure of the given color.
    pub fn treasure(color: Color, id: ItemId) -> Self {
        Self {
            kind: ItemKind::Treasure,
            color,
            id,
        }
    }
}
