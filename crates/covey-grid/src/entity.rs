//! Agent, door, and ground-item value types.

use covey_core::{
    AgentId, AgentKind, Color, Direction, ItemKind, PickableItem, MAX_INVENTORY,
};
use smallvec::SmallVec;

/// A mobile entity driven by a policy, a human, or a script.
///
/// Owned exclusively by the [`Grid`](crate::Grid); other components
/// refer to agents by id and must not hold references across registry
/// mutations, since removal may reorder storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Agent {
    /// Unique within a world, never reused within one episode.
    pub id: AgentId,
    /// Current row.
    pub row: i32,
    /// Current column.
    pub col: i32,
    /// Facing direction; determines which cell `Interact` targets.
    pub facing: Direction,
    /// Cosmetic tag.
    pub color: Color,
    /// What drives this agent's actions.
    pub kind: AgentKind,
    /// Carried items, in pickup order, capped at [`MAX_INVENTORY`].
    pub inventory: SmallVec<[PickableItem; MAX_INVENTORY]>,
}

impl Agent {
    /// Create an agent with an empty inventory.
    pub fn new(
        id: AgentId,
        row: i32,
        col: i32,
        facing: Direction,
        color: Color,
        kind: AgentKind,
    ) -> Self {
        Self {
            id,
            row,
            col,
            facing,
            color,
            kind,
            inventory: SmallVec::new(),
        }
    }

    /// Whether the inventory holds a key of the given color.
    pub fn has_key(&self, color: Color) -> bool {
        self.inventory
            .iter()
            .any(|item| item.kind == ItemKind::Key && item.color == color)
    }

    /// Remove one key of the given color from the inventory.
    ///
    /// Removes the first match in pickup order; returns `false` if no
    /// matching key is carried.
    pub fn remove_key(&mut self, color: Color) -> bool {
        match self
            .inventory
            .iter()
            .position(|item| item.kind == ItemKind::Key && item.color == color)
        {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether the inventory has room for another item.
    pub fn inventory_has_room(&self) -> bool {
        self.inventory.len() < MAX_INVENTORY
    }
}

/// A toggleable, key-gated obstacle occupying one cell.
///
/// At most one door per cell is assumed by lookup semantics (position
/// queries return the first match in storage order). Closed doors block
/// movement; open doors do not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Door {
    /// Row of the occupied cell.
    pub row: i32,
    /// Column of the occupied cell.
    pub col: i32,
    /// Cosmetic color.
    pub color: Color,
    /// Color a carried key must have to open this door.
    pub key_color: Color,
    /// Current state.
    pub open: bool,
}

impl Door {
    /// A closed door.
    pub fn closed(row: i32, col: i32, color: Color, key_color: Color) -> Self {
        Self {
            row,
            col,
            color,
            key_color,
            open: false,
        }
    }
}

/// A pickable item resting on a cell.
///
/// Multiple ground items may share a cell; pickup takes the first match
/// in storage (insertion) order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroundItem {
    /// Row of the cell the item rests on.
    pub row: i32,
    /// Column of the cell the item rests on.
    pub col: i32,
    /// The item itself.
    pub item: PickableItem,
}

#[cfg(test)]
mod tests {
    use super::*;
    use covey_core::ItemId;

    fn agent() -> Agent {
        Agent::new(
            AgentId(0),
            1,
            1,
            Direction::North,
            Color::Red,
            AgentKind::Controlled,
        )
    }

    #[test]
    fn has_key_matches_kind_and_color() {
        let mut a = agent();
        a.inventory.push(PickableItem::treasure(Color::Red, ItemId(0)));
        assert!(!a.has_key(Color::Red));
        a.inventory.push(PickableItem::key(Color::Blue, ItemId(1)));
        assert!(a.has_key(Color::Blue));
        assert!(!a.has_key(Color::Red));
    }

    #[test]
    fn remove_key_takes_first_match_only() {
        let mut a = agent();
        a.inventory.push(PickableItem::key(Color::Red, ItemId(0)));
        a.inventory.push(PickableItem::key(Color::Red, ItemId(1)));
        assert!(a.remove_key(Color::Red));
        assert_eq!(a.inventory.len(), 1);
        assert_eq!(a.inventory[0].id, ItemId(1));
    }

    #[test]
    fn remove_key_reports_absence() {
        let mut a = agent();
        assert!(!a.remove_key(Color::Red));
    }

    #[test]
    fn inventory_room_respects_cap() {
        let mut a = agent();
        for i in 0..MAX_INVENTORY {
            assert!(a.inventory_has_room());
            a.inventory
                .push(PickableItem::treasure(Color::Green, ItemId(i as u32)));
        }
        assert!(!a.inventory_has_room());
    }
}
