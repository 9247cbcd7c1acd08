//! Interaction resolution: doors, keys, and item pickup.

use crate::Grid;
use covey_core::{Action, AgentId};

impl Grid {
    /// Process every agent's `Interact` action, after movement settles.
    ///
    /// Agents are handled one at a time in storage order; that order is
    /// the deliberate tie-break for "which agent picks up an item
    /// first". For each interacting agent:
    ///
    /// 1. The cell directly in front (along facing) is computed; if it
    ///    is off-grid, nothing happens.
    /// 2. A door there is toggled: a closed door opens if the agent
    ///    carries a key of the required color (consuming exactly one
    ///    such key); an open door closes without needing a key; a
    ///    closed door with no matching key is a no-op. Door handling
    ///    short-circuits — the agent cannot also pick up an item.
    /// 3. With no door in front, the agent picks up at most one ground
    ///    item from its *own* cell: the first match in storage order,
    ///    provided its inventory has room.
    pub fn process_interactions(&mut self, action_for: impl Fn(AgentId) -> Action) {
        let interactors: Vec<AgentId> = self
            .agents()
            .iter()
            .filter(|agent| action_for(agent.id) == Action::Interact)
            .map(|agent| agent.id)
            .collect();

        for id in interactors {
            self.interact_one(id);
        }
    }

    fn interact_one(&mut self, id: AgentId) {
        let Some(agent) = self.agent(id) else { return };
        let (row, col) = (agent.row, agent.col);
        let (front_row, front_col) = agent.facing.step_from(row, col);
        if !self.terrain().in_bounds(front_row, front_col) {
            return;
        }

        if let Some(door) = self.door_at(front_row, front_col) {
            let key_color = door.key_color;
            let open = door.open;
            if !open {
                let has_key = self.agent(id).is_some_and(|a| a.has_key(key_color));
                if has_key {
                    self.door_at_mut(front_row, front_col).unwrap().open = true;
                    if let Some(a) = self.agent_mut(id) {
                        a.remove_key(key_color);
                    }
                }
            } else {
                self.door_at_mut(front_row, front_col).unwrap().open = false;
            }
            return;
        }

        // No door in front: pick up from the agent's own cell.
        let Some(agent) = self.agent(id) else { return };
        if !agent.inventory_has_room() {
            return;
        }
        let Some(picked) = self.items_at(row, col).next().map(|gi| gi.item) else {
            return;
        };
        self.remove_item(row, col, picked.id);
        if let Some(a) = self.agent_mut(id) {
            a.inventory.push(picked);
        }
    }
}
