//! Simultaneous-movement resolution.
//!
//! Three phases, run once per step by the orchestrator:
//!
//! 1. **Predict** — each agent's action becomes a destination cell
//!    (cardinal moves offset by one; `Interact`/`Stay` keep the current
//!    position).
//! 2. **Resolve** — destinations failing terrain/door legality are
//!    corrected to the agent's current position, then every unordered
//!    pair with coinciding destinations is bounced, rescanning until no
//!    correction occurs. The rescan matters: a bounce restores an
//!    agent's own starting cell, and a follower processed in an earlier
//!    pair may already have claimed that cell, so the new conflict must
//!    be re-examined. Each correction turns one proposal into its
//!    agent's start cell, so the scan settles in at most one pass per
//!    agent.
//! 3. **Apply** — final positions are written back for all agents at
//!    once; no intermediate state is observable.
//!
//! A genuine swap (A into B's old cell, B into A's) is legal: the two
//! destinations differ, so the pairwise rule never fires.

use crate::Grid;
use covey_core::{Action, AgentId};

/// One agent's (possibly corrected) destination for this step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProposedMove {
    /// The agent this proposal belongs to.
    pub agent: AgentId,
    /// Destination row.
    pub row: i32,
    /// Destination column.
    pub col: i32,
}

impl Grid {
    /// Phase 1: predict each agent's destination from its action.
    ///
    /// `action_for` maps an agent id to its action; the orchestrator
    /// supplies the per-step action vector (with `Stay` defaults) here.
    /// Proposals are produced in agent storage order and may point
    /// off-grid; [`Grid::resolve_collisions`] corrects them.
    pub fn predict_moves(&self, action_for: impl Fn(AgentId) -> Action) -> Vec<ProposedMove> {
        self.agents()
            .iter()
            .map(|agent| {
                let (row, col) = match action_for(agent.id).movement() {
                    Some(dir) => dir.step_from(agent.row, agent.col),
                    None => (agent.row, agent.col),
                };
                ProposedMove {
                    agent: agent.id,
                    row,
                    col,
                }
            })
            .collect()
    }

    /// Phase 2: correct illegal destinations, then bounce colliding pairs.
    ///
    /// After this call no two proposals share a destination and every
    /// destination is enterable. For a two-way draw the outcome does not
    /// depend on which of the pair is listed first: both bounce.
    pub fn resolve_collisions(&self, moves: &mut [ProposedMove]) {
        // Terrain/door legality: blocked movers stay put. Per-agent and
        // order-independent.
        for mv in moves.iter_mut() {
            if !self.can_move_to(mv.row, mv.col) {
                if let Some(agent) = self.agent(mv.agent) {
                    mv.row = agent.row;
                    mv.col = agent.col;
                }
            }
        }

        // All-pairs scan, repeated until it settles: a bounce restores
        // a start cell that a follower may already have claimed in an
        // earlier pair. Every correction pins one proposal to its start
        // cell, so at most n passes run; each is O(n^2) over a bounded
        // agent count.
        let mut changed = true;
        while changed {
            changed = false;
            for i in 0..moves.len() {
                for j in (i + 1)..moves.len() {
                    if moves[i].row != moves[j].row || moves[i].col != moves[j].col {
                        continue;
                    }
                    let (Some(a), Some(b)) =
                        (self.agent(moves[i].agent), self.agent(moves[j].agent))
                    else {
                        continue;
                    };
                    let a_moved = moves[i].row != a.row || moves[i].col != a.col;
                    let b_moved = moves[j].row != b.row || moves[j].col != b.col;
                    if a_moved {
                        moves[i].row = a.row;
                        moves[i].col = a.col;
                        changed = true;
                    }
                    if b_moved {
                        moves[j].row = b.row;
                        moves[j].col = b.col;
                        changed = true;
                    }
                    // Neither moved: both already consistent.
                }
            }
        }
    }

    /// Phase 3: write resolved positions back to the registry.
    pub fn apply_moves(&mut self, moves: &[ProposedMove]) {
        for mv in moves {
            if let Some(agent) = self.agent_mut(mv.agent) {
                agent.row = mv.row;
                agent.col = mv.col;
            }
        }
    }
}
