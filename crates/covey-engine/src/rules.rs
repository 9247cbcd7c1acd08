//! Capability traits supplied by concrete game variants.

use crate::WorldState;
use covey_core::{Action, AgentId, SetupError};

/// The three hooks every concrete game variant must supply.
///
/// The engine holds this interface as a trait object and never knows
/// concrete variant types. All three methods are pure with respect to
/// the engine's bookkeeping: `setup_world` runs once before the first
/// step, `is_terminal` after every step, and `terminal_rewards` only on
/// the step that terminates the episode.
pub trait GameRules {
    /// Short name of the variant, used by state rendering and the
    /// game registry.
    fn name(&self) -> &str;

    /// Populate the freshly created world: terrain cells, agents,
    /// doors, ground items.
    fn setup_world(&self, state: &mut WorldState) -> Result<(), SetupError>;

    /// Whether the current world state satisfies the variant's win (or
    /// loss) condition. Horizon exhaustion is the engine's job, not
    /// this predicate's.
    fn is_terminal(&self, state: &WorldState) -> bool;

    /// One terminal bonus per agent, *added* to that step's rewards.
    ///
    /// Invoked only when the episode terminates through
    /// [`GameRules::is_terminal`] or the horizon. The returned vector
    /// is indexed by agent id; missing entries count as zero.
    fn terminal_rewards(&self, state: &WorldState) -> Vec<f64>;
}

/// Action source for agents of kind [`Scripted`].
///
/// Extension point for future scripted behaviors (patrol routes, state
/// machines). The engine consults this once per scripted agent per
/// step, before movement prediction.
///
/// [`Scripted`]: covey_core::AgentKind::Scripted
pub trait ScriptedBehavior {
    /// Propose this step's action for one scripted agent.
    fn propose(&self, state: &WorldState, agent: AgentId) -> Action;
}

/// The default scripted behavior: hold position.
///
/// A deliberate no-op; games that want moving scripted agents install
/// their own [`ScriptedBehavior`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HoldPosition;

impl ScriptedBehavior for HoldPosition {
    fn propose(&self, _state: &WorldState, _agent: AgentId) -> Action {
        Action::Stay
    }
}
