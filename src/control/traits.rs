use super::table::Surface;
use super::table::Table;
use crate::gameplay::action::Action;
use crate::gameplay::state::State;
use crate::Probability;
use crate::Result;
use crate::Utility;
use rand::Rng;

/// the capability every controller offers to whoever drives episodes:
/// choose an action, and expose a dense read-only view of what has been learned.
pub trait Controller {
    /// directory-friendly identifier used for exported results
    fn name() -> String
    where
        Self: Sized;

    /// epsilon-greedy action for state, drawing any randomness from rng
    fn action<R>(&mut self, state: &State, rng: &mut R) -> Result<Action>
    where
        R: Rng + ?Sized;

    /// Q(d, p, a) for every state-action in the domain
    fn values(&self) -> Result<Table<Utility>>;

    /// max_a Q(d, p, a) for every state in the domain
    fn surface(&self) -> Result<Surface> {
        Ok(Surface::from(&self.values()?))
    }

    /// mean squared distance from a reference action-value table
    fn mean_squared_error(&self, reference: &Table<Utility>) -> Result<Utility> {
        Ok(self.values()?.mean_squared_error(reference))
    }
}

/// controllers that learn online from every transition, crediting
/// recently visited pairs through an eligibility trace.
///
/// traces live for one episode only. the driver calls clear() before
/// the first action of every episode and never interleaves transitions
/// from two episodes on the same instance.
pub trait Temporal: Controller {
    fn update(
        &mut self,
        prev: &State,
        prev_action: Action,
        curr: &State,
        curr_action: Action,
        reward: Utility,
    ) -> Result<()>;

    /// zero every eligibility trace
    fn clear(&mut self);

    /// trace decay factor λ
    fn lambda(&self) -> Probability;
}
