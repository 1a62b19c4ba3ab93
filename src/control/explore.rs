use super::table::Table;
use crate::gameplay::action::Action;
use crate::gameplay::state::State;
use crate::Count;
use crate::Probability;
use crate::Result;
use crate::Utility;
use crate::N_ACTIONS;
use crate::N_DEALER;
use crate::N_PLAYER;
use rand::Rng;

/// how the exploration rate is chosen at each decision
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Schedule {
    /// ε = N0 / (N0 + N(s)), where N(s) counts this decision
    Decaying(Probability),
    /// constant ε, no visit counting
    Fixed(Probability),
}

/// Explorer is the epsilon-greedy policy shared by all controllers.
///
/// it owns the per-state visit counts that drive the decaying schedule.
/// the action values themselves belong to the controller and are
/// supplied lazily, so terminal states never touch them.
#[derive(Debug, Clone)]
pub struct Explorer {
    schedule: Schedule,
    visits: [[Count; N_PLAYER]; N_DEALER],
}

impl From<Schedule> for Explorer {
    fn from(schedule: Schedule) -> Self {
        Self {
            schedule,
            visits: [[0; N_PLAYER]; N_DEALER],
        }
    }
}

impl Explorer {
    pub fn decaying(n0: Probability) -> Self {
        Self::from(Schedule::Decaying(n0))
    }
    pub fn fixed(epsilon: Probability) -> Self {
        Self::from(Schedule::Fixed(epsilon))
    }
    pub fn schedule(&self) -> Schedule {
        self.schedule
    }
    /// how many decisions have been made in this state
    pub fn visits(&self, dealer: i32, player: i32) -> Result<Count> {
        let (d, p) = Table::<Count>::cell(dealer, player)?;
        Ok(self.visits[d][p])
    }

    /// pick an action for state.
    ///
    /// terminal states get Action::SENTINEL without counting a visit
    /// or consulting values. otherwise a single uniform draw decides
    /// between exploring and exploiting; an exact tie between the two
    /// estimates also falls through to a uniformly random action.
    pub fn choose<R, F>(&mut self, state: &State, rng: &mut R, values: F) -> Result<Action>
    where
        R: Rng + ?Sized,
        F: FnOnce() -> Result<[Utility; N_ACTIONS]>,
    {
        if state.is_terminal() {
            return Ok(Action::SENTINEL);
        }
        let epsilon = self.epsilon(state)?;
        let [hit, stick] = values()?;
        if rng.gen::<Probability>() <= epsilon || hit == stick {
            Ok(Action::random(rng))
        } else if hit > stick {
            Ok(Action::Hit)
        } else {
            Ok(Action::Stick)
        }
    }

    /// exploration rate for this decision, counting the visit first
    fn epsilon(&mut self, state: &State) -> Result<Probability> {
        match self.schedule {
            Schedule::Fixed(epsilon) => Ok(epsilon),
            Schedule::Decaying(n0) => {
                let (d, p) = Table::<Count>::cell(state.showing(), state.player())?;
                self.visits[d][p] += 1;
                Ok(n0 / (n0 + self.visits[d][p] as Probability))
            }
        }
    }
}
