use super::explore::Explorer;
use super::table::Table;
use super::traits::Controller;
use crate::gameplay::action::Action;
use crate::gameplay::state::State;
use crate::Count;
use crate::Probability;
use crate::Result;
use crate::Utility;
use rand::Rng;

/// MonteCarlo control averages complete-episode returns into a table.
///
/// every visit counts: a pair that occurs twice in one trajectory
/// receives the return twice. the running mean is exact, so Q(s, a)
/// is always the arithmetic mean of the returns observed for (s, a).
#[derive(Debug, Clone)]
pub struct MonteCarlo {
    explorer: Explorer,
    values: Table<Utility>,
    counts: Table<Count>,
}

impl Default for MonteCarlo {
    fn default() -> Self {
        Self::new(crate::EXPLORATION_N0)
    }
}

impl MonteCarlo {
    pub fn new(n0: Probability) -> Self {
        Self {
            explorer: Explorer::decaying(n0),
            values: Table::default(),
            counts: Table::default(),
        }
    }

    /// fold one finished episode into the estimates.
    /// total is the episode's (undiscounted) return, shared by every pair.
    pub fn update(&mut self, trajectory: &[(State, Action)], total: Utility) -> Result<()> {
        for (state, action) in trajectory {
            let n = self.counts.at_mut(state, *action)?;
            *n += 1;
            let n = *n;
            let q = self.values.at_mut(state, *action)?;
            *q += (total - *q) / n as Utility;
        }
        Ok(())
    }

    pub fn table(&self) -> &Table<Utility> {
        &self.values
    }
    pub fn counts(&self) -> &Table<Count> {
        &self.counts
    }
    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }
}

impl Controller for MonteCarlo {
    fn name() -> String {
        "monte_carlo_controller".to_string()
    }
    fn action<R>(&mut self, state: &State, rng: &mut R) -> Result<Action>
    where
        R: Rng + ?Sized,
    {
        let values = &self.values;
        self.explorer
            .choose(state, rng, || values.pair(state.showing(), state.player()))
    }
    fn values(&self) -> Result<Table<Utility>> {
        Ok(self.values)
    }
}
