use super::explore::Explorer;
use super::table::Table;
use super::traits::Controller;
use super::traits::Temporal;
use crate::gameplay::action::Action;
use crate::gameplay::state::State;
use crate::Count;
use crate::Probability;
use crate::Result;
use crate::Utility;
use rand::Rng;

/// Sarsa is tabular backward-view SARSA(λ) with accumulating traces.
///
/// the step size is not a constant but 1 / N(s, a), where N counts every
/// update of (s, a) over the controller's lifetime. consequently each
/// transition sweeps the whole table: every pair that has ever been
/// visited is nudged by its own trace and step size. that is an
/// O(|S × A|) cost per transition and it bounds episode throughput.
/// with λ = 0 the sweep collapses to one-step SARSA.
#[derive(Debug, Clone)]
pub struct Sarsa {
    lambda: Probability,
    explorer: Explorer,
    values: Table<Utility>,
    counts: Table<Count>,
    traces: Table<Utility>,
}

impl Sarsa {
    pub fn new(lambda: Probability, n0: Probability) -> Self {
        Self {
            lambda,
            explorer: Explorer::decaying(n0),
            values: Table::default(),
            counts: Table::default(),
            traces: Table::default(),
        }
    }
    pub fn table(&self) -> &Table<Utility> {
        &self.values
    }
    pub fn counts(&self) -> &Table<Count> {
        &self.counts
    }
    pub fn traces(&self) -> &Table<Utility> {
        &self.traces
    }
}

impl From<Probability> for Sarsa {
    fn from(lambda: Probability) -> Self {
        Self::new(lambda, crate::EXPLORATION_N0)
    }
}

impl Controller for Sarsa {
    fn name() -> String {
        "sarsa_controller".to_string()
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

impl Temporal for Sarsa {
    fn update(
        &mut self,
        prev: &State,
        prev_action: Action,
        curr: &State,
        curr_action: Action,
        reward: Utility,
    ) -> Result<()> {
        let future = if curr.is_terminal() {
            0.
        } else {
            self.values.at(curr, curr_action)?
        };
        let delta = reward - self.values.at(prev, prev_action)? + future;
        *self.traces.at_mut(prev, prev_action)? += 1.;
        *self.counts.at_mut(prev, prev_action)? += 1;
        for ((q, e), n) in self
            .values
            .iter_mut()
            .zip(self.traces.iter_mut())
            .zip(self.counts.iter())
            .filter(|(_, n)| **n > 0)
        {
            *q += delta * *e / *n as Utility;
            *e *= self.lambda;
        }
        Ok(())
    }
    fn clear(&mut self) {
        self.traces.fill(0.);
    }
    fn lambda(&self) -> Probability {
        self.lambda
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::cards::color::Color;
    use crate::gameplay::game::Easy21;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn state(dealer: i32, player: i32, terminal: bool) -> State {
        State::from((Card::from((dealer, Color::Black)), player, terminal))
    }

    /// play one episode the way the driver does
    fn episode(sarsa: &mut Sarsa, rng: &mut SmallRng) -> Vec<(State, Action)> {
        let env = Easy21;
        let mut visited = Vec::new();
        sarsa.clear();
        let mut prev = env.initialize(rng);
        let mut prev_action = sarsa.action(&prev, rng).expect("in domain");
        while !prev.is_terminal() {
            let (curr, reward) = env.step(&prev, prev_action, rng);
            let curr_action = sarsa.action(&curr, rng).expect("in domain");
            sarsa
                .update(&prev, prev_action, &curr, curr_action, reward)
                .expect("in domain");
            visited.push((prev, prev_action));
            prev = curr;
            prev_action = curr_action;
        }
        visited
    }

    #[test]
    fn terminal_transition() {
        let mut sarsa = Sarsa::from(0.5);
        let prev = state(3, 15, false);
        let curr = state(3, 15, true);
        sarsa
            .update(&prev, Action::Stick, &curr, Action::SENTINEL, 1.)
            .expect("in domain");
        // δ = 1, e = 1, N = 1
        assert!(sarsa.table().at(&prev, Action::Stick).expect("in domain") == 1.);
        assert!(sarsa.traces().at(&prev, Action::Stick).expect("in domain") == 0.5);
        assert!(sarsa.counts().at(&prev, Action::Stick).expect("in domain") == 1);
    }

    #[test]
    fn bootstraps_from_next_pair() {
        let mut sarsa = Sarsa::from(0.);
        let a = state(6, 10, false);
        let b = state(6, 18, false);
        let end = state(6, 18, true);
        sarsa.update(&b, Action::Stick, &end, Action::SENTINEL, 1.).expect("in domain");
        sarsa.clear();
        sarsa.update(&a, Action::Hit, &b, Action::Stick, 0.).expect("in domain");
        assert!(sarsa.table().at(&a, Action::Hit).expect("in domain") == 1.);
        assert!(sarsa.table().at(&b, Action::Stick).expect("in domain") == 1.);
    }

    #[test]
    fn traces_propagate_backwards() {
        let mut sarsa = Sarsa::from(1.);
        let a = state(6, 10, false);
        let b = state(6, 14, false);
        let end = state(6, 14, true);
        sarsa.update(&a, Action::Hit, &b, Action::Stick, 0.).expect("in domain");
        sarsa.update(&b, Action::Stick, &end, Action::SENTINEL, -1.).expect("in domain");
        // λ = 1 carries the full terminal error back to the first pair
        assert!(sarsa.table().at(&a, Action::Hit).expect("in domain") == -1.);
        assert!(sarsa.table().at(&b, Action::Stick).expect("in domain") == -1.);
    }

    #[test]
    fn step_size_shrinks_with_visits() {
        let mut sarsa = Sarsa::from(0.);
        let s = state(1, 20, false);
        let end = state(1, 20, true);
        for g in [1., -1., 1., 1.] {
            sarsa.clear();
            sarsa.update(&s, Action::Stick, &end, Action::SENTINEL, g).expect("in domain");
        }
        assert!((sarsa.table().at(&s, Action::Stick).expect("in domain") - 0.5).abs() < 1e-6);
    }

    #[test]
    fn lambda_zero_keeps_no_traces() {
        let ref mut rng = SmallRng::seed_from_u64(17);
        let mut sarsa = Sarsa::from(0.);
        for _ in 0..50 {
            episode(&mut sarsa, rng);
            assert!(sarsa.traces().iter().all(|e| *e == 0.));
        }
    }

    #[test]
    fn only_visited_pairs_learn() {
        for lambda in [0., 0.5] {
            let ref mut rng = SmallRng::seed_from_u64(23);
            let mut sarsa = Sarsa::from(lambda);
            let visited = episode(&mut sarsa, rng);
            for (d, p, a) in Table::<Utility>::keys() {
                let q = sarsa.table().get(d, p, a).expect("in domain");
                let seen = visited
                    .iter()
                    .any(|(s, x)| s.showing() == d && s.player() == p && *x == a);
                assert!(q == 0. || seen, "({d}, {p}, {a}) learned {q} unvisited");
            }
        }
    }

    #[test]
    fn clear_keeps_counts() {
        let ref mut rng = SmallRng::seed_from_u64(29);
        let mut sarsa = Sarsa::from(0.9);
        let visited = episode(&mut sarsa, rng);
        let total = sarsa.counts().iter().map(|n| *n as usize).sum::<usize>();
        assert!(total == visited.len());
        sarsa.clear();
        assert!(sarsa.traces().iter().all(|e| *e == 0.));
        assert!(sarsa.counts().iter().map(|n| *n as usize).sum::<usize>() == total);
    }
}
