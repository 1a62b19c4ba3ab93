use super::coarse::Coarse;
use super::feature::Feature;
use super::feature::Features;
use crate::control::explore::Explorer;
use crate::control::table::Table;
use crate::control::traits::Controller;
use crate::control::traits::Temporal;
use crate::gameplay::action::Action;
use crate::gameplay::state::State;
use crate::Probability;
use crate::Result;
use crate::Utility;
use rand::Rng;

/// LinearSarsa is semi-gradient SARSA(λ) over coarse-coded binary features.
///
/// Q(s, a) = w · x(s, a). with binary features the gradient of Q with
/// respect to w is x itself, so the trace update adds 1 at each active
/// index. exploration and step size are both constant.
#[derive(Debug, Clone)]
pub struct LinearSarsa {
    lambda: Probability,
    step: Utility,
    explorer: Explorer,
    features: Features,
    weights: Vec<Utility>,
    traces: Vec<Utility>,
}

impl LinearSarsa {
    pub fn new(lambda: Probability, epsilon: Probability, step: Utility, coarse: Coarse) -> Self {
        let features = Features::from(coarse);
        let n = features.dimension();
        Self {
            lambda,
            step,
            explorer: Explorer::fixed(epsilon),
            features,
            weights: vec![0.; n],
            traces: vec![0.; n],
        }
    }
    /// w · x(s, a), zero for terminal states
    pub fn value(&self, state: &State, action: Action) -> Result<Utility> {
        Ok(self.features.of(state, action)?.dot(&self.weights))
    }
    pub fn weights(&self) -> &[Utility] {
        &self.weights
    }
    pub fn traces(&self) -> &[Utility] {
        &self.traces
    }
    pub fn features(&self) -> &Features {
        &self.features
    }
    pub fn step(&self) -> Utility {
        self.step
    }
}

impl From<Probability> for LinearSarsa {
    fn from(lambda: Probability) -> Self {
        Self::new(
            lambda,
            crate::LFA_EPSILON,
            crate::LFA_STEP_SIZE,
            Coarse::default(),
        )
    }
}

impl Controller for LinearSarsa {
    fn name() -> String {
        "lfa_controller".to_string()
    }
    fn action<R>(&mut self, state: &State, rng: &mut R) -> Result<Action>
    where
        R: Rng + ?Sized,
    {
        let features = &self.features;
        let weights = &self.weights;
        self.explorer.choose(state, rng, || {
            let hit = features.of(state, Action::Hit)?.dot(weights);
            let stick = features.of(state, Action::Stick)?.dot(weights);
            Ok([hit, stick])
        })
    }
    fn values(&self) -> Result<Table<Utility>> {
        Table::from_fn(|d, p, a| Ok(self.features.lookup(d, p, a)?.dot(&self.weights)))
    }
}

impl Temporal for LinearSarsa {
    fn update(
        &mut self,
        prev: &State,
        prev_action: Action,
        curr: &State,
        curr_action: Action,
        reward: Utility,
    ) -> Result<()> {
        let x: Feature = self.features.of(prev, prev_action)?;
        let future = self.value(curr, curr_action)?;
        let delta = reward + future - x.dot(&self.weights);
        for &i in x.active() {
            self.traces[i] += 1.;
        }
        for (w, e) in self.weights.iter_mut().zip(self.traces.iter_mut()) {
            *w += self.step * delta * *e;
            *e *= self.lambda;
        }
        Ok(())
    }
    fn clear(&mut self) {
        self.traces.iter_mut().for_each(|e| *e = 0.);
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

    #[test]
    fn starts_at_zero() {
        let lfa = LinearSarsa::from(0.5);
        assert!(lfa.weights().len() == 36);
        assert!(lfa.values().expect("in domain").iter().all(|q| *q == 0.));
    }

    #[test]
    fn terminal_update() {
        let mut lfa = LinearSarsa::from(0.);
        let prev = state(4, 8, false);
        let end = state(4, 8, true);
        lfa.update(&prev, Action::Stick, &end, Action::SENTINEL, 1.)
            .expect("in domain");
        // δ = 1, each of the 4 active weights moves by α
        for i in 0..36 {
            let expected = if [3, 5, 15, 17].contains(&i) { 0.01 } else { 0. };
            assert!((lfa.weights()[i] - expected).abs() < 1e-7, "w[{i}]");
        }
        assert!((lfa.value(&prev, Action::Stick).expect("in domain") - 0.04).abs() < 1e-6);
        assert!(lfa.value(&end, Action::Stick).expect("terminal") == 0.);
        assert!(lfa.traces().iter().all(|e| *e == 0.));
    }

    #[test]
    fn traces_accumulate_then_decay() {
        let mut lfa = LinearSarsa::from(0.5);
        let a = state(1, 1, false);
        let b = state(1, 3, false);
        lfa.update(&a, Action::Hit, &b, Action::Hit, 0.).expect("in domain");
        // (1,1,Hit) and (1,3,Hit) share feature 0 only
        assert!(lfa.traces()[0] == 0.5);
        lfa.update(&b, Action::Hit, &b, Action::Hit, 0.).expect("in domain");
        assert!(lfa.traces()[0] == 0.75);
        lfa.clear();
        assert!(lfa.traces().iter().all(|e| *e == 0.));
    }

    #[test]
    fn bootstraps_from_next_pair() {
        let mut lfa = LinearSarsa::from(0.5);
        let a = state(4, 8, false);
        let b = state(4, 12, false);
        let end = state(4, 12, true);
        // dealer 4 sits in [1,4] and [4,7]; player 8 in [4,9] and [7,12];
        // player 12 in [7,12] and [10,15]
        let xa = [2, 4, 14, 16];
        let xb = [5, 7, 17, 19];
        assert!(lfa.features().lookup(4, 8, Action::Hit).expect("cached").active() == xa);
        assert!(lfa.features().lookup(4, 12, Action::Stick).expect("cached").active() == xb);

        // w·x(b, Stick) = 4 × 0.01 after one winning stick
        lfa.update(&b, Action::Stick, &end, Action::SENTINEL, 1.)
            .expect("in domain");
        lfa.clear();
        let qb = lfa.value(&b, Action::Stick).expect("in domain");
        assert!((qb - 0.04).abs() < 1e-6);

        // δ = 0 + Q(b, Stick) − Q(a, Hit) = 0.04, e = 1 on x(a, Hit)
        lfa.update(&a, Action::Hit, &b, Action::Stick, 0.)
            .expect("in domain");
        for i in xa {
            assert!((lfa.weights()[i] - 0.01 * 0.04).abs() < 1e-7, "w[{i}]");
            assert!(lfa.traces()[i] == 0.5);
        }
        for i in xb {
            assert!((lfa.weights()[i] - 0.01).abs() < 1e-7, "w[{i}]");
        }

        // δ = −1 − 0.04, e = 1 on x(b, Stick) and the decayed 0.5 on x(a, Hit)
        lfa.update(&b, Action::Stick, &end, Action::SENTINEL, -1.)
            .expect("in domain");
        for i in xa {
            let expected = 0.01 * 0.04 + 0.01 * -1.04 * 0.5;
            assert!((lfa.weights()[i] - expected).abs() < 1e-6, "w[{i}]");
            assert!(lfa.traces()[i] == 0.25);
        }
        for i in xb {
            let expected = 0.01 + 0.01 * -1.04;
            assert!((lfa.weights()[i] - expected).abs() < 1e-6, "w[{i}]");
            assert!(lfa.traces()[i] == 0.5);
        }
        let untouched = (0..36).filter(|i| !xa.contains(i) && !xb.contains(i));
        for i in untouched {
            assert!(lfa.weights()[i] == 0.);
        }
    }

    #[test]
    fn values_match_features() {
        let ref mut rng = SmallRng::seed_from_u64(31);
        let env = Easy21;
        let mut lfa = LinearSarsa::from(0.7);
        for _ in 0..200 {
            lfa.clear();
            let mut prev = env.initialize(rng);
            let mut prev_action = lfa.action(&prev, rng).expect("in domain");
            while !prev.is_terminal() {
                let (curr, reward) = env.step(&prev, prev_action, rng);
                let curr_action = lfa.action(&curr, rng).expect("in domain");
                lfa.update(&prev, prev_action, &curr, curr_action, reward)
                    .expect("in domain");
                prev = curr;
                prev_action = curr_action;
            }
        }
        let table = lfa.values().expect("in domain");
        for (d, p, a) in Table::<Utility>::keys() {
            let q = lfa.value(&state(d, p, false), a).expect("in domain");
            assert!(table.get(d, p, a).expect("in domain") == q);
        }
        assert!(lfa.weights().iter().all(|w| w.is_finite()));
    }
}
