use super::config::Config;
use super::curve::Curve;
use super::curve::Sweep;
use super::episode;
use crate::control::lfa::linear::LinearSarsa;
use crate::control::montecarlo::MonteCarlo;
use crate::control::sarsa::Sarsa;
use crate::control::table::Table;
use crate::control::traits::Controller;
use crate::control::traits::Temporal;
use crate::gameplay::game::Easy21;
use crate::save::export::Export;
use crate::save::snapshot::Snapshot;
use crate::Probability;
use crate::Result;
use crate::Utility;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Experiment drives every training run described by a Config.
///
/// the Monte Carlo run comes first and its table is the reference that
/// both λ sweeps are measured against. each sweep arm owns a controller
/// and a generator seeded from (seed, arm index), so arms never share
/// randomness and results do not depend on how they are scheduled.
#[derive(Debug, Clone)]
pub struct Experiment {
    config: Config,
    env: Easy21,
}

impl From<Config> for Experiment {
    fn from(config: Config) -> Self {
        Self {
            config,
            env: Easy21,
        }
    }
}

impl Experiment {
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// train the Monte Carlo reference, snapshotting its surface at each checkpoint
    pub fn monte_carlo(&self) -> Result<(MonteCarlo, Vec<Snapshot>)> {
        let episodes = self.config.episodes_mc;
        let ref mut rng = SmallRng::seed_from_u64(self.config.seed);
        let mut mc = MonteCarlo::new(self.config.n0);
        let mut snapshots = Vec::new();
        crate::resume();
        log::info!("{:<32}{:<32}", "training    monte carlo", episodes);
        #[cfg(feature = "native")]
        let progress = crate::progress(episodes);
        for n in 1..=episodes {
            if crate::interrupted() {
                log::warn!("monte carlo interrupted after {} episodes", n - 1);
                break;
            }
            episode::monte_carlo(&self.env, &mut mc, rng)?;
            #[cfg(feature = "native")]
            progress.inc(1);
            if self.config.checkpoints.contains(&n) {
                let snapshot = Snapshot::new(
                    MonteCarlo::name(),
                    n.to_string(),
                    n,
                    None,
                    mc.surface()?,
                );
                self.export(&snapshot)?;
                snapshots.push(snapshot);
            }
        }
        #[cfg(feature = "native")]
        progress.finish();
        Ok((mc, snapshots))
    }

    /// tabular SARSA(λ) for every configured λ
    pub fn sarsa(&self, reference: &Table<Utility>) -> Result<Sweep> {
        let n0 = self.config.n0;
        self.sweep(self.config.episodes_sarsa, reference, |lambda| {
            Sarsa::new(lambda, n0)
        })
    }

    /// linear SARSA(λ) for every configured λ
    pub fn lfa(&self, reference: &Table<Utility>) -> Result<Sweep> {
        let epsilon = self.config.epsilon;
        let step = self.config.step_size;
        let coarse = self.config.coarse.clone();
        self.sweep(self.config.episodes_lfa, reference, move |lambda| {
            LinearSarsa::new(lambda, epsilon, step, coarse.clone())
        })
    }
}

impl Experiment {
    fn sweep<C, F>(&self, episodes: usize, reference: &Table<Utility>, build: F) -> Result<Sweep>
    where
        C: Temporal,
        F: Fn(Probability) -> C + Sync,
    {
        let name = C::name();
        let arms = self
            .config
            .lambdas
            .iter()
            .copied()
            .enumerate()
            .collect::<Vec<_>>();
        crate::resume();
        log::info!("{:<32}{:<32}", format!("training    {}", name), arms.len());
        #[cfg(feature = "native")]
        let progress = crate::progress(episodes * arms.len());
        let tick = || {
            #[cfg(feature = "native")]
            progress.inc(1);
        };
        let run = |(index, lambda): (usize, Probability)| {
            self.arm(index, build(lambda), episodes, reference, &tick)
        };
        #[cfg(feature = "native")]
        let curves = {
            use rayon::iter::IntoParallelIterator;
            use rayon::iter::ParallelIterator;
            arms.into_par_iter().map(run).collect::<Result<Vec<Curve>>>()?
        };
        #[cfg(not(feature = "native"))]
        let curves = arms.into_iter().map(run).collect::<Result<Vec<Curve>>>()?;
        #[cfg(feature = "native")]
        progress.finish();
        let sweep = Sweep::from((name, curves));
        for (lambda, error) in sweep.finals() {
            log::info!("{:<32}{:<32}", format!("λ = {:.2}", lambda), format!("mse {:.6}", error));
        }
        self.export(&sweep)?;
        Ok(sweep)
    }

    /// train one controller for the given episodes, measuring after each
    fn arm<C, T>(
        &self,
        index: usize,
        mut controller: C,
        episodes: usize,
        reference: &Table<Utility>,
        tick: &T,
    ) -> Result<Curve>
    where
        C: Temporal,
        T: Fn() + Sync,
    {
        let lambda = controller.lambda();
        let seed = self.config.seed.wrapping_add(1 + index as u64);
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let mut errors = Vec::with_capacity(episodes);
        for _ in 0..episodes {
            if crate::interrupted() {
                break;
            }
            episode::temporal(&self.env, &mut controller, rng)?;
            errors.push(controller.mean_squared_error(reference)?);
            tick();
        }
        log::debug!(
            "{} λ = {:.2} seed {} episodes {}",
            C::name(),
            lambda,
            seed,
            errors.len()
        );
        if !errors.is_empty() {
            let snapshot = Snapshot::new(
                C::name(),
                format!("lambda_{}", lambda),
                errors.len(),
                Some(lambda),
                controller.surface()?,
            );
            self.export(&snapshot)?;
        }
        Ok(Curve::from((lambda, errors)))
    }

    fn export<E>(&self, report: &E) -> Result<()>
    where
        E: Export,
    {
        match self.config.output {
            Some(ref root) => report.save(root).map(|_| ()),
            None => Ok(()),
        }
    }
}
