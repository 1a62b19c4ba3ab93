use crate::control::lfa::coarse::Coarse;
use crate::Error;
use crate::Probability;
use crate::Result;
use crate::Utility;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// every knob of an experiment run.
///
/// missing fields in a JSON file fall back to the defaults, so a file
/// only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub seed: u64,
    pub episodes_mc: usize,
    pub episodes_sarsa: usize,
    pub episodes_lfa: usize,
    /// Monte Carlo episode counts at which a value surface is exported
    pub checkpoints: Vec<usize>,
    pub lambdas: Vec<Probability>,
    pub n0: Probability,
    pub epsilon: Probability,
    pub step_size: Utility,
    pub coarse: Coarse,
    /// results root; None disables every export
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: crate::DEFAULT_SEED,
            episodes_mc: crate::MC_EPISODES,
            episodes_sarsa: crate::SARSA_EPISODES,
            episodes_lfa: crate::LFA_EPISODES,
            checkpoints: crate::MC_CHECKPOINTS.to_vec(),
            lambdas: (0..=crate::LAMBDA_STEPS)
                .map(|i| i as Probability / crate::LAMBDA_STEPS as Probability)
                .collect(),
            n0: crate::EXPLORATION_N0,
            epsilon: crate::LFA_EPSILON,
            step_size: crate::LFA_STEP_SIZE,
            coarse: Coarse::default(),
            output: Some(PathBuf::from("results")),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open config {}", path.display()),
            source,
        })?;
        let config = serde_json::from_reader::<_, Self>(std::io::BufReader::new(file))?;
        log::info!("{:<32}{:<32}", "loading     config", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Err(Error::InvalidConfiguration { message });
        if self.episodes_mc == 0 {
            return invalid("episodes_mc must be positive".to_string());
        }
        if self.episodes_sarsa == 0 || self.episodes_lfa == 0 {
            return invalid("episodes per λ must be positive".to_string());
        }
        if self.lambdas.is_empty() {
            return invalid("at least one λ is required".to_string());
        }
        if let Some(lambda) = self.lambdas.iter().find(|l| !(0. ..=1.).contains(*l)) {
            return invalid(format!("λ = {} outside [0, 1]", lambda));
        }
        if let Some((i, lambda)) = self
            .lambdas
            .iter()
            .enumerate()
            .find(|(i, l)| self.lambdas[..*i].contains(*l))
        {
            return invalid(format!("λ = {} repeated at position {}", lambda, i));
        }
        if !(self.n0 > 0.) {
            return invalid(format!("N0 = {} must be positive", self.n0));
        }
        if !(0. ..=1.).contains(&self.epsilon) {
            return invalid(format!("ε = {} outside [0, 1]", self.epsilon));
        }
        if !(self.step_size > 0.) {
            return invalid(format!("step size {} must be positive", self.step_size));
        }
        if let Some(c) = self.checkpoints.iter().find(|c| **c == 0 || **c > self.episodes_mc) {
            return invalid(format!(
                "checkpoint {} outside 1..={}",
                c, self.episodes_mc
            ));
        }
        self.coarse.validate()
    }
}
