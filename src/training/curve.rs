use crate::Probability;
use crate::Utility;
use serde::Serialize;

/// one arm of a λ sweep: the MSE against the reference after every episode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    lambda: Probability,
    errors: Vec<Utility>,
}

impl From<(Probability, Vec<Utility>)> for Curve {
    fn from((lambda, errors): (Probability, Vec<Utility>)) -> Self {
        Self { lambda, errors }
    }
}

impl Curve {
    pub fn lambda(&self) -> Probability {
        self.lambda
    }
    pub fn errors(&self) -> &[Utility] {
        &self.errors
    }
    /// error after the last completed episode
    pub fn last(&self) -> Option<Utility> {
        self.errors.last().copied()
    }
}

/// a whole λ sweep for one controller, ordered by λ as configured
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sweep {
    name: String,
    curves: Vec<Curve>,
    finals: Vec<(Probability, Utility)>,
}

impl From<(String, Vec<Curve>)> for Sweep {
    fn from((name, curves): (String, Vec<Curve>)) -> Self {
        let finals = curves
            .iter()
            .filter_map(|c| c.last().map(|e| (c.lambda(), e)))
            .collect();
        Self {
            name,
            curves,
            finals,
        }
    }
}

impl Sweep {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }
    /// (λ, final MSE) for every arm that completed at least one episode
    pub fn finals(&self) -> &[(Probability, Utility)] {
        &self.finals
    }
    pub fn curve(&self, lambda: Probability) -> Option<&Curve> {
        self.curves.iter().find(|c| c.lambda() == lambda)
    }
}
