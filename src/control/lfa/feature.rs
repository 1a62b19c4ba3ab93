use super::coarse::Coarse;
use crate::control::table::Table;
use crate::gameplay::action::Action;
use crate::gameplay::state::State;
use crate::Error;
use crate::Result;
use crate::Utility;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// a sparse binary feature vector, stored as the indices that are 1.
/// the empty vector stands for terminal state-actions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Feature(SmallVec<[usize; 4]>);

impl From<SmallVec<[usize; 4]>> for Feature {
    fn from(active: SmallVec<[usize; 4]>) -> Self {
        Self(active)
    }
}

impl Feature {
    pub fn zero() -> Self {
        Self::default()
    }
    pub fn active(&self) -> &[usize] {
        &self.0
    }
    /// number of features that fire
    pub fn ones(&self) -> usize {
        self.0.len()
    }
    /// w · x
    pub fn dot(&self, weights: &[Utility]) -> Utility {
        self.0.iter().map(|&i| weights[i]).sum()
    }
    /// dense 0/1 vector of length n
    pub fn dense(&self, n: usize) -> Vec<Utility> {
        let mut x = vec![0.; n];
        self.0.iter().for_each(|&i| x[i] = 1.);
        x
    }
}

/// Features caches the feature vector of every (dealer, player, action)
/// in the domain. it is built once and only read afterwards.
#[derive(Debug, Clone)]
pub struct Features {
    coarse: Coarse,
    map: FxHashMap<(i32, i32, Action), Feature>,
}

impl From<Coarse> for Features {
    fn from(coarse: Coarse) -> Self {
        let map = Table::<Utility>::keys()
            .map(|(d, p, a)| ((d, p, a), Feature::from(coarse.active(d, p, a))))
            .collect();
        Self { coarse, map }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::from(Coarse::default())
    }
}

impl Features {
    pub fn dimension(&self) -> usize {
        self.coarse.dimension()
    }
    pub fn coarse(&self) -> &Coarse {
        &self.coarse
    }
    /// cached vector for an in-domain triple
    pub fn lookup(&self, dealer: i32, player: i32, action: Action) -> Result<&Feature> {
        self.map
            .get(&(dealer, player, action))
            .ok_or(Error::FeatureNotFound {
                dealer,
                player,
                action: action.index(),
            })
    }
    /// feature vector of a state-action; all zero when the state is terminal
    pub fn of(&self, state: &State, action: Action) -> Result<Feature> {
        if state.is_terminal() {
            Ok(Feature::zero())
        } else {
            self.lookup(state.showing(), state.player(), action).cloned()
        }
    }
}
