use crate::gameplay::action::Action;
use crate::Error;
use crate::Result;
use crate::DEALER_MAX;
use crate::DEALER_MIN;
use crate::N_ACTIONS;
use crate::PLAYER_MAX;
use crate::PLAYER_MIN;
use serde::Deserialize;
use serde::Serialize;
use smallvec::SmallVec;

/// closed interval [lo, hi] of a coordinate
pub type Bracket = (i32, i32);

/// Coarse is the set of overlapping brackets that coarse-code a state-action.
///
/// one binary feature exists per (dealer bracket, player bracket, action).
/// a concrete (d, p, a) activates every feature whose dealer bracket holds d,
/// whose player bracket holds p and whose action is a. with the default
/// brackets that is 3 × 6 × 2 = 36 features, of which 1 to 4 fire at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coarse {
    dealer: Vec<Bracket>,
    player: Vec<Bracket>,
}

impl Default for Coarse {
    fn default() -> Self {
        Self {
            dealer: crate::DEALER_BRACKETS.to_vec(),
            player: crate::PLAYER_BRACKETS.to_vec(),
        }
    }
}

impl Coarse {
    pub fn new(dealer: Vec<Bracket>, player: Vec<Bracket>) -> Result<Self> {
        let coarse = Self { dealer, player };
        coarse.validate()?;
        Ok(coarse)
    }
    /// brackets must be non-empty, well-ordered and inside the domain
    pub fn validate(&self) -> Result<()> {
        let inside = |brackets: &[Bracket], min: i32, max: i32| {
            !brackets.is_empty()
                && brackets
                    .iter()
                    .all(|&(lo, hi)| min <= lo && lo <= hi && hi <= max)
        };
        if !inside(&self.dealer, DEALER_MIN, DEALER_MAX) {
            return Err(Error::InvalidConfiguration {
                message: format!("dealer brackets {:?}", self.dealer),
            });
        }
        if !inside(&self.player, PLAYER_MIN, PLAYER_MAX) {
            return Err(Error::InvalidConfiguration {
                message: format!("player brackets {:?}", self.player),
            });
        }
        Ok(())
    }
    /// number of binary features
    pub fn dimension(&self) -> usize {
        self.dealer.len() * self.player.len() * N_ACTIONS
    }
    pub fn dealer(&self) -> &[Bracket] {
        &self.dealer
    }
    pub fn player(&self) -> &[Bracket] {
        &self.player
    }
    /// feature index for (dealer bracket i, player bracket j, action)
    pub fn index(&self, i: usize, j: usize, action: Action) -> usize {
        (i * self.player.len() + j) * N_ACTIONS + action.index()
    }
    /// indices of every feature that fires for (dealer, player, action)
    pub fn active(&self, dealer: i32, player: i32, action: Action) -> SmallVec<[usize; 4]> {
        let holds = |&(lo, hi): &Bracket, x: i32| lo <= x && x <= hi;
        self.dealer
            .iter()
            .enumerate()
            .filter(|&(_, b)| holds(b, dealer))
            .flat_map(|(i, _)| {
                self.player
                    .iter()
                    .enumerate()
                    .filter(move |&(_, b)| holds(b, player))
                    .map(move |(j, _)| self.index(i, j, action))
            })
            .collect()
    }
}
