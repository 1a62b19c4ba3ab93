use crate::Error;
use crate::N_ACTIONS;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    Hit = 0,
    Stick = 1,
}

impl Action {
    pub const ALL: [Self; N_ACTIONS] = [Self::Hit, Self::Stick];

    /// returned for terminal states, where no decision is made.
    /// it never reaches the environment and carries no meaning.
    pub const SENTINEL: Self = Self::Hit;

    /// uniform over both actions
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::ALL[rng.gen_range(0..N_ACTIONS)]
    }
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl TryFrom<usize> for Action {
    type Error = Error;
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Hit),
            1 => Ok(Self::Stick),
            n => Err(Error::InvalidAction(n)),
        }
    }
}

impl From<Action> for usize {
    fn from(action: Action) -> Self {
        action.index()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Hit => write!(f, "HIT"),
            Self::Stick => write!(f, "STICK"),
        }
    }
}
