use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

impl Color {
    /// black with probability 2/3, red otherwise
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        if rng.gen_bool(crate::BLACK_PROBABILITY) {
            Self::Black
        } else {
            Self::Red
        }
    }
    /// black cards add, red cards subtract
    pub const fn sign(&self) -> i32 {
        match self {
            Self::Black => 1,
            Self::Red => -1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Black => write!(f, "B"),
            Self::Red => write!(f, "R"),
        }
    }
}
