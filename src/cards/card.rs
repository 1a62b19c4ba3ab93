use super::color::Color;
use crate::CARD_MAX;
use crate::CARD_MIN;
use rand::Rng;

/// a single Easy21 card. there is no deck to run out of:
/// every draw is an independent sample with replacement,
/// value uniform in 1..=10 and color black w.p. 2/3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    value: i32,
    color: Color,
}

impl From<(i32, Color)> for Card {
    fn from((value, color): (i32, Color)) -> Self {
        assert!((CARD_MIN..=CARD_MAX).contains(&value), "card value {value}");
        Self { value, color }
    }
}

impl Card {
    /// unconstrained draw
    pub fn draw<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let value = rng.gen_range(CARD_MIN..=CARD_MAX);
        let color = Color::random(rng);
        Self { value, color }
    }
    /// draw with the color forced to black, as dealt at the start of a game
    pub fn black<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let value = rng.gen_range(CARD_MIN..=CARD_MAX);
        Self {
            value,
            color: Color::Black,
        }
    }
    /// face value irrespective of color
    pub fn value(&self) -> i32 {
        self.value
    }
    /// face value, negated for red cards
    pub fn signed(&self) -> i32 {
        self.value * self.color.sign()
    }
    pub fn color(&self) -> Color {
        self.color
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.value, self.color)
    }
}
