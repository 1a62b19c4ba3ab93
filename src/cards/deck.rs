use super::card::Card;
use super::color::Color;
use rand::Rng;
use std::collections::VecDeque;

/// a source of cards. any random number generator is one,
/// so the same handle that drives exploration can drive the
/// dealer. a Scripted deck replays a fixed sequence instead.
pub trait Deck {
    fn draw(&mut self) -> Card;
    fn draw_black(&mut self) -> Card;
}

impl<R> Deck for R
where
    R: Rng + ?Sized,
{
    fn draw(&mut self) -> Card {
        Card::draw(self)
    }
    fn draw_black(&mut self) -> Card {
        Card::black(self)
    }
}

/// predetermined card sequence, consumed front to back.
/// running past the end is a bug in whoever wrote the script.
#[derive(Debug, Clone, Default)]
pub struct Scripted(VecDeque<Card>);

impl From<Vec<Card>> for Scripted {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards.into())
    }
}

impl FromIterator<Card> for Scripted {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Scripted {
    pub fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl Deck for Scripted {
    fn draw(&mut self) -> Card {
        self.0.pop_front().expect("scripted deck exhausted")
    }
    fn draw_black(&mut self) -> Card {
        let card = self.draw();
        Card::from((card.value(), Color::Black))
    }
}
