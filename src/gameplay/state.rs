use crate::cards::card::Card;

/// State is an immutable snapshot between decisions: the dealer's
/// face-up card, the player's running sum, and whether the game is over.
///
/// the player sum may sit outside 1..=21 only on a terminal State
/// produced by a bust. every transition yields a fresh State.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    dealer: Card,
    player: i32,
    terminal: bool,
}

impl From<(Card, i32, bool)> for State {
    fn from((dealer, player, terminal): (Card, i32, bool)) -> Self {
        Self {
            dealer,
            player,
            terminal,
        }
    }
}

impl State {
    pub fn dealer(&self) -> Card {
        self.dealer
    }
    /// dealer coordinate for value lookups
    pub fn showing(&self) -> i32 {
        self.dealer.value()
    }
    pub fn player(&self) -> i32 {
        self.player
    }
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "dealer {} player {}{}",
            self.dealer,
            self.player,
            if self.terminal { " (terminal)" } else { "" }
        )
    }
}
