use super::action::Action;
use super::state::State;
use crate::cards::deck::Deck;
use crate::Utility;
use crate::DEALER_STICK;
use crate::PLAYER_MAX;
use crate::PLAYER_MIN;

/// Easy21 is the environment: a pure transition function over States.
///
/// it holds no state of its own. every card comes from the Deck handed
/// in by the caller, so a seeded generator (or a Scripted deck) makes
/// whole episodes reproducible. rewards are undiscounted and only the
/// terminal transition carries a nonzero one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Easy21;

impl Easy21 {
    /// deal one black card to the dealer and one to the player
    pub fn initialize<D>(&self, deck: &mut D) -> State
    where
        D: Deck + ?Sized,
    {
        let dealer = deck.draw_black();
        let player = deck.draw_black();
        State::from((dealer, player.value(), false))
    }

    /// sample the next State and reward for taking action in state
    pub fn step<D>(&self, state: &State, action: Action, deck: &mut D) -> (State, Utility)
    where
        D: Deck + ?Sized,
    {
        debug_assert!(!state.is_terminal(), "stepping terminal state {state}");
        match action {
            Action::Hit => self.hit(state, deck),
            Action::Stick => self.stick(state, deck),
        }
    }

    /// outside the playable range in either direction
    pub fn is_bust(sum: i32) -> bool {
        sum > PLAYER_MAX || sum < PLAYER_MIN
    }
}

/// the rules of each action
impl Easy21 {
    fn hit<D>(&self, state: &State, deck: &mut D) -> (State, Utility)
    where
        D: Deck + ?Sized,
    {
        let card = deck.draw();
        let sum = state.player() + card.signed();
        log::trace!("hit   {} draws {} -> {}", state, card, sum);
        if Self::is_bust(sum) {
            (State::from((state.dealer(), sum, true)), -1.)
        } else {
            (State::from((state.dealer(), sum, false)), 0.)
        }
    }

    /// dealer draws while strictly between 0 and 17, then totals are compared.
    /// the player's sum is carried through unchanged.
    fn stick<D>(&self, state: &State, deck: &mut D) -> (State, Utility)
    where
        D: Deck + ?Sized,
    {
        let mut dealer = state.dealer().signed();
        while dealer > 0 && dealer < DEALER_STICK {
            dealer += deck.draw().signed();
        }
        log::trace!("stick {} dealer ends on {}", state, dealer);
        let next = State::from((state.dealer(), state.player(), true));
        let reward = if Self::is_bust(dealer) {
            1.
        } else if dealer > state.player() {
            -1.
        } else if dealer < state.player() {
            1.
        } else {
            0.
        };
        (next, reward)
    }
}
