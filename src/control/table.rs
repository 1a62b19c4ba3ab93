use crate::gameplay::action::Action;
use crate::gameplay::state::State;
use crate::Error;
use crate::Result;
use crate::Utility;
use crate::DEALER_MAX;
use crate::DEALER_MIN;
use crate::N_ACTIONS;
use crate::N_DEALER;
use crate::N_PLAYER;
use crate::N_STATE_ACTIONS;
use crate::PLAYER_MAX;
use crate::PLAYER_MIN;
use serde::Serialize;

/// dense storage over every (dealer, player, action) in the domain.
///
/// callers index with domain coordinates (dealer 1..=10, player 1..=21).
/// anything outside is rejected rather than wrapped, so a bust sum that
/// leaks into a lookup surfaces as Error::OutOfDomain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Table<T>([[[T; N_ACTIONS]; N_PLAYER]; N_DEALER]);

impl<T> Default for Table<T>
where
    T: Copy + Default,
{
    fn default() -> Self {
        Self([[[T::default(); N_ACTIONS]; N_PLAYER]; N_DEALER])
    }
}

impl<T> Table<T>
where
    T: Copy + Default,
{
    /// build a Table by evaluating f at every key
    pub fn from_fn<F>(mut f: F) -> Result<Self>
    where
        F: FnMut(i32, i32, Action) -> Result<T>,
    {
        let mut table = Self::default();
        for (dealer, player, action) in Self::keys() {
            *table.get_mut(dealer, player, action)? = f(dealer, player, action)?;
        }
        Ok(table)
    }
}

impl<T> Table<T>
where
    T: Copy,
{
    /// zero-based row and column for domain coordinates
    pub fn cell(dealer: i32, player: i32) -> Result<(usize, usize)> {
        if (DEALER_MIN..=DEALER_MAX).contains(&dealer) && (PLAYER_MIN..=PLAYER_MAX).contains(&player)
        {
            Ok(((dealer - DEALER_MIN) as usize, (player - PLAYER_MIN) as usize))
        } else {
            Err(Error::OutOfDomain { dealer, player })
        }
    }
    /// every (dealer, player, action) in storage order
    pub fn keys() -> impl Iterator<Item = (i32, i32, Action)> {
        (DEALER_MIN..=DEALER_MAX).flat_map(|d| {
            (PLAYER_MIN..=PLAYER_MAX).flat_map(move |p| Action::ALL.into_iter().map(move |a| (d, p, a)))
        })
    }
    pub fn get(&self, dealer: i32, player: i32, action: Action) -> Result<T> {
        let (d, p) = Self::cell(dealer, player)?;
        Ok(self.0[d][p][action.index()])
    }
    pub fn get_mut(&mut self, dealer: i32, player: i32, action: Action) -> Result<&mut T> {
        let (d, p) = Self::cell(dealer, player)?;
        Ok(&mut self.0[d][p][action.index()])
    }
    /// both action entries for one state
    pub fn pair(&self, dealer: i32, player: i32) -> Result<[T; N_ACTIONS]> {
        let (d, p) = Self::cell(dealer, player)?;
        Ok(self.0[d][p])
    }
    pub fn at(&self, state: &State, action: Action) -> Result<T> {
        self.get(state.showing(), state.player(), action)
    }
    pub fn at_mut(&mut self, state: &State, action: Action) -> Result<&mut T> {
        self.get_mut(state.showing(), state.player(), action)
    }
    /// values in storage order, matching keys()
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter().flatten().flatten()
    }
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.0.iter_mut().flatten().flatten()
    }
    pub fn fill(&mut self, value: T) {
        self.iter_mut().for_each(|x| *x = value);
    }
}

impl Table<Utility> {
    /// Σ (self − other)² over the whole domain, divided by its size
    pub fn mean_squared_error(&self, other: &Self) -> Utility {
        self.iter()
            .zip(other.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<Utility>()
            / N_STATE_ACTIONS as Utility
    }
}

/// the greedy state-value surface V(d, p) = max_a Q(d, p, a).
/// rows are player sums, columns are dealer cards, which is
/// the layout the value plots are drawn from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Surface {
    dealer: Vec<i32>,
    player: Vec<i32>,
    values: Vec<Vec<Utility>>,
}

impl From<&Table<Utility>> for Surface {
    fn from(table: &Table<Utility>) -> Self {
        let values = (0..N_PLAYER)
            .map(|p| {
                (0..N_DEALER)
                    .map(|d| table.0[d][p].into_iter().fold(Utility::NEG_INFINITY, Utility::max))
                    .collect()
            })
            .collect();
        Self {
            dealer: (DEALER_MIN..=DEALER_MAX).collect(),
            player: (PLAYER_MIN..=PLAYER_MAX).collect(),
            values,
        }
    }
}

impl Surface {
    pub fn value(&self, dealer: i32, player: i32) -> Result<Utility> {
        let (d, p) = Table::<Utility>::cell(dealer, player)?;
        Ok(self.values[p][d])
    }
    pub fn rows(&self) -> &[Vec<Utility>] {
        &self.values
    }
}
