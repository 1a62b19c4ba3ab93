use crate::cards::deck::Deck;
use crate::control::montecarlo::MonteCarlo;
use crate::control::traits::Controller;
use crate::control::traits::Temporal;
use crate::gameplay::action::Action;
use crate::gameplay::game::Easy21;
use crate::Result;
use crate::Utility;
use rand::Rng;

/// play one episode under the controller's policy, then fold the
/// whole trajectory into its estimates. returns the episode's return.
pub fn monte_carlo<R>(env: &Easy21, mc: &mut MonteCarlo, rng: &mut R) -> Result<Utility>
where
    R: Rng + ?Sized,
{
    let mut trajectory = Vec::new();
    let mut total = 0.;
    let mut state = env.initialize(rng);
    while !state.is_terminal() {
        let action = mc.action(&state, rng)?;
        let (next, reward) = env.step(&state, action, rng);
        trajectory.push((state, action));
        total += reward;
        state = next;
    }
    mc.update(&trajectory, total)?;
    Ok(total)
}

/// play one episode, updating the controller after every transition.
/// traces are cleared first. returns the episode's return.
pub fn temporal<C, R>(env: &Easy21, controller: &mut C, rng: &mut R) -> Result<Utility>
where
    C: Temporal,
    R: Rng + ?Sized,
{
    let mut total = 0.;
    controller.clear();
    let mut prev = env.initialize(rng);
    let mut prev_action = controller.action(&prev, rng)?;
    while !prev.is_terminal() {
        let (curr, reward) = env.step(&prev, prev_action, rng);
        let curr_action = controller.action(&curr, rng)?;
        controller.update(&prev, prev_action, &curr, curr_action, reward)?;
        total += reward;
        prev = curr;
        prev_action = curr_action;
    }
    Ok(total)
}

/// play one episode with uniformly random actions, learning nothing
pub fn random<D>(env: &Easy21, deck: &mut D, coin: &mut impl Rng) -> Utility
where
    D: Deck + ?Sized,
{
    let mut total = 0.;
    let mut state = env.initialize(deck);
    while !state.is_terminal() {
        let (next, reward) = env.step(&state, Action::random(coin), deck);
        total += reward;
        state = next;
    }
    total
}
