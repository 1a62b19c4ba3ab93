pub mod action;
pub mod game;
pub mod state;

pub use action::Action;
pub use game::Easy21;
pub use state::State;
