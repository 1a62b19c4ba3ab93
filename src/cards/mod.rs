pub mod card;
pub mod color;
pub mod deck;

pub use card::Card;
pub use color::Color;
pub use deck::Deck;
pub use deck::Scripted;
