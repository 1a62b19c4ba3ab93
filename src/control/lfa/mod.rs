pub mod coarse;
pub mod feature;
pub mod linear;

pub use coarse::Coarse;
pub use feature::Feature;
pub use feature::Features;
pub use linear::LinearSarsa;
