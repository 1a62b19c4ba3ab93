pub mod config;
pub mod curve;
pub mod episode;
pub mod experiment;

pub use config::Config;
pub use curve::Curve;
pub use curve::Sweep;
pub use experiment::Experiment;
