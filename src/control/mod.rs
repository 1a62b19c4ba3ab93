pub mod explore;
pub mod lfa;
pub mod montecarlo;
pub mod sarsa;
pub mod table;
pub mod traits;

pub use explore::Explorer;
pub use explore::Schedule;
pub use lfa::*;
pub use montecarlo::MonteCarlo;
pub use sarsa::Sarsa;
pub use table::Surface;
pub use table::Table;
pub use traits::Controller;
pub use traits::Temporal;
