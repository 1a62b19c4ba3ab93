pub mod export;
pub mod snapshot;

pub use export::Export;
pub use snapshot::Snapshot;
