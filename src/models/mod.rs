pub mod orderbook;
pub mod outcome;
pub mod simulation;

pub use orderbook::{BookLevel, OrderbookSnapshot, SnapshotMeta};
pub use outcome::Outcome;
pub use simulation::{Side, SimulationResult};
