pub mod config;
pub mod errors;
pub mod models;
pub mod polymarket;
pub mod services;

pub use errors::ClientError;
pub use models::{OrderbookSnapshot, Outcome, SimulationResult};
pub use polymarket::{GammaClient, PolytapeClient};
pub use services::EventResolver;
