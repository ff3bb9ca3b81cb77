pub mod gamma_client;
pub mod polytape_client;

pub use gamma_client::{GammaClient, GammaEvent, GammaMarket};
pub use polytape_client::PolytapeClient;
