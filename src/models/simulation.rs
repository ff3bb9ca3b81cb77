use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Body key carrying the trade size: dollars for buys, shares for sells.
    pub fn amount_key(&self) -> &'static str {
        match self {
            Side::Buy => "amount_usd",
            Side::Sell => "amount_sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

// ---------------------------------------------------------------------------
// Simulation result
// ---------------------------------------------------------------------------

/// Response of a simulate call. The body is kept exactly as the service sent
/// it, error payloads included; callers inspect `status` to tell them apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub status: u16,
    pub body: Value,
}

impl SimulationResult {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
