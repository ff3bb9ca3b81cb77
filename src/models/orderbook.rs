use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

/// One resting price level.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookLevel {
    pub price: Decimal,
    pub size: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotMeta {
    /// Timestamp of the snapshot the service actually returned. Passed back
    /// verbatim to the simulate endpoints.
    pub found_ts: Number,
}

#[derive(Deserialize)]
struct BookView {
    meta: SnapshotMeta,
    #[serde(default)]
    bids: Vec<BookLevel>,
    #[serde(default)]
    asks: Vec<BookLevel>,
}

/// Order book snapshot from the PolyTape API. Levels are best-first.
///
/// The typed fields are read views; the document the service sent is kept
/// untouched in `raw` and is what serializing the snapshot writes back out.
#[derive(Debug, Clone)]
pub struct OrderbookSnapshot {
    pub meta: SnapshotMeta,
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
    raw: Value,
}

impl OrderbookSnapshot {
    pub fn from_value(raw: Value) -> Result<Self, serde_json::Error> {
        let view = BookView::deserialize(&raw)?;
        Ok(Self {
            meta: view.meta,
            bids: view.bids,
            asks: view.asks,
            raw,
        })
    }

    /// The response body exactly as received.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn found_ts(&self) -> &Number {
        &self.meta.found_ts
    }

    pub fn best_bid(&self) -> Option<&BookLevel> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&BookLevel> {
        self.asks.first()
    }
}

impl Serialize for OrderbookSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OrderbookSnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::from_value(raw).map_err(D::Error::custom)
    }
}
