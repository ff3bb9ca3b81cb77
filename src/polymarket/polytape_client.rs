use reqwest::{Client, RequestBuilder};
use serde_json::{json, Number, Value};

use crate::errors::ClientError;
use crate::models::{OrderbookSnapshot, Side, SimulationResult};

/// Client for the PolyTape historical order book and price-impact service.
#[derive(Debug, Clone)]
pub struct PolytapeClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl PolytapeClient {
    pub fn new(http: Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Attach the API key and JSON content-type headers.
    fn with_headers(&self, req: RequestBuilder) -> RequestBuilder {
        let req = req.header("Content-Type", "application/json");
        match &self.api_key {
            Some(key) => req.header("x-api-key", key),
            None => req,
        }
    }

    /// Fetch the latest L2 order book snapshot for an asset. Any non-success
    /// status is an error.
    pub async fn get_orderbook(&self, asset_id: &str) -> Result<OrderbookSnapshot, ClientError> {
        let url = format!("{}/v1/markets/{}/orderbook", self.base_url, asset_id);
        tracing::debug!(%url, "Fetching orderbook");

        let body = self
            .with_headers(self.http.get(&url))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        serde_json::from_str(&body)
            .and_then(OrderbookSnapshot::from_value)
            .map_err(|e| ClientError::malformed(format!("orderbook for {asset_id}"), e))
    }

    /// Price impact of a market buy spending `amount_usd` dollars.
    pub async fn simulate_buy(
        &self,
        asset_id: &str,
        timestamp: &Number,
        amount_usd: f64,
    ) -> Result<SimulationResult, ClientError> {
        self.simulate(Side::Buy, asset_id, timestamp, amount_usd).await
    }

    /// Price impact of a market sell of `amount_sell` shares.
    pub async fn simulate_sell(
        &self,
        asset_id: &str,
        timestamp: &Number,
        amount_sell: f64,
    ) -> Result<SimulationResult, ClientError> {
        self.simulate(Side::Sell, asset_id, timestamp, amount_sell).await
    }

    /// Unlike `get_orderbook`, a non-success status is not an error here: the
    /// service's error payload is handed back for the caller to inspect.
    /// Non-finite amounts are rejected before any request is sent.
    async fn simulate(
        &self,
        side: Side,
        asset_id: &str,
        timestamp: &Number,
        amount: f64,
    ) -> Result<SimulationResult, ClientError> {
        if !amount.is_finite() {
            return Err(ClientError::InvalidAmount(amount));
        }

        let url = format!("{}/v1/markets/{}/simulate/{}", self.base_url, asset_id, side);
        let mut payload = json!({ "timestamp": timestamp });
        payload[side.amount_key()] = json!(amount);

        tracing::debug!(%url, %side, amount, "Requesting simulation");

        let resp = self
            .with_headers(self.http.post(&url))
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(
                status = %status,
                asset_id,
                %side,
                "Simulation returned non-2xx, passing body through"
            );
        }

        let text = resp.text().await?;
        let body: Value = serde_json::from_str(&text)
            .map_err(|e| ClientError::malformed(format!("simulate {side} for {asset_id}"), e))?;

        Ok(SimulationResult {
            status: status.as_u16(),
            body,
        })
    }
}
