use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ClientError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GammaEvent {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Absent means the event has no markets yet.
    #[serde(default)]
    pub markets: Vec<GammaMarket>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GammaMarket {
    #[serde(default, alias = "conditionId")]
    pub condition_id: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    /// JSON array of outcome labels, e.g. ["Yes","No"] or ["G2 Esports","Karmine Corp"]
    #[serde(default)]
    pub outcomes: Option<String>,
    /// Stringified JSON array of token IDs, e.g. "[\"token1\", \"token2\"]"
    #[serde(default, alias = "clobTokenIds")]
    pub clob_token_ids: Option<String>,
}

impl GammaMarket {
    /// Parse the stringified clobTokenIds. Absent decodes to an empty list;
    /// anything that is not a JSON array of strings is malformed.
    pub fn parse_token_ids(&self) -> Result<Vec<String>, ClientError> {
        self.decode_nested("clobTokenIds", self.clob_token_ids.as_deref())
    }

    /// Parse the stringified outcome labels, same rules as `parse_token_ids`.
    pub fn parse_outcomes(&self) -> Result<Vec<String>, ClientError> {
        self.decode_nested("outcomes", self.outcomes.as_deref())
    }

    fn decode_nested(&self, field: &str, raw: Option<&str>) -> Result<Vec<String>, ClientError> {
        let Some(raw) = raw else {
            return Ok(Vec::new());
        };

        serde_json::from_str::<Vec<String>>(raw).map_err(|e| {
            ClientError::malformed(
                format!(
                    "market {} has invalid {field}",
                    self.condition_id.as_deref().unwrap_or("<unknown>")
                ),
                e,
            )
        })
    }
}

#[derive(Debug, Clone)]
pub struct GammaClient {
    http: Client,
    base_url: String,
}

impl GammaClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetch an event and its markets by slug.
    pub async fn get_event_by_slug(&self, slug: &str) -> Result<GammaEvent, ClientError> {
        let url = format!("{}/events/slug/{}", self.base_url, slug);
        tracing::debug!(%url, "Fetching event from Gamma API");

        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        serde_json::from_str(&body)
            .map_err(|e| ClientError::malformed(format!("event {slug}"), e))
    }
}
