use serde::{Deserialize, Serialize};

/// One tradeable position resolved from an event.
///
/// Serializes as `{question, outcome_type, asset_id, condition_id}`; a label
/// the upstream market did not provide is written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub question: Option<String>,
    pub outcome_type: Option<String>,
    pub asset_id: String,
    pub condition_id: Option<String>,
}
