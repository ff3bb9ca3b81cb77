use crate::errors::ClientError;
use crate::models::Outcome;
use crate::polymarket::gamma_client::{GammaClient, GammaEvent};

/// Resolves an event slug into the flat list of tradeable outcome assets.
#[derive(Debug, Clone)]
pub struct EventResolver {
    gamma: GammaClient,
}

impl EventResolver {
    pub fn new(gamma: GammaClient) -> Self {
        Self { gamma }
    }

    /// Fetch the event and flatten every market into outcome records.
    /// All-or-nothing: one malformed market fails the whole call.
    pub async fn resolve_event(&self, event_slug: &str) -> Result<Vec<Outcome>, ClientError> {
        let event = self.gamma.get_event_by_slug(event_slug).await?;
        let outcomes = flatten_event(&event)?;

        tracing::info!(
            slug = event.slug.as_deref().unwrap_or(event_slug),
            title = event.title.as_deref().unwrap_or_default(),
            markets = event.markets.len(),
            outcomes = outcomes.len(),
            "Resolved event"
        );

        Ok(outcomes)
    }
}

/// Flatten an event into outcome records, in market order then token order.
///
/// Token ids drive the iteration. A market with fewer labels than token ids
/// still yields one record per token, with `outcome_type: None` past the end
/// of the label list. Duplicates are kept.
pub fn flatten_event(event: &GammaEvent) -> Result<Vec<Outcome>, ClientError> {
    let mut resolved = Vec::new();

    for market in &event.markets {
        let token_ids = market.parse_token_ids()?;
        let outcome_names = market.parse_outcomes()?;

        if outcome_names.len() < token_ids.len() {
            tracing::debug!(
                condition_id = market.condition_id.as_deref().unwrap_or_default(),
                tokens = token_ids.len(),
                labels = outcome_names.len(),
                "Market has fewer outcome labels than token ids"
            );
        }

        for (i, asset_id) in token_ids.into_iter().enumerate() {
            resolved.push(Outcome {
                question: market.question.clone(),
                outcome_type: outcome_names.get(i).cloned(),
                asset_id,
                condition_id: market.condition_id.clone(),
            });
        }
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polymarket::GammaMarket;
    use serde_json::json;

    fn market(question: &str, condition_id: &str, tokens: &str, outcomes: &str) -> GammaMarket {
        GammaMarket {
            condition_id: Some(condition_id.into()),
            question: Some(question.into()),
            outcomes: Some(outcomes.into()),
            clob_token_ids: Some(tokens.into()),
        }
    }

    fn event(markets: Vec<GammaMarket>) -> GammaEvent {
        GammaEvent {
            slug: Some("test-event".into()),
            title: None,
            markets,
        }
    }

    #[test]
    fn yes_no_market_resolves_in_order() {
        let ev = event(vec![market("Q?", "0xabc", r#"["T1","T2"]"#, r#"["Yes","No"]"#)]);

        let outcomes = flatten_event(&ev).unwrap();

        assert_eq!(
            serde_json::to_value(&outcomes).unwrap(),
            json!([
                {"question": "Q?", "outcome_type": "Yes", "asset_id": "T1", "condition_id": "0xabc"},
                {"question": "Q?", "outcome_type": "No", "asset_id": "T2", "condition_id": "0xabc"}
            ])
        );
    }

    #[test]
    fn output_length_is_sum_of_token_counts() {
        let ev = event(vec![
            market("A?", "0x1", r#"["a1","a2"]"#, r#"["Yes","No"]"#),
            market("B?", "0x2", r#"["b1","b2","b3"]"#, r#"["X","Y","Z"]"#),
            market("C?", "0x3", "[]", "[]"),
            market("D?", "0x4", r#"["d1"]"#, r#"["Only"]"#),
        ]);

        let outcomes = flatten_event(&ev).unwrap();
        let ids: Vec<&str> = outcomes.iter().map(|o| o.asset_id.as_str()).collect();

        assert_eq!(ids, vec!["a1", "a2", "b1", "b2", "b3", "d1"]);
        assert_eq!(outcomes[4].condition_id.as_deref(), Some("0x2"));
        assert_eq!(outcomes[5].question.as_deref(), Some("D?"));
    }

    #[test]
    fn short_label_list_yields_null_labels() {
        let ev = event(vec![market("Q?", "0xabc", r#"["T1","T2","T3"]"#, r#"["Yes"]"#)]);

        let outcomes = flatten_event(&ev).unwrap();

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].outcome_type.as_deref(), Some("Yes"));
        assert_eq!(outcomes[1].outcome_type, None);
        assert_eq!(outcomes[1].asset_id, "T2");
        assert_eq!(outcomes[2].outcome_type, None);
        assert_eq!(outcomes[2].asset_id, "T3");
    }

    #[test]
    fn extra_labels_are_ignored() {
        let ev = event(vec![market("Q?", "0xabc", r#"["T1"]"#, r#"["Yes","No"]"#)]);

        let outcomes = flatten_event(&ev).unwrap();

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].outcome_type.as_deref(), Some("Yes"));
    }

    #[test]
    fn missing_nested_fields_contribute_nothing() {
        let mut bare = market("Q?", "0xabc", "[]", "[]");
        bare.clob_token_ids = None;
        bare.outcomes = None;

        assert!(flatten_event(&event(vec![bare])).unwrap().is_empty());
        assert!(flatten_event(&event(vec![])).unwrap().is_empty());
    }

    #[test]
    fn duplicate_token_ids_are_kept() {
        let ev = event(vec![
            market("Q?", "0xabc", r#"["T1"]"#, r#"["Yes"]"#),
            market("Q?", "0xabc", r#"["T1"]"#, r#"["Yes"]"#),
        ]);

        assert_eq!(flatten_event(&ev).unwrap().len(), 2);
    }

    #[test]
    fn malformed_market_fails_whole_event() {
        let ev = event(vec![
            market("A?", "0x1", r#"["a1","a2"]"#, r#"["Yes","No"]"#),
            market("B?", "0x2", "not-json", r#"["Yes","No"]"#),
        ]);

        assert!(matches!(
            flatten_event(&ev),
            Err(ClientError::MalformedResponse(_))
        ));
    }

    #[test]
    fn malformed_labels_fail_too() {
        let ev = event(vec![market("A?", "0x1", r#"["a1"]"#, "{oops")]);

        assert!(matches!(
            flatten_event(&ev),
            Err(ClientError::MalformedResponse(_))
        ));
    }
}
