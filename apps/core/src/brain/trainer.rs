//! Intent Trainer: turns labeled example utterances into centroid vectors.

use crate::brain::centroids::{CentroidTable, TrainedIntent};
use crate::brain::similarity::centroid;
use crate::embeddings::{embed_within, EmbeddingAccessor};
use crate::error::{Result, RouterError};
use crate::models::IntentDefinition;
use futures::future::try_join_all;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info};
use validator::Validate;

/// Builds centroid tables. Holds no state between passes.
#[derive(Debug, Clone)]
pub struct IntentTrainer {
    embed_timeout: Duration,
}

impl IntentTrainer {
    pub fn new(embed_timeout: Duration) -> Self {
        Self { embed_timeout }
    }

    /// Embeds every example and averages them per intent, in input order.
    ///
    /// All-or-nothing: any invalid definition or embedding failure aborts the
    /// whole pass and no table is returned.
    pub async fn train<E>(&self, accessor: &E, intents: &[IntentDefinition]) -> Result<CentroidTable>
    where
        E: EmbeddingAccessor + ?Sized,
    {
        validate_intents(intents)?;
        info!("Training {} intents...", intents.len());

        let mut dimension: Option<usize> = None;
        let mut records = Vec::with_capacity(intents.len());

        for intent in intents {
            // Examples of one intent are embedded concurrently; try_join_all keeps
            // their input order.
            let vectors = try_join_all(
                intent
                    .examples
                    .iter()
                    .map(|example| embed_within(accessor, example, self.embed_timeout)),
            )
            .await?;

            for vector in &vectors {
                let expected = *dimension.get_or_insert(vector.len());
                if vector.len() != expected {
                    return Err(RouterError::EmbeddingUnavailable(format!(
                        "embedding for intent '{}' has length {}, expected {}",
                        intent.label,
                        vector.len(),
                        expected
                    )));
                }
            }

            debug!(
                "Intent '{}': averaged {} example embeddings",
                intent.label,
                vectors.len()
            );
            records.push(TrainedIntent {
                label: intent.label.clone(),
                response: intent.response.clone(),
                centroid: centroid(&vectors)?,
            });
        }

        let table = CentroidTable::new(records)?;
        info!(
            "Training complete: {} intents, dimension {}",
            table.len(),
            table.dimension()
        );
        Ok(table)
    }
}

/// Rejects sets that would yield a degenerate table, before any embedding call.
fn validate_intents(intents: &[IntentDefinition]) -> Result<()> {
    if intents.is_empty() {
        return Err(RouterError::InvalidTrainingData(
            "intent set is empty".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(intents.len());
    for intent in intents {
        intent.validate().map_err(|e| {
            RouterError::InvalidTrainingData(format!("intent '{}': {}", intent.label, e))
        })?;
        if intent.label.trim().is_empty() {
            return Err(RouterError::InvalidTrainingData(
                "intent label must not be blank".to_string(),
            ));
        }
        if let Some(pos) = intent.examples.iter().position(|e| e.trim().is_empty()) {
            return Err(RouterError::InvalidTrainingData(format!(
                "intent '{}': example #{} is blank",
                intent.label, pos
            )));
        }
        if !seen.insert(intent.label.as_str()) {
            return Err(RouterError::InvalidTrainingData(format!(
                "duplicate intent label '{}'",
                intent.label
            )));
        }
    }
    Ok(())
}
