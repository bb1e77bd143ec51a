//! Intent Classifier: routes one utterance to the closest trained centroid.

use crate::brain::centroids::{CentroidTable, TrainedIntent};
use crate::brain::similarity::cosine_similarity;
use crate::config::ClassifierSettings;
use crate::embeddings::{embed_within, EmbeddingAccessor};
use crate::error::{Result, RouterError};
use crate::models::ClassificationResult;
use tracing::{debug, info};

/// Scores queries against a centroid table snapshot.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    settings: ClassifierSettings,
}

impl IntentClassifier {
    pub fn new(settings: ClassifierSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ClassifierSettings {
        &self.settings
    }

    /// Embeds `text` and picks the best-scoring intent.
    ///
    /// Blank input is rejected before the accessor is called.
    pub async fn classify<E>(
        &self,
        accessor: &E,
        table: &CentroidTable,
        text: &str,
    ) -> Result<ClassificationResult>
    where
        E: EmbeddingAccessor + ?Sized,
    {
        if text.trim().is_empty() {
            return Err(RouterError::InvalidInput(
                "query text is empty".to_string(),
            ));
        }

        let query = embed_within(accessor, text, self.settings.embed_timeout).await?;
        self.score(table, &query)
    }

    /// Scores an already embedded query.
    ///
    /// The first record with the highest score wins; later records replace it
    /// only on a strictly greater score.
    pub fn score(&self, table: &CentroidTable, query: &[f32]) -> Result<ClassificationResult> {
        if query.len() != table.dimension() {
            return Err(RouterError::DimensionMismatch {
                expected: table.dimension(),
                actual: query.len(),
            });
        }

        let (first, rest) = table.records().split_first().ok_or_else(|| {
            RouterError::InvalidTrainingData("centroid table has no intents".to_string())
        })?;

        let mut best: (&TrainedIntent, f32) = (first, cosine_similarity(query, &first.centroid)?);
        for record in rest {
            let score = cosine_similarity(query, &record.centroid)?;
            if score > best.1 {
                best = (record, score);
            }
        }

        let (record, confidence) = best;

        if confidence < self.settings.min_confidence {
            info!(
                "No intent above threshold {:.2} (closest '{}' at {:.3})",
                self.settings.min_confidence, record.label, confidence
            );
            return Ok(ClassificationResult {
                label: None,
                response: self.settings.fallback_response.clone(),
                confidence,
            });
        }

        debug!("Matched intent '{}' ({:.3})", record.label, confidence);
        Ok(ClassificationResult {
            label: Some(record.label.clone()),
            response: record.response.clone(),
            confidence,
        })
    }
}
