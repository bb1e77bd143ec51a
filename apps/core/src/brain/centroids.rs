//! Trained centroid table and its publication slot.
//!
//! A [`CentroidTable`] is immutable once built. The [`CentroidStore`] holds the
//! currently published table behind a lock and replaces it wholesale, so readers
//! always observe either the previous table or the new one, never a mix.

use crate::error::{Result, RouterError};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// One trained intent: its label, canned response and centroid vector.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainedIntent {
    pub label: String,
    pub response: String,
    pub centroid: Vec<f32>,
}

/// Ordered, non-empty set of trained intents sharing one embedding dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct CentroidTable {
    records: Vec<TrainedIntent>,
    dimension: usize,
}

impl CentroidTable {
    /// Builds a table, checking that it is non-empty and that every centroid has
    /// the same dimension.
    pub fn new(records: Vec<TrainedIntent>) -> Result<Self> {
        let dimension = records
            .first()
            .map(|r| r.centroid.len())
            .ok_or_else(|| RouterError::InvalidTrainingData("no intents to publish".to_string()))?;

        if let Some(bad) = records.iter().find(|r| r.centroid.len() != dimension) {
            return Err(RouterError::DimensionMismatch {
                expected: dimension,
                actual: bad.centroid.len(),
            });
        }

        Ok(Self { records, dimension })
    }

    pub fn records(&self) -> &[TrainedIntent] {
        &self.records
    }

    /// Embedding dimension `D` shared by all centroids.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&TrainedIntent> {
        self.records.iter().find(|r| r.label == label)
    }
}

/// Process-wide slot for the published table.
///
/// Empty until the first successful training pass; afterwards holds an
/// `Arc` snapshot that is swapped in a single write.
#[derive(Debug, Clone, Default)]
pub struct CentroidStore {
    current: Arc<RwLock<Option<Arc<CentroidTable>>>>,
}

impl CentroidStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current snapshot, or `NotReady` if nothing was published yet.
    pub async fn snapshot(&self) -> Result<Arc<CentroidTable>> {
        self.current.read().await.clone().ok_or(RouterError::NotReady)
    }

    pub async fn is_ready(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Replaces the published table and returns the previous one, if any.
    pub async fn publish(&self, table: Arc<CentroidTable>) -> Option<Arc<CentroidTable>> {
        info!(
            "Publishing centroid table: {} intents, dimension {}",
            table.len(),
            table.dimension()
        );
        let mut slot = self.current.write().await;
        slot.replace(table)
    }
}
