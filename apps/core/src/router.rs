use crate::brain::{CentroidStore, CentroidTable, IntentClassifier, IntentTrainer};
use crate::config::ClassifierSettings;
use crate::embeddings::EmbeddingAccessor;
use crate::error::Result;
use crate::models::{ClassificationResult, IntentDefinition};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// The entry point request handlers talk to.
///
/// Wires an embedding accessor to the trainer, the classifier and the shared
/// centroid store. Clones share the same store, so a retrain through any clone
/// is visible to all of them.
///
/// Lifecycle: classification fails with `NotReady` until `train` has succeeded
/// once. Each later `train` builds a complete table off to the side and then
/// swaps it in; a failed pass leaves the published table as it was.
pub struct IntentRouter<E: EmbeddingAccessor> {
    accessor: Arc<E>,
    trainer: IntentTrainer,
    classifier: IntentClassifier,
    store: CentroidStore,
}

impl<E: EmbeddingAccessor> Clone for IntentRouter<E> {
    fn clone(&self) -> Self {
        Self {
            accessor: Arc::clone(&self.accessor),
            trainer: self.trainer.clone(),
            classifier: self.classifier.clone(),
            store: self.store.clone(),
        }
    }
}

impl<E: EmbeddingAccessor> IntentRouter<E> {
    /// Creates an untrained router.
    ///
    /// # Arguments
    ///
    /// * `accessor` - The embedding provider used for both training and queries.
    /// * `settings` - Threshold, fallback response and embedding deadline.
    ///
    /// # Errors
    ///
    /// `Config` when `settings` fails [`ClassifierSettings::validate`].
    pub fn new(accessor: E, settings: ClassifierSettings) -> Result<Self> {
        Self::with_shared_accessor(Arc::new(accessor), settings)
    }

    pub fn with_shared_accessor(accessor: Arc<E>, settings: ClassifierSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            accessor,
            trainer: IntentTrainer::new(settings.embed_timeout),
            classifier: IntentClassifier::new(settings),
            store: CentroidStore::new(),
        })
    }

    pub fn accessor(&self) -> &E {
        &self.accessor
    }

    pub fn settings(&self) -> &ClassifierSettings {
        self.classifier.settings()
    }

    /// Trains on `intents` and atomically publishes the resulting table.
    ///
    /// # Returns
    ///
    /// The newly published snapshot.
    #[instrument(skip(self, intents), fields(intents = intents.len()))]
    pub async fn train(&self, intents: &[IntentDefinition]) -> Result<Arc<CentroidTable>> {
        let table = match self.trainer.train(self.accessor.as_ref(), intents).await {
            Ok(table) => table,
            Err(e) => {
                error!("Training failed, keeping the current table: {}", e);
                return Err(e);
            }
        };

        let table = Arc::new(table);
        if self.store.publish(Arc::clone(&table)).await.is_some() {
            info!("Centroid table replaced by retraining");
        }
        Ok(table)
    }

    /// Routes one utterance against the current table snapshot.
    #[instrument(skip(self))]
    pub async fn classify(&self, text: &str) -> Result<ClassificationResult> {
        let table = self.store.snapshot().await.inspect_err(|_| {
            warn!("Classification requested before training completed");
        })?;
        self.classifier
            .classify(self.accessor.as_ref(), &table, text)
            .await
    }

    pub async fn is_ready(&self) -> bool {
        self.store.is_ready().await
    }

    /// Current table, if one has been published.
    pub async fn snapshot(&self) -> Option<Arc<CentroidTable>> {
        self.store.snapshot().await.ok()
    }
}
