//! Semantic intent routing.
//!
//! Labeled example utterances are embedded and averaged into one centroid per
//! intent; incoming text is embedded and routed to the most similar centroid,
//! or to a fallback response when no centroid is similar enough.
//!
//! ```rust,ignore
//! use intent_router_core::{ClassifierSettings, HttpEmbeddingAccessor, IntentRouter};
//!
//! let router = IntentRouter::new(HttpEmbeddingAccessor::new(url), ClassifierSettings::default())?;
//! router.train(&intents).await?;
//! let result = router.classify("hi there").await?;
//! ```

pub mod brain;
pub mod config;
pub mod embeddings;
pub mod error;
pub mod models;
pub mod router;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use brain::{CentroidTable, TrainedIntent};
pub use config::{ClassifierSettings, EmbeddingBackend, RouterConfig};
pub use embeddings::{
    CachedEmbeddingAccessor, EmbeddingAccessor, HttpEmbeddingAccessor, LocalEmbeddingAccessor,
};
pub use error::RouterError;
pub use models::{ChatReply, ClassificationResult, IntentDefinition, IntentSet};
pub use router::IntentRouter;
