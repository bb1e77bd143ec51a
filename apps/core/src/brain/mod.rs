//! # Brain Module
//!
//! Semantic intent engine: trains one centroid per intent from example
//! embeddings and routes queries to the closest centroid by cosine similarity.
//!
//! ## Components
//! - `similarity`: cosine similarity and centroid math
//! - `centroids`: trained records, the centroid table and its publication slot
//! - `trainer`: builds a table from intent definitions
//! - `classifier`: scores a query against a table snapshot

pub mod centroids;
pub mod classifier;
pub mod similarity;
pub mod trainer;

pub use centroids::{CentroidStore, CentroidTable, TrainedIntent};
pub use classifier::IntentClassifier;
pub use similarity::{centroid, cosine_similarity};
pub use trainer::IntentTrainer;
