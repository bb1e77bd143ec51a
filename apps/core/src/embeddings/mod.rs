//! # Embedding Accessors
//!
//! The narrow seam between the intent engine and the embedding provider.
//!
//! ## Components
//! - `traits`: the `EmbeddingAccessor` contract
//! - `http`: remote sentence-transformers service over HTTP
//! - `local`: in-process fastembed model behind an actor
//! - `cache`: LRU memoization decorator

pub mod cache;
pub mod http;
pub mod local;
pub mod messages;
pub mod traits;

pub use cache::CachedEmbeddingAccessor;
pub use http::HttpEmbeddingAccessor;
pub use local::LocalEmbeddingAccessor;
pub use traits::EmbeddingAccessor;

use crate::error::{Result, RouterError};
use std::time::Duration;
use tokio::time::timeout;

/// Calls `accessor` with a bounded deadline and rejects empty vectors.
///
/// Expiry surfaces as `EmbeddingUnavailable` instead of leaving the call pending.
pub async fn embed_within<E>(accessor: &E, text: &str, deadline: Duration) -> Result<Vec<f32>>
where
    E: EmbeddingAccessor + ?Sized,
{
    let vector = timeout(deadline, accessor.embed(text)).await??;
    if vector.is_empty() {
        return Err(RouterError::EmbeddingUnavailable(format!(
            "empty embedding returned for '{}'",
            text
        )));
    }
    Ok(vector)
}
