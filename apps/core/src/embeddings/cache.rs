use crate::embeddings::traits::EmbeddingAccessor;
use crate::error::RouterError;
use async_trait::async_trait;
use lru::LruCache;
use std::num::NonZeroUsize;
use tokio::sync::Mutex;
use tracing::debug;

/// Memoizes embeddings by exact text in front of another accessor.
///
/// Only successful lookups are stored, so a transient provider failure is retried
/// on the next call. The lock is not held while the inner accessor runs.
pub struct CachedEmbeddingAccessor<E> {
    inner: E,
    cache: Option<Mutex<LruCache<String, Vec<f32>>>>,
}

impl<E: EmbeddingAccessor> CachedEmbeddingAccessor<E> {
    /// Wraps `inner` with an LRU of `capacity` entries. A capacity of zero
    /// disables caching.
    pub fn new(inner: E, capacity: usize) -> Self {
        Self {
            inner,
            cache: NonZeroUsize::new(capacity).map(|c| Mutex::new(LruCache::new(c))),
        }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub async fn len(&self) -> usize {
        match &self.cache {
            Some(cache) => cache.lock().await.len(),
            None => 0,
        }
    }
}

#[async_trait]
impl<E: EmbeddingAccessor> EmbeddingAccessor for CachedEmbeddingAccessor<E> {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, RouterError> {
        let Some(cache) = &self.cache else {
            return self.inner.embed(text).await;
        };

        if let Some(hit) = cache.lock().await.get(text) {
            debug!("Cache hit for embedding: '{}'", text);
            return Ok(hit.clone());
        }

        debug!("Cache miss for embedding: '{}'", text);
        let vector = self.inner.embed(text).await?;
        cache.lock().await.put(text.to_string(), vector.clone());
        Ok(vector)
    }
}
