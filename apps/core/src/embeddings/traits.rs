use crate::error::RouterError;
use async_trait::async_trait;

/// Defines the boundary to the external embedding provider.
///
/// Implementations only marshal requests and responses. Repeated calls within one
/// process are expected to return vectors of the same length.
#[async_trait]
pub trait EmbeddingAccessor: Send + Sync + 'static {
    /// Maps a text to its embedding vector.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, RouterError>;
}

#[async_trait]
impl<T: EmbeddingAccessor + ?Sized> EmbeddingAccessor for Box<T> {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, RouterError> {
        (**self).embed(text).await
    }
}

#[async_trait]
impl<T: EmbeddingAccessor + ?Sized> EmbeddingAccessor for std::sync::Arc<T> {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, RouterError> {
        (**self).embed(text).await
    }
}
