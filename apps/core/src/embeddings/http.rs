use crate::embeddings::traits::EmbeddingAccessor;
use crate::error::RouterError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

/// Default endpoint of the sentence-transformers embedding service.
pub const DEFAULT_EMBEDDING_URL: &str = "http://localhost:7860/v1/embeddings";

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    inputs: &'a str,
}

/// Embedding accessor backed by a remote HTTP service.
///
/// The service accepts `{"inputs": "<text>"}` and answers with a bare JSON array
/// of floats.
#[derive(Debug, Clone)]
pub struct HttpEmbeddingAccessor {
    client: Client,
    endpoint: Url,
}

impl HttpEmbeddingAccessor {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    /// Creates an accessor reusing an existing `reqwest::Client`.
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn request(&self, text: &str) -> Result<Vec<f32>, RouterError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&EmbeddingRequest { inputs: text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RouterError::EmbeddingUnavailable(format!(
                "embedding service responded with status {}",
                status
            )));
        }

        let vector: Vec<f32> = response.json().await?;
        if vector.is_empty() {
            return Err(RouterError::EmbeddingUnavailable(
                "embedding service returned an empty vector".to_string(),
            ));
        }
        Ok(vector)
    }
}

#[async_trait]
impl EmbeddingAccessor for HttpEmbeddingAccessor {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, RouterError> {
        match self.request(text).await {
            Ok(vector) => {
                debug!("Embedded {} chars into {} dims", text.len(), vector.len());
                Ok(vector)
            }
            Err(e) => {
                warn!("Embedding request to {} failed: {}", self.endpoint, e);
                Err(e)
            }
        }
    }
}
