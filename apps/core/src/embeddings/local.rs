use crate::embeddings::messages::EmbeddingMessage;
use crate::embeddings::traits::EmbeddingAccessor;
use crate::error::RouterError;
use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{error, info, warn};

/// A handle to the local embedding actor.
///
/// The actor owns an in-process `AllMiniLML6V2` model (384 dimensions), the same
/// model the remote embedding service wraps. The handle is cheap to clone.
#[derive(Clone)]
pub struct LocalEmbeddingAccessor {
    sender: mpsc::Sender<EmbeddingMessage>,
}

impl LocalEmbeddingAccessor {
    /// Spawns the actor. The model is loaded (and downloaded into `cache_dir` if
    /// missing) inside the actor task; requests fail with `EmbeddingUnavailable`
    /// if loading does not succeed.
    pub fn new(cache_dir: PathBuf) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let actor = LocalEmbeddingRunner::new(receiver, cache_dir);
        tokio::spawn(async move { actor.run().await });
        Self { sender }
    }
}

#[async_trait]
impl EmbeddingAccessor for LocalEmbeddingAccessor {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, RouterError> {
        let (send, recv) = oneshot::channel();
        let msg = EmbeddingMessage::Embed {
            text: text.to_string(),
            responder: send,
        };
        self.sender.send(msg).await.map_err(|_| {
            RouterError::EmbeddingUnavailable("Embedding actor closed".to_string())
        })?;
        recv.await.map_err(|_| {
            RouterError::EmbeddingUnavailable("Embedding actor failed to respond".to_string())
        })?
    }
}

// --- Actor Runner (Internal Logic) ---
struct LocalEmbeddingRunner {
    receiver: mpsc::Receiver<EmbeddingMessage>,
    model: Option<Arc<TextEmbedding>>,
    cache_dir: PathBuf,
}

impl LocalEmbeddingRunner {
    fn new(receiver: mpsc::Receiver<EmbeddingMessage>, cache_dir: PathBuf) -> Self {
        Self {
            receiver,
            model: None,
            cache_dir,
        }
    }

    async fn run(mut self) {
        info!("Local embedding actor started");

        let mut options = InitOptions::new(EmbeddingModel::AllMiniLML6V2);
        options.show_download_progress = false;
        options.cache_dir = self.cache_dir.clone();

        match tokio::task::spawn_blocking(move || TextEmbedding::try_new(options)).await {
            Ok(Ok(model)) => {
                info!("Embedding model loaded from {:?}", self.cache_dir);
                self.model = Some(Arc::new(model));
            }
            Ok(Err(e)) => error!("Failed to load embedding model: {}", e),
            Err(e) => error!("Embedding model loader panicked: {}", e),
        }

        while let Some(msg) = self.receiver.recv().await {
            self.handle_message(msg).await;
        }
        info!("Local embedding actor stopped");
    }

    async fn handle_message(&self, msg: EmbeddingMessage) {
        match msg {
            EmbeddingMessage::Embed { text, responder } => {
                let result = self.embed(text).await;
                if responder.send(result).is_err() {
                    warn!("Failed to send embedding response (channel closed)");
                }
            }
        }
    }

    async fn embed(&self, text: String) -> Result<Vec<f32>, RouterError> {
        let model = self.model.clone().ok_or_else(|| {
            RouterError::EmbeddingUnavailable("Embedding model not loaded".to_string())
        })?;

        let embeddings = tokio::task::spawn_blocking(move || model.embed(vec![text], None))
            .await?
            .map_err(|e| RouterError::EmbeddingUnavailable(format!("Embedding failed: {}", e)))?;

        embeddings
            .into_iter()
            .next()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| RouterError::EmbeddingUnavailable("No embedding generated".to_string()))
    }
}
