use crate::error::RouterError;
use tokio::sync::oneshot;

/// Messages that can be sent to the local embedding actor.
#[derive(Debug)]
pub enum EmbeddingMessage {
    /// A request to embed a single text.
    Embed {
        text: String,
        /// A channel to send the resulting vector back.
        responder: oneshot::Sender<Result<Vec<f32>, RouterError>>,
    },
}
