use crate::embeddings::EmbeddingAccessor;
use crate::error::RouterError;
use crate::models::IntentDefinition;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::time::{sleep, Duration};

// ============================================================================
// Stub accessor for testing
// ============================================================================

/// Deterministic accessor backed by a lookup table.
///
/// Unknown texts fail with `EmbeddingUnavailable`. Entries can be swapped at
/// runtime to simulate a provider that changes its output.
pub struct StubEmbedder {
    vectors: Mutex<HashMap<String, Vec<f32>>>,
    calls: AtomicUsize,
    pub delay: Option<Duration>,
    pub fail_with: Option<RouterError>,
}

impl StubEmbedder {
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, Vec<f32>)>) -> Self {
        Self {
            vectors: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect(),
            ),
            calls: AtomicUsize::new(0),
            delay: None,
            fail_with: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn failing(error: RouterError) -> Self {
        let mut stub = Self::new(Vec::<(&str, Vec<f32>)>::new());
        stub.fail_with = Some(error);
        stub
    }

    pub fn set(&self, text: &str, vector: Vec<f32>) {
        self.vectors.lock().unwrap().insert(text.to_string(), vector);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingAccessor for StubEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, RouterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            sleep(delay).await;
        }
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.vectors
            .lock()
            .unwrap()
            .get(text)
            .cloned()
            .ok_or_else(|| RouterError::EmbeddingUnavailable(format!("no stub vector for '{}'", text)))
    }
}

/// The greeting/farewell scenario: two intents in a 2-D embedding space.
pub fn greeting_farewell_stub() -> StubEmbedder {
    StubEmbedder::new([
        ("hello", vec![1.0, 0.0]),
        ("hi there", vec![0.9, 0.1]),
        ("bye", vec![0.0, 1.0]),
        ("see you later", vec![0.1, 0.9]),
        ("hey", vec![0.95, 0.05]),
        ("goodnight", vec![0.5, 0.5]),
    ])
}

pub fn greeting_farewell_intents() -> Vec<IntentDefinition> {
    vec![
        IntentDefinition::new("greeting", "Hello! How can I help?", ["hello", "hi there"]),
        IntentDefinition::new("farewell", "Goodbye!", ["bye", "see you later"]),
    ]
}
