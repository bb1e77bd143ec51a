use crate::error::{Result, RouterError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

/// A labeled intent with its canned response and example utterances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct IntentDefinition {
    /// Unique, non-empty identifier of the intent.
    #[serde(rename = "intent", alias = "label")]
    #[validate(length(min = 1))]
    pub label: String,
    /// The reply returned when a query is routed to this intent.
    pub response: String,
    /// Example utterances; at least one is required.
    #[validate(length(min = 1))]
    pub examples: Vec<String>,
}

impl IntentDefinition {
    pub fn new<L, R, I, S>(label: L, response: R, examples: I) -> Self
    where
        L: Into<String>,
        R: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            response: response.into(),
            examples: examples.into_iter().map(Into::into).collect(),
        }
    }
}

/// The intent file layout: `{"intents": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntentSet {
    pub intents: Vec<IntentDefinition>,
}

impl IntentSet {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let set: IntentSet = serde_json::from_str(json)?;
        for intent in &set.intents {
            intent.validate()?;
        }
        Ok(set)
    }

    /// Reads and parses an intent file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            RouterError::Config(format!("Failed to read intent file {:?}: {}", path, e))
        })?;
        Self::from_json_str(&raw)
    }
}

/// Outcome of routing one utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Matched label, or `None` when the best score fell below the threshold.
    pub label: Option<String>,
    pub response: String,
    /// Raw cosine similarity of the best-scoring centroid, in `[-1, 1]`.
    pub confidence: f32,
}

impl ClassificationResult {
    pub fn is_match(&self) -> bool {
        self.label.is_some()
    }
}

/// Reply payload for the chat front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub bot_message: String,
    pub intent: Option<String>,
    pub confidence: f32,
}

impl From<ClassificationResult> for ChatReply {
    fn from(result: ClassificationResult) -> Self {
        Self {
            bot_message: result.response,
            intent: result.label,
            confidence: result.confidence,
        }
    }
}
