//! Runtime configuration.
//!
//! Values come from `INTENT_ROUTER_*` environment variables, optionally seeded
//! from a `.env` file. Every field has a default so an empty environment yields a
//! working local setup.

use crate::embeddings::http::DEFAULT_EMBEDDING_URL;
use crate::error::{Result, RouterError};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.6;
pub const DEFAULT_FALLBACK_RESPONSE: &str = "I'm not sure about that 🤔";
pub const DEFAULT_EMBED_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_QUERY_CACHE_SIZE: usize = 1000;

/// Which embedding provider the binary wires in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingBackend {
    /// Remote sentence-transformers service.
    Http,
    /// In-process fastembed model.
    Local,
}

impl FromStr for EmbeddingBackend {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" | "remote" => Ok(EmbeddingBackend::Http),
            "local" | "fastembed" => Ok(EmbeddingBackend::Local),
            other => Err(RouterError::Config(format!(
                "unknown embedding backend '{}' (expected 'http' or 'local')",
                other
            ))),
        }
    }
}

/// Settings consumed by the classifier itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierSettings {
    /// Scores strictly below this value are reported as "no match".
    pub min_confidence: f32,
    /// Response returned when no intent clears `min_confidence`.
    pub fallback_response: String,
    /// Deadline for a single embedding call.
    pub embed_timeout: Duration,
}

impl ClassifierSettings {
    /// Checks that the threshold lies within the cosine range `[-1, 1]` and the
    /// deadline is non-zero.
    pub fn validate(&self) -> Result<()> {
        if !(-1.0..=1.0).contains(&self.min_confidence) {
            return Err(RouterError::Config(format!(
                "min_confidence must be within [-1, 1], got {}",
                self.min_confidence
            )));
        }
        if self.embed_timeout.is_zero() {
            return Err(RouterError::Config(
                "embedding timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            fallback_response: DEFAULT_FALLBACK_RESPONSE.to_string(),
            embed_timeout: DEFAULT_EMBED_TIMEOUT,
        }
    }
}

/// Full process configuration, including bootstrap-only values.
#[derive(Debug, Clone, PartialEq)]
pub struct RouterConfig {
    pub classifier: ClassifierSettings,
    pub embedding_url: Url,
    pub backend: EmbeddingBackend,
    pub models_dir: PathBuf,
    pub intents_path: PathBuf,
    /// LRU capacity for query embeddings; 0 disables the cache.
    pub query_cache_size: usize,
}

impl RouterConfig {
    /// Loads `.env` (if present) and then reads the environment.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Reads the environment without touching `.env`.
    pub fn from_env() -> Result<Self> {
        let min_confidence = parse_var("INTENT_ROUTER_MIN_CONFIDENCE", DEFAULT_MIN_CONFIDENCE)?;
        let fallback_response = env::var("INTENT_ROUTER_FALLBACK_RESPONSE")
            .unwrap_or_else(|_| DEFAULT_FALLBACK_RESPONSE.to_string());
        let timeout_ms = parse_var(
            "INTENT_ROUTER_EMBED_TIMEOUT_MS",
            DEFAULT_EMBED_TIMEOUT.as_millis() as u64,
        )?;
        let classifier = ClassifierSettings {
            min_confidence,
            fallback_response,
            embed_timeout: Duration::from_millis(timeout_ms),
        };
        classifier.validate()?;

        let embedding_url = Url::parse(
            &env::var("INTENT_ROUTER_EMBEDDING_URL")
                .unwrap_or_else(|_| DEFAULT_EMBEDDING_URL.to_string()),
        )?;
        let backend = match env::var("INTENT_ROUTER_EMBEDDING_BACKEND") {
            Ok(v) => v.parse()?,
            Err(_) => EmbeddingBackend::Http,
        };

        Ok(Self {
            classifier,
            embedding_url,
            backend,
            models_dir: path_var("INTENT_ROUTER_MODELS_DIR", "data/models/embeddings"),
            intents_path: path_var("INTENT_ROUTER_INTENTS_PATH", "intents.json"),
            query_cache_size: parse_var("INTENT_ROUTER_QUERY_CACHE_SIZE", DEFAULT_QUERY_CACHE_SIZE)?,
        })
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| RouterError::Config(format!("{}='{}': {}", name, raw, e))),
        Err(_) => Ok(default),
    }
}

fn path_var(name: &str, default: &str) -> PathBuf {
    env::var(name)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
