// Intent Router entry point
// Loads the intent file, trains once, then answers utterances read from stdin.

use anyhow::Context;
use intent_router_core::telemetry::init_tracing;
use intent_router_core::{
    CachedEmbeddingAccessor, ChatReply, EmbeddingAccessor, EmbeddingBackend,
    HttpEmbeddingAccessor, IntentRouter, IntentSet, LocalEmbeddingAccessor, RouterConfig,
};
use serde_json::json;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};

const RETRAIN_COMMAND: &str = ":retrain";

type Router = IntentRouter<CachedEmbeddingAccessor<Box<dyn EmbeddingAccessor>>>;

fn build_router(config: &RouterConfig) -> anyhow::Result<Router> {
    let accessor: Box<dyn EmbeddingAccessor> = match config.backend {
        EmbeddingBackend::Http => {
            info!("Using embedding service at {}", config.embedding_url);
            Box::new(HttpEmbeddingAccessor::new(config.embedding_url.clone()))
        }
        EmbeddingBackend::Local => {
            info!("Using local embedding model in {:?}", config.models_dir);
            Box::new(LocalEmbeddingAccessor::new(config.models_dir.clone()))
        }
    };
    let accessor = CachedEmbeddingAccessor::new(accessor, config.query_cache_size);
    IntentRouter::new(accessor, config.classifier.clone()).context("building intent router")
}

async fn train_from_file(router: &Router, config: &RouterConfig) -> anyhow::Result<()> {
    let set = IntentSet::load(&config.intents_path)
        .await
        .with_context(|| format!("loading intents from {:?}", config.intents_path))?;
    router
        .train(&set.intents)
        .await
        .context("training intent centroids")?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = RouterConfig::load().context("reading configuration")?;
    let router = build_router(&config)?;

    // Traffic is only accepted once the first training pass has succeeded.
    train_from_file(&router, &config).await?;
    info!("Intent router ready, reading utterances from stdin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        let text = line.trim();
        let output = if text == RETRAIN_COMMAND {
            match train_from_file(&router, &config).await {
                Ok(()) => json!({ "retrained": true }),
                Err(e) => {
                    error!("Retraining failed: {:#}", e);
                    json!({ "error": format!("{:#}", e) })
                }
            }
        } else {
            match router.classify(text).await {
                Ok(result) => serde_json::to_value(ChatReply::from(result))?,
                Err(e) => json!({ "error": e.to_string() }),
            }
        };

        stdout.write_all(output.to_string().as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}
