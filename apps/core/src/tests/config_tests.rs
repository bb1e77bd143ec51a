//! Configuration and intent-file tests.

use crate::config::{ClassifierSettings, EmbeddingBackend, RouterConfig};
use crate::error::RouterError;
use crate::models::IntentSet;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

const ALL_VARS: [&str; 8] = [
    "INTENT_ROUTER_MIN_CONFIDENCE",
    "INTENT_ROUTER_FALLBACK_RESPONSE",
    "INTENT_ROUTER_EMBED_TIMEOUT_MS",
    "INTENT_ROUTER_EMBEDDING_URL",
    "INTENT_ROUTER_EMBEDDING_BACKEND",
    "INTENT_ROUTER_MODELS_DIR",
    "INTENT_ROUTER_INTENTS_PATH",
    "INTENT_ROUTER_QUERY_CACHE_SIZE",
];

fn unset_all() -> Vec<(&'static str, Option<&'static str>)> {
    ALL_VARS.iter().map(|v| (*v, None)).collect()
}

#[cfg(test)]
mod router_config_tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_environment() {
        temp_env::with_vars(unset_all(), || {
            let config = RouterConfig::from_env().unwrap();
            assert_eq!(config.classifier, ClassifierSettings::default());
            assert!((config.classifier.min_confidence - 0.6).abs() < f32::EPSILON);
            assert_eq!(config.classifier.fallback_response, "I'm not sure about that 🤔");
            assert_eq!(
                config.embedding_url.as_str(),
                "http://localhost:7860/v1/embeddings"
            );
            assert_eq!(config.backend, EmbeddingBackend::Http);
            assert_eq!(config.intents_path, PathBuf::from("intents.json"));
            assert_eq!(config.query_cache_size, 1000);
        });
    }

    #[test]
    fn test_overrides_are_applied() {
        let mut vars = unset_all();
        vars.extend([
            ("INTENT_ROUTER_MIN_CONFIDENCE", Some("0.75")),
            ("INTENT_ROUTER_FALLBACK_RESPONSE", Some("Pardon?")),
            ("INTENT_ROUTER_EMBED_TIMEOUT_MS", Some("250")),
            ("INTENT_ROUTER_EMBEDDING_URL", Some("http://embedder:9000/embed")),
            ("INTENT_ROUTER_EMBEDDING_BACKEND", Some("local")),
            ("INTENT_ROUTER_QUERY_CACHE_SIZE", Some("0")),
        ]);
        temp_env::with_vars(vars, || {
            let config = RouterConfig::from_env().unwrap();
            assert!((config.classifier.min_confidence - 0.75).abs() < f32::EPSILON);
            assert_eq!(config.classifier.fallback_response, "Pardon?");
            assert_eq!(config.classifier.embed_timeout, Duration::from_millis(250));
            assert_eq!(config.embedding_url.as_str(), "http://embedder:9000/embed");
            assert_eq!(config.backend, EmbeddingBackend::Local);
            assert_eq!(config.query_cache_size, 0);
        });
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let cases = [
            ("INTENT_ROUTER_MIN_CONFIDENCE", "high"),
            ("INTENT_ROUTER_MIN_CONFIDENCE", "1.5"),
            ("INTENT_ROUTER_MIN_CONFIDENCE", "NaN"),
            ("INTENT_ROUTER_EMBED_TIMEOUT_MS", "0"),
            ("INTENT_ROUTER_EMBEDDING_URL", "not a url"),
            ("INTENT_ROUTER_EMBEDDING_BACKEND", "carrier-pigeon"),
            ("INTENT_ROUTER_QUERY_CACHE_SIZE", "-3"),
        ];
        for (name, value) in cases {
            let mut vars = unset_all();
            vars.push((name, Some(value)));
            temp_env::with_vars(vars, || {
                let err = RouterConfig::from_env().unwrap_err();
                assert!(
                    matches!(err, RouterError::Config(_)),
                    "Expected Config error for {}={}, got {:?}",
                    name,
                    value,
                    err
                );
            });
        }
    }

    #[test]
    fn test_classifier_settings_bounds() {
        let at = |min_confidence: f32| ClassifierSettings {
            min_confidence,
            ..ClassifierSettings::default()
        };

        assert!(ClassifierSettings::default().validate().is_ok());
        assert!(at(-1.0).validate().is_ok());
        assert!(at(1.0).validate().is_ok());

        for bad in [f32::NAN, -1.01, 1.01, f32::INFINITY] {
            assert!(matches!(at(bad).validate(), Err(RouterError::Config(_))));
        }

        let no_deadline = ClassifierSettings {
            embed_timeout: Duration::ZERO,
            ..ClassifierSettings::default()
        };
        assert!(matches!(no_deadline.validate(), Err(RouterError::Config(_))));
    }
}

#[cfg(test)]
mod intent_file_tests {
    use super::*;

    #[test]
    fn test_parses_intent_file_layout() {
        let json = r#"{
            "intents": [
                { "intent": "library_hours", "response": "8am to 10pm.", "examples": ["When does the library open?"] },
                { "label": "bus_route", "response": "Route 3.", "examples": ["What is the bus route?", "Which bus goes to town?"] }
            ]
        }"#;
        let set = IntentSet::from_json_str(json).unwrap();
        assert_eq!(set.intents.len(), 2);
        assert_eq!(set.intents[0].label, "library_hours");
        assert_eq!(set.intents[1].label, "bus_route");
        assert_eq!(set.intents[1].examples.len(), 2);
    }

    #[test]
    fn test_rejects_definitions_without_examples() {
        let json = r#"{ "intents": [ { "intent": "x", "response": "y", "examples": [] } ] }"#;
        assert!(matches!(
            IntentSet::from_json_str(json),
            Err(RouterError::InvalidTrainingData(_))
        ));

        assert!(matches!(
            IntentSet::from_json_str("{ not json"),
            Err(RouterError::InvalidTrainingData(_))
        ));
    }

    #[tokio::test]
    async fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "intents": [ {{ "intent": "greeting", "response": "Hi!", "examples": ["hello"] }} ] }}"#
        )
        .unwrap();

        let set = IntentSet::load(file.path()).await.unwrap();
        assert_eq!(set.intents[0].label, "greeting");

        let missing = IntentSet::load("/definitely/not/here.json").await.unwrap_err();
        assert!(matches!(missing, RouterError::Config(_)));
    }
}
