//! Test Module
//!
//! ## Test Categories
//! - `stubs`: deterministic embedding accessors shared by the suites
//! - `brain_tests`: training and classification against stub embeddings
//! - `router_tests`: lifecycle, retraining and concurrency of `IntentRouter`
//! - `embedding_tests`: HTTP accessor, LRU cache and deadlines
//! - `config_tests`: environment-driven configuration and intent files

pub mod config_tests;
pub mod stubs;
