//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "intent_router_core=info,intent_router=info";

/// Installs the global tracing subscriber.
///
/// Filter directives come from `INTENT_ROUTER_LOG` (falls back to `info` for this
/// crate). `INTENT_ROUTER_LOG_FORMAT=json` switches to structured JSON lines.
/// Logs go to stderr so stdout stays reserved for replies. Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("INTENT_ROUTER_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let json = std::env::var("INTENT_ROUTER_LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let registry = tracing_subscriber::registry().with(filter);
        if json {
            registry
                .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
                .init();
        } else {
            registry
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .init();
        }
    });
}
