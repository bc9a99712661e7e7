pub mod build_info;
pub mod paths;

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "spendsphere_core=info";

/// Initializes the global tracing subscriber. A valid `RUST_LOG` replaces
/// the crate default entirely.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = build_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok());
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

fn build_filter(directives: Option<String>) -> EnvFilter {
    directives
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
