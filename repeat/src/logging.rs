//! Diagnostic tracing for the stage pipeline.
//!
//! Events go to stderr, filtered by `RUST_LOG`. The default level is `warn`,
//! and nothing in the pipeline logs above `debug`, so the usage block and the
//! printed messages are the only output of a normal run.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Call once, from `main`.
///
/// # Example
/// ```bash
/// RUST_LOG=repeat=debug repeat -c 2 hello
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
