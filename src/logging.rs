//! Log output for the CLI.

use tracing_subscriber::EnvFilter;

/// Installs a stderr fmt subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Calling this twice is a no-op.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .with_writer(std::io::stderr)
        .try_init();
}
