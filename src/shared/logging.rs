use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Filter used when `RUST_LOG` is unset or invalid
const DEFAULT_FILTER: &str = "warn";

/// Installs the global tracing subscriber, writing compact lines to stderr.
///
/// Progress output goes through the progress reporter; tracing carries the
/// diagnostic side channel and stays at `warn` unless `RUST_LOG` asks for more.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();

    if let Err(e) = result {
        eprintln!("⚠️  Warning: Failed to initialize logging: {}", e);
    }
}
