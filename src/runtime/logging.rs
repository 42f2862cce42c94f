use tracing_subscriber::EnvFilter;

use medialib::config::LogSettings;

/// Install the global `tracing` subscriber, writing to stderr so the tree dump
/// on stdout stays clean. `RUST_LOG` overrides the configured filter.
pub fn init(settings: &LogSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
