//! Logging initialization

/// Initialize logging based on the debug flag
///
/// Diagnostics go to stderr so stdout stays clean for per-resource outcomes
/// and the run summary. RUST_LOG overrides the default filter either way.
pub fn init_logging(debug: bool) {
    let default_filter = if debug { "catsync=debug" } else { "catsync=warn" };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_target(true)
        .init();
}
