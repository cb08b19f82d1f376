use tracing_subscriber::EnvFilter;

/// Sets up log output for a workflow step.
///
/// Logs go to stdout without timestamps, since the runner adds its own.
/// The verbosity can be changed with `RUST_LOG` and defaults to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stdout)
        .init();
}
