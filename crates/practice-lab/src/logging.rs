use tracing_subscriber::EnvFilter;

/// Overrides the log filter, e.g. `PRACTICE_LAB_LOG=practice_core=trace`.
pub const LOG_ENV: &str = "PRACTICE_LAB_LOG";

/// Installs the stderr subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
