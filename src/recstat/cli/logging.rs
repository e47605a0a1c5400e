use tracing::debug;

/// Installs the global tracing subscriber. Logs go to stderr so stdout carries
/// only command output.
pub fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();

    debug!("recstat started with verbose logging");
}
