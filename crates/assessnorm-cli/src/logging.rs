// crates/assessnorm-cli/src/logging.rs

use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout stays clean for reports.
/// Level comes from RUST_LOG, default `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
