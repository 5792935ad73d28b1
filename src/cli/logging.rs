//! Logging initialization

use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber
///
/// `RUST_LOG` wins when set; otherwise warnings only, or debug output for this
/// crate with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "balvatika=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
