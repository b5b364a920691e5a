use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise only warnings are shown, or debug
/// events from this crate when `verbose` is set.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,jvm_compat=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    // A subscriber may already be installed when embedded; keep it.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
