//! Log subscriber setup for binaries and tests.

use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a `tracing` fmt subscriber filtered by `RUST_LOG`.
///
/// Idempotent: only the first call installs anything; later calls (or a
/// subscriber installed elsewhere) are left alone. Returns `true` if this
/// call installed the subscriber.
pub fn init() -> bool {
    init_with_default(DEFAULT_FILTER)
}

/// Like [`init`], with a caller-chosen fallback filter.
pub fn init_with_default(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("log subscriber installed");
    }
    installed
}
