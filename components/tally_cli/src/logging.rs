//! Diagnostic logging setup

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize logging to standard error.
///
/// Use the `RUST_LOG` environment variable to override the default filter,
/// which is `warn`. `RUST_LOG=interpreter=trace` shows every dispatched
/// instruction.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
