//! Application logging functionality
//!
//! Installs the global tracing subscriber for the CLI. The default level
//! comes from the verbosity flags; a `RUST_LOG` environment filter wins
//! when set.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// `verbosity` is the number of `-v` flags: 0 shows warnings and errors,
/// 1 adds info, 2 or more adds debug.
pub fn init(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
