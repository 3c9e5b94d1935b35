//! Tracing subscriber setup for the command line

use tracing_subscriber::EnvFilter;

/// Filter directive for a verbosity level
///
/// 0 shows warnings, 1 adds progress milestones, 2 and above adds
/// per-tile detail.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "mazetile=warn",
        1 => "mazetile=info",
        _ => "mazetile=debug",
    }
}

/// Install a stderr formatter, honoring `RUST_LOG` when it is set
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(verbosity: u8) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbosity)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
