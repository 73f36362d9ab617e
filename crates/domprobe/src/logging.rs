//! Test-time log output.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "domprobe=debug";

/// Install a fmt subscriber that writes through the test harness.
///
/// Honors `RUST_LOG`, falling back to [`DEFAULT_FILTER`]. Safe to call from
/// every test; only the first call installs anything.
pub fn init_test_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        init_test_logging();
        init_test_logging();
        tracing::debug!("logging initialised twice");
    }
}
