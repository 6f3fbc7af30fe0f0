// SlotGrid - util/logging.rs
//
// Structured logging setup for consuming applications and harnesses.
// The library itself only emits `tracing` events and never installs a
// subscriber on its own.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - Explicit level argument from the consumer
//
// Output: stderr. Raw document contents are never logged above debug.

use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// `level` is an explicit level requested by the consumer (if any).
///
/// Priority: RUST_LOG env var > explicit level > default "info".
///
/// Call at most once per process; a second call panics inside
/// tracing-subscriber because the global subscriber is already set.
pub fn init(level: Option<&str>) {
    // Build the env filter with the correct priority
    let filter = if std::env::var("RUST_LOG").is_ok() {
        // RUST_LOG takes highest priority (already set)
        EnvFilter::from_default_env()
    } else if let Some(level) = level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}
