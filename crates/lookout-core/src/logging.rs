//! Logging setup based on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Filter used when neither `RUST_LOG` nor a configuration overrides it.
pub const DEFAULT_FILTER: &str = "info,lookout_chart=debug,lookout_wizard=debug";

/// Install the global fmt subscriber with the default filter.
///
/// `RUST_LOG` takes precedence when set.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install the global fmt subscriber using the filter from a [`LoggingConfig`].
pub fn init_from_config(config: &LoggingConfig) {
    init_with_filter(&config.filter);
}

/// Install the global fmt subscriber with an explicit fallback filter.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_with_filter(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
