use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "CASEMENT_LOG";

/// Install the global `tracing` subscriber with the default [`Config`].
pub fn init() {
    init_with(&Config::default());
}

/// Install the global `tracing` subscriber and start profiling as configured.
///
/// Calling this more than once is harmless; only the first subscriber is kept.
pub fn init_with(config: &Config) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("global subscriber already installed");
    }

    crate::profiling::init_profiling(config.profiling);
}
