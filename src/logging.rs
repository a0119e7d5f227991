use std::sync::Once;

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "BOXMARK_LOG";
const DEFAULT_DIRECTIVE: &str = "info";

/// Installs the global subscriber once; later calls are no-ops.
pub fn init() {
    static LOGGING_SETUP: Once = Once::new();

    LOGGING_SETUP.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
        let result = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
        if let Err(err) = result {
            eprintln!("boxmark: logging already initialized: {err}");
        }
    });
}
