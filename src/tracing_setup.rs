use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Installs the global fmt subscriber. Filter comes from `BACON_LOG`,
/// defaulting to `bacon_number=info`. Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("bacon_number=info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    });
}
