//! Logging setup for the access engine
//!
//! Host applications embed this crate, so subscriber installation is opt-in:
//! call [`init_logging`] once at startup, or install your own subscriber and
//! skip this module entirely. All engine internals log through `tracing`
//! macros only.

use crate::utils::error::{PainelError, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter, e.g. `painel_access=debug`
pub const LOG_FILTER_ENV: &str = "PAINEL_LOG";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default filter directive when `PAINEL_LOG` is unset
    pub default_filter: String,
    /// Emit JSON lines instead of the human-readable format
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
            json: false,
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Returns an error if a subscriber is already installed; tests that share a
/// process should use their own scoped subscribers instead.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter.clone()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| PainelError::internal(format!("Failed to install subscriber: {}", e)))
}
