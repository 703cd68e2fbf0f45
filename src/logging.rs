//! Logger setup for native and browser builds.

use crate::config::LogLevel;

/// Install the global logger.
///
/// Native builds log through `env_logger`; `RUST_LOG` overrides `level`.
/// Browser builds log to the developer console. Calling this twice is
/// harmless: the second call is ignored.
pub fn init_logging(level: LogLevel) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let result = env_logger::Builder::new()
            .filter_level(level.to_level_filter())
            .parse_default_env()
            .format_timestamp_millis()
            .try_init();
        if result.is_err() {
            log::debug!("Logger already initialized");
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        if console_log::init_with_level(level.to_level()).is_err() {
            log::debug!("Logger already initialized");
        }
    }
}
