//! Logger initialization.
//!
//! The library logs through the `log` facade only; the binary installs
//! `env_logger` once at startup.

use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "huepick=debug").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Debug output for this crate, overriding `RUST_LOG`.
    pub fn verbose() -> Self {
        Self {
            env_filter: Some("huepick=debug".to_string()),
            ..Self::default()
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            // CLI status lines already cover normal output.
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.write_style(config.write_style);
        if let Err(e) = builder.try_init() {
            log::debug!("keeping existing logger: {}", e);
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(LoggingConfig::verbose());
        init_logging(LoggingConfig::default());
        log::debug!("still logging");
    }
}
