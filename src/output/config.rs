//! Output configuration and markup mode selection

use super::markup::MarkupMode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Configuration for the bundled console sinks
#[derive(Debug, Clone)]
pub struct OutputConfig {
    markup: MarkupMode,
    log_level: Level,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputConfig {
    /// Create a configuration from the terminal and environment
    pub fn new() -> Self {
        // Determine log level from environment or defaults
        let log_level = match std::env::var("RUST_LOG") {
            Ok(level) => match level.to_lowercase().as_str() {
                "trace" => Level::TRACE,
                "debug" => Level::DEBUG,
                "warn" => Level::WARN,
                "error" => Level::ERROR,
                _ => Level::INFO,
            },
            Err(_) => Level::INFO,
        };

        Self {
            markup: MarkupMode::detect(),
            log_level,
        }
    }

    /// Override the detected markup mode
    pub fn with_markup(mut self, markup: MarkupMode) -> Self {
        self.markup = markup;
        self
    }

    /// Get the markup mode for console sinks
    pub fn markup(&self) -> MarkupMode {
        self.markup
    }

    /// Get the current log level
    pub fn log_level(&self) -> Level {
        self.log_level
    }

    /// Set verbose mode (DEBUG level)
    pub fn set_verbose(&mut self) {
        self.log_level = Level::DEBUG;
    }

    /// Install a stderr `tracing` subscriber at the configured level
    ///
    /// Returns `false` when another subscriber is already installed.
    pub fn init_tracing(&self) -> bool {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive(self.log_level.into()))
            .with_target(false)
            .with_level(true)
            .with_ansi(self.markup == MarkupMode::Ansi)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let mut config = OutputConfig::new().with_markup(MarkupMode::Keep);
        assert_eq!(config.markup(), MarkupMode::Keep);

        config.set_verbose();
        assert_eq!(config.log_level(), Level::DEBUG);
    }
}
