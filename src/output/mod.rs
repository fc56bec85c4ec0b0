//! Console output for rendered log lines
//!
//! Provides the bundled sinks, color markup handling for consoles that do not
//! render `<color>` tags, and the process-wide [`Logger`] used by the
//! `log_*!` macros.

mod config;
mod logging;
mod markup;
pub(crate) mod writer;

pub use config::OutputConfig;
pub use markup::{markup_to_ansi, strip_color_markup, MarkupMode};
pub use writer::{StdConsoleSink, TracingSink};

use crate::logger::{LogError, Logger};
use once_cell::sync::{Lazy, OnceCell};

static LOGGER: OnceCell<Logger> = OnceCell::new();

static DEFAULT_LOGGER: Lazy<Logger> = Lazy::new(|| Logger::builder().build());

/// Install the process-wide logger used by the logging macros
pub fn init(logger: Logger) -> Result<(), LogError> {
    LOGGER.set(logger).map_err(|_| LogError::AlreadyInitialized)
}

/// Install a logger writing to the standard streams per `config`
pub fn init_with_config(config: &OutputConfig) -> Result<(), LogError> {
    init(
        Logger::builder()
            .sink(StdConsoleSink::from_config(config))
            .build(),
    )
}

/// Check if a process-wide logger was installed
pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

/// Get the process-wide logger
pub fn logger() -> &'static Logger {
    match LOGGER.get() {
        Some(logger) => logger,
        // Default to the standard streams if not initialized
        None => Lazy::force(&DEFAULT_LOGGER),
    }
}
