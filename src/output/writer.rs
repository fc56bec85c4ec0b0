//! Console sinks for rendered log lines

use super::config::OutputConfig;
use super::markup::MarkupMode;
use crate::logger::{compose_line, ConsoleSink, SinkLevel};
use std::io::{self, Write};

/// Informational lines to stdout, warnings and errors to stderr
#[derive(Debug, Clone, Copy)]
pub struct StdConsoleSink {
    markup: MarkupMode,
}

impl StdConsoleSink {
    /// Create a sink presenting markup per `markup`
    pub fn new(markup: MarkupMode) -> Self {
        Self { markup }
    }

    /// Pick the markup mode from the terminal the process is attached to
    pub fn detect() -> Self {
        Self::from_config(&OutputConfig::new())
    }

    /// Create a sink using the configured markup mode
    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(config.markup())
    }

    /// Get the markup mode applied before writing
    pub fn markup(&self) -> MarkupMode {
        self.markup
    }
}

impl ConsoleSink for StdConsoleSink {
    fn write(&self, level: SinkLevel, line: &str, trace: Option<&str>) -> io::Result<()> {
        let text = self.markup.apply(&compose_line(line, trace));
        match level {
            SinkLevel::Info => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{text}")?;
                stdout.flush()
            }
            SinkLevel::Warning | SinkLevel::Error => {
                let mut stderr = io::stderr().lock();
                writeln!(stderr, "{text}")?;
                stderr.flush()
            }
        }
    }
}

/// Forwards lines to the active `tracing` subscriber
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    markup: MarkupMode,
}

impl TracingSink {
    /// Create a sink presenting markup per `markup`
    pub fn new(markup: MarkupMode) -> Self {
        Self { markup }
    }
}

impl Default for TracingSink {
    /// Subscribers print plain text, so tags are stripped
    fn default() -> Self {
        Self::new(MarkupMode::Strip)
    }
}

impl ConsoleSink for TracingSink {
    fn write(&self, level: SinkLevel, line: &str, trace: Option<&str>) -> io::Result<()> {
        let text = self.markup.apply(&compose_line(line, trace));
        match level {
            SinkLevel::Info => tracing::info!("{text}"),
            SinkLevel::Warning => tracing::warn!("{text}"),
            SinkLevel::Error => tracing::error!("{text}"),
        }
        Ok(())
    }
}
