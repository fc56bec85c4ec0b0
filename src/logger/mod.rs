//! Severity-specific logging facade
//!
//! Every call resolves the issuing type, stamps time and frame, renders a
//! [`LogEvent`] and hands the line to a [`ConsoleSink`] chosen by severity.

mod caller;
mod clock;
mod event;
mod extensions;
mod severity;
mod sink;
mod text;

pub use caller::{
    default_caller_identity, simple_type_name, BacktraceCallerIdentity, CallerIdentity,
    TypeCallerIdentity, UnknownCallerIdentity,
};
pub use clock::{FrameClock, FrameCounter, FrameStamp, SystemClock};
pub use event::{LogEvent, DEFAULT_COLOR_HEX, UNKNOWN_CLASS};
pub use extensions::{plain_success, PLAIN_SUCCESS_COLOR_HEX};
pub use severity::{Severity, SeverityStyle, SinkLevel, StyleTable, DEFAULT_STYLES};
pub use sink::{compose_line, ConsoleSink};
pub use text::{LogText, NULL_TEXT};

use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt::Write as _;
use std::io;

/// Rendered for a missing error on the exception path
pub const MISSING_EXCEPTION_TEXT: &str = "Exception";

/// Failures surfaced by the logging facade
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Console sink write failed: {0}")]
    Sink(#[from] io::Error),

    #[error("Global logger already initialized")]
    AlreadyInitialized,
}

/// Logging facade with one entry point per severity
pub struct Logger {
    sink: Box<dyn ConsoleSink>,
    clock: Box<dyn FrameClock>,
    caller: Box<dyn CallerIdentity>,
    styles: StyleTable,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("styles", &self.styles)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Start assembling a logger
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Get the color and trace table this logger was built with
    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// Log an informational message
    #[inline(never)]
    pub fn log(&self, message: impl Into<LogText>) -> Result<(), LogError> {
        self.write(Severity::Log, message.into(), None)
    }

    /// Log a warning, never with a trace
    #[inline(never)]
    pub fn log_warning(&self, message: impl Into<LogText>) -> Result<(), LogError> {
        self.write(Severity::Warning, message.into(), None)
    }

    /// Log an error to the error sink
    #[inline(never)]
    pub fn log_error(&self, message: impl Into<LogText>) -> Result<(), LogError> {
        self.write(Severity::Error, message.into(), None)
    }

    /// Log a failed assertion to the error sink
    #[inline(never)]
    pub fn log_assertion(&self, message: impl Into<LogText>) -> Result<(), LogError> {
        self.write(Severity::Assertion, message.into(), None)
    }

    /// Log a success message, labelled `Success` on the info sink
    #[inline(never)]
    pub fn log_success(&self, message: impl Into<LogText>) -> Result<(), LogError> {
        self.write(Severity::Success, message.into(), None)
    }

    /// Log an error with its full report attached as the trace
    ///
    /// A missing error logs the text `Exception`, falling back to the
    /// severity's trace flag like any other call.
    #[inline(never)]
    pub fn log_exception<E>(&self, error: Option<&E>) -> Result<(), LogError>
    where
        E: Error + ?Sized,
    {
        match error {
            Some(error) => self.write(
                Severity::Exception,
                LogText::from(error.to_string()),
                Some(error_report(error)),
            ),
            None => self.write(
                Severity::Exception,
                LogText::from(MISSING_EXCEPTION_TEXT),
                None,
            ),
        }
    }

    /// Log an [`anyhow::Error`], attaching its debug report (cause chain and
    /// backtrace when one was captured)
    #[inline(never)]
    pub fn log_error_report(&self, error: &anyhow::Error) -> Result<(), LogError> {
        self.write(
            Severity::Exception,
            LogText::from(error.to_string()),
            Some(format!("{error:?}")),
        )
    }

    /// Build the line for `severity` and hand it to the sink
    ///
    /// `trace` carries an error report; `None` defers to the severity's
    /// trace flag.
    #[inline(never)]
    fn write(
        &self,
        severity: Severity,
        text: LogText,
        trace: Option<String>,
    ) -> Result<(), LogError> {
        let class_name = self.caller.resolve();
        let stamp = self.clock.now();
        let style = self.styles.get(severity);

        let trace = match trace {
            Some(report) => report,
            None if style.include_trace => Backtrace::force_capture().to_string(),
            None => String::new(),
        };

        let event = LogEvent::new(
            Some(text.as_str()),
            Some(style.color_hex),
            severity.label(),
            class_name.as_deref(),
            stamp.time,
            stamp.frame,
            Some(trace.as_str()),
        );
        let line = event.render();

        let level = severity.sink_level();
        let trace = match level {
            SinkLevel::Warning => None,
            SinkLevel::Info | SinkLevel::Error => {
                Some(event.stack_trace()).filter(|trace| !trace.is_empty())
            }
        };

        self.sink.write(level, &line, trace)?;
        Ok(())
    }
}

/// Render an error with its type and cause chain
pub fn error_report<E: Error + ?Sized>(error: &E) -> String {
    let type_name = simple_type_name(std::any::type_name::<E>());
    let mut report = if type_name.starts_with("dyn ") {
        error.to_string()
    } else {
        format!("{type_name}: {error}")
    };

    let mut source = error.source();
    if source.is_some() {
        report.push_str("\n\nCaused by:");
    }
    let mut index = 0;
    while let Some(cause) = source {
        let _ = write!(report, "\n    {index}: {cause}");
        source = cause.source();
        index += 1;
    }
    report
}

/// Assembles a [`Logger`]; unset collaborators use the platform defaults
#[derive(Default)]
pub struct LoggerBuilder {
    sink: Option<Box<dyn ConsoleSink>>,
    clock: Option<Box<dyn FrameClock>>,
    caller: Option<Box<dyn CallerIdentity>>,
    styles: Option<StyleTable>,
}

impl LoggerBuilder {
    /// Set the console receiving rendered lines
    pub fn sink(mut self, sink: impl ConsoleSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Set the time and frame source
    pub fn clock(mut self, clock: impl FrameClock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Set the caller identity provider
    pub fn caller(mut self, caller: impl CallerIdentity + 'static) -> Self {
        self.caller = Some(Box::new(caller));
        self
    }

    /// Replace the default color and trace table
    pub fn styles(mut self, styles: StyleTable) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Build the logger, filling unset collaborators with defaults
    pub fn build(self) -> Logger {
        Logger {
            sink: self
                .sink
                .unwrap_or_else(|| Box::new(crate::output::StdConsoleSink::detect())),
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock::new())),
            caller: self.caller.unwrap_or_else(default_caller_identity),
            styles: self.styles.unwrap_or(DEFAULT_STYLES),
        }
    }
}
