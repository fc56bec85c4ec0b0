//! Severity levels and their compile-time style table

use std::fmt;

/// Severity of a single log call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Log,
    Warning,
    Error,
    Assertion,
    Exception,
    /// Informational line with its own highlight color and label
    Success,
}

/// Host console channel a line is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkLevel {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Log,
        Severity::Warning,
        Severity::Error,
        Severity::Assertion,
        Severity::Exception,
        Severity::Success,
    ];

    /// Label rendered between brackets in the formatted line
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Log => "Log",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Assertion => "Assert",
            Severity::Exception => "Exception",
            Severity::Success => "Success",
        }
    }

    /// Sink the rendered line is dispatched to
    pub fn sink_level(&self) -> SinkLevel {
        match self {
            Severity::Warning => SinkLevel::Warning,
            Severity::Error | Severity::Assertion | Severity::Exception => SinkLevel::Error,
            Severity::Log | Severity::Success => SinkLevel::Info,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Color and trace inclusion for one severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityStyle {
    /// Six hex digits, no leading `#`
    pub color_hex: &'static str,
    /// Attach a captured backtrace to every line of this severity
    pub include_trace: bool,
}

/// Style per severity, indexed by [`Severity`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTable {
    pub log: SeverityStyle,
    pub warning: SeverityStyle,
    pub error: SeverityStyle,
    pub assertion: SeverityStyle,
    pub exception: SeverityStyle,
    pub success: SeverityStyle,
}

impl StyleTable {
    /// Get the style for `severity`
    pub fn get(&self, severity: Severity) -> SeverityStyle {
        match severity {
            Severity::Log => self.log,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
            Severity::Assertion => self.assertion,
            Severity::Exception => self.exception,
            Severity::Success => self.success,
        }
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        DEFAULT_STYLES
    }
}

pub const DEFAULT_STYLES: StyleTable = StyleTable {
    log: SeverityStyle {
        color_hex: "BDC3C7",
        include_trace: false,
    },
    warning: SeverityStyle {
        color_hex: "FFF9D6",
        include_trace: false,
    },
    error: SeverityStyle {
        color_hex: "F5B7B1",
        include_trace: false,
    },
    assertion: SeverityStyle {
        color_hex: "E67E22",
        include_trace: false,
    },
    exception: SeverityStyle {
        color_hex: "F5B7B1",
        include_trace: true,
    },
    success: SeverityStyle {
        color_hex: "A9DFBF",
        include_trace: false,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_mapping() {
        assert_eq!(Severity::Log.sink_level(), SinkLevel::Info);
        assert_eq!(Severity::Success.sink_level(), SinkLevel::Info);
        assert_eq!(Severity::Warning.sink_level(), SinkLevel::Warning);
        assert_eq!(Severity::Error.sink_level(), SinkLevel::Error);
        assert_eq!(Severity::Assertion.sink_level(), SinkLevel::Error);
        assert_eq!(Severity::Exception.sink_level(), SinkLevel::Error);
    }

    #[test]
    fn test_default_trace_flags() {
        for severity in Severity::ALL {
            let style = DEFAULT_STYLES.get(severity);
            assert_eq!(style.include_trace, severity == Severity::Exception);
            assert_eq!(style.color_hex.len(), 6);
            assert!(!style.color_hex.starts_with('#'));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Severity::Success.to_string(), "Success");
        assert_eq!(Severity::Assertion.label(), "Assert");
    }
}
