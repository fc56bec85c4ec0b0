use std::borrow::Cow;
use std::io;

use super::severity::SinkLevel;

/// Host console that receives rendered lines
pub trait ConsoleSink: Send + Sync {
    /// Write one rendered line, with an optional trace to show beneath it
    fn write(&self, level: SinkLevel, line: &str, trace: Option<&str>) -> io::Result<()>;
}

/// Join a line and its trace the way consoles display them
pub fn compose_line<'a>(line: &'a str, trace: Option<&str>) -> Cow<'a, str> {
    match trace {
        Some(trace) if !trace.is_empty() => Cow::Owned(format!("{line}\n{trace}")),
        _ => Cow::Borrowed(line),
    }
}
